//! Common test utilities for static-upload CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and home with scrubbed credentials
//! - Assertion macros: `assert_output_contains!`, `assert_failed!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
