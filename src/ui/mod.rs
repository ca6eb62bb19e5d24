//! Terminal output for the binary

pub mod error;
pub mod output;
