//! Command entry points

pub mod upload;
