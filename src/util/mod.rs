//! Shared helpers: constants, error types, time conversion and run
//! configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod time;
