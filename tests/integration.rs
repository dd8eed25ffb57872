//! Integration tests for TimelineSleuth.
//!
//! These tests drive the library end to end with in-memory SQLite
//! databases and property lists, plus a few scratch files under the system
//! temp directory.

mod error_types;
mod export_validation;
mod time_utils;
