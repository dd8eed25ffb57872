//! TimelineSleuth library crate.
//!
//! Exposes the engine, the bundled artifact plugins and the exporters so
//! that integration tests and other hosts can drive them. The binary entry
//! point is in `main.rs`.

pub mod core;
pub mod export;
pub mod plugins;
pub mod util;
