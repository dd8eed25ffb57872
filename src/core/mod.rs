//! Core engine modules for TimelineSleuth.
//!
//! Contains the canonical event model, schema matching, query dispatch,
//! record classification, event fan-out, document walking, the plugin
//! registry and the background artifact reader.

pub mod artifact;
pub mod artifact_reader;
pub mod classifier;
pub mod diagnostics;
pub mod dispatcher;
pub mod document;
pub mod emitter;
pub mod event;
pub mod plugin;
pub mod registry;
pub mod schema;
pub mod table_reader;
