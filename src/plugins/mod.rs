//! Bundled artifact plugins.
//!
//! Nothing registers itself; the host calls [`register_builtin`] on a
//! registry it owns.

pub mod apple_account;
pub mod knowledgec;
pub mod knowledgec_schema;

use crate::core::registry::PluginRegistry;

pub use apple_account::AppleAccountPlugin;
pub use knowledgec::KnowledgeCPlugin;

/// Register every bundled plugin, tabular first.
pub fn register_builtin(registry: &mut PluginRegistry) {
    registry.register_tabular(KnowledgeCPlugin);
    registry.register_document(AppleAccountPlugin);
}
