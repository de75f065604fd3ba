//! Capability traits shared by every structural node.
//!
//! Instead of a single-rooted class chain, node types compose small
//! capabilities: every element carries an optional id and an extension
//! list, and backbone elements additionally carry modifier extensions.

use crate::types::Extension;

/// The "has id, has extensions" capability every element shares.
pub trait Element {
    /// Implementation-defined identity string, unique within the enclosing
    /// resource.
    fn id(&self) -> Option<&str>;

    /// Ordered extension list; absent state is the empty slice.
    fn extension(&self) -> &[Extension];
}

/// A non-primitive element nested inside a resource. Modifier extensions
/// change the meaning of their container and must never be ignored by
/// consumers.
pub trait BackboneElement: Element {
    fn modifier_extension(&self) -> &[Extension];
}
