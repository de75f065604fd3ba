//! Four-phase, prunable tree traversal.
//!
//! Every node type implements [`Visitable`] and drives the same skeleton:
//!
//! ```text
//! if visitor.pre_visit(self) {
//!     visitor.visit_start(name, index, self);
//!     if visitor.visit(name, index, self) {
//!         // children, in declared field order
//!     }
//!     visitor.visit_end(name, index, self);
//!     visitor.post_visit(self);
//! }
//! ```
//!
//! `pre_visit` returning `false` skips the node and its entire subtree;
//! `visit` returning `false` skips only the children, with `visit_end` and
//! `post_visit` still delivered. Children are visited depth-first in the
//! type's declared field order, starting with `extension` (and
//! `modifierExtension` where present), then the type's own fields; list
//! elements carry their insertion-order index. This protocol is the sole
//! sanctioned way for collaborators to read an object graph; the walk is
//! synchronous and single-threaded, and the two boolean gates are the only
//! cancellation mechanism.

mod collecting;

pub use collecting::{CollectedNode, CollectingVisitor};

use std::any::Any;

use tracing::trace;

/// A node in the model object graph.
pub trait Visitable: 'static {
    /// The FHIR type name of this node, e.g. `"string"` or `"Coding"`.
    fn type_name(&self) -> &'static str;

    /// True iff any declared field of this node is non-default: a present
    /// scalar value or a non-empty list or choice slot. The node's own `id`
    /// does not count as a child.
    fn has_children(&self) -> bool;

    /// Run the four-phase protocol for this node under the given field name
    /// and list index (`None` for scalar fields).
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor);

    /// Downcasting hook for visitors that dispatch on concrete types.
    fn as_any(&self) -> &dyn Any;
}

/// Callback interface for the traversal. All methods default to
/// "descend everywhere, observe nothing", so implementations override only
/// the phases they care about.
pub trait Visitor {
    /// First gate: return `false` to skip this node and its whole subtree.
    fn pre_visit(&mut self, _node: &dyn Visitable) -> bool {
        true
    }

    /// Entry notification, delivered only when `pre_visit` allowed descent.
    fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {}

    /// Second gate: return `false` to skip this node's children while still
    /// receiving `visit_end` and `post_visit`.
    fn visit(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) -> bool {
        true
    }

    /// Exit notification, mirroring `visit_start`.
    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {}

    /// Final notification, mirroring `pre_visit`.
    fn post_visit(&mut self, _node: &dyn Visitable) {}
}

/// The shared four-phase skeleton. Concrete `accept` impls call this with a
/// closure that walks their declared fields in order.
pub(crate) fn visit_node<F>(
    node: &dyn Visitable,
    name: &str,
    index: Option<usize>,
    visitor: &mut dyn Visitor,
    children: F,
) where
    F: FnOnce(&mut dyn Visitor),
{
    if visitor.pre_visit(node) {
        visitor.visit_start(name, index, node);
        if visitor.visit(name, index, node) {
            children(visitor);
        }
        visitor.visit_end(name, index, node);
        visitor.post_visit(node);
    }
}

/// Visit an optional scalar child field.
pub fn accept_child<T: Visitable>(child: Option<&T>, name: &str, visitor: &mut dyn Visitor) {
    if let Some(child) = child {
        child.accept(name, None, visitor);
    }
}

/// Visit every element of a list field, in insertion order.
pub fn accept_list<T: Visitable>(children: &[T], name: &str, visitor: &mut dyn Visitor) {
    for (index, child) in children.iter().enumerate() {
        child.accept(name, Some(index), visitor);
    }
}

/// Start a traversal at a root node, deriving the element name from the
/// node's type name (`ActivityDefinition` -> `activityDefinition`).
pub fn accept_root(node: &dyn Visitable, visitor: &mut dyn Visitor) {
    let name = element_name(node.type_name());
    trace!(root = node.type_name(), "starting model traversal");
    node.accept(&name, None, visitor);
}

fn element_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_name_lowercases_first_char() {
        assert_eq!(element_name("ActivityDefinition"), "activityDefinition");
        assert_eq!(element_name("string"), "string");
    }
}
