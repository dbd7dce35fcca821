//! Metadata-driven tree walking.
//!
//! The walker knows nothing about concrete shapes. For each node it looks
//! up the schema by tag and recurses into the visitor-key fields, in
//! declaration order. A shape with no visitor keys is a leaf.
//!
//! # Example
//!
//! ```text
//! struct CountNodes {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountNodes {
//!     fn visit_node(&mut self, node: &'ast dyn Node, registry: &Registry) -> Result<(), SchemaError> {
//!         self.count += 1;
//!         walk_node(self, node, registry)
//!     }
//! }
//! ```

use crate::{FieldValue, KeyTable, Node, Registry, SchemaError};

/// Minimum stack to keep available before recursing into a child.
const RED_ZONE: usize = 64 * 1024;

/// Stack to allocate when the red zone is reached.
const STACK_GROWTH: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Generic tree visitor.
///
/// Override `visit_*` to observe nodes or fields; call the matching
/// `walk_*` function to continue into children. The visitor may mutate its
/// own state; the tree is immutable.
pub trait Visitor<'ast> {
    /// Visit a node of any shape.
    fn visit_node(&mut self, node: &'ast dyn Node, registry: &Registry) -> Result<(), SchemaError> {
        walk_node(self, node, registry)
    }

    /// Visit one visitor-key field of `parent`.
    fn visit_field(
        &mut self,
        parent: &'ast dyn Node,
        field: &'static str,
        value: FieldValue<'ast>,
        registry: &Registry,
    ) -> Result<(), SchemaError> {
        let _ = (parent, field);
        walk_field(self, &value, registry)
    }
}

/// Walk a node's visitor-key fields.
///
/// Fails with [`SchemaError::UnknownNodeTag`] if the node's shape was never
/// registered.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    node: &'ast dyn Node,
    registry: &Registry,
) -> Result<(), SchemaError> {
    ensure_sufficient_stack(|| {
        let schema = registry.schema_for(node)?;
        tracing::trace!(tag = schema.tag(), "walk node");
        for field in schema.visitor_keys() {
            // A visitor key the node cannot produce means the node type and
            // its registered declaration disagree.
            let value = node.field(field).ok_or(SchemaError::UnknownFieldKey {
                tag: schema.tag(),
                field,
                table: KeyTable::Visitor,
            })?;
            visitor.visit_field(node, field, value, registry)?;
        }
        Ok(())
    })
}

/// Visit every node held by a field value, in order.
pub fn walk_field<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    value: &FieldValue<'ast>,
    registry: &Registry,
) -> Result<(), SchemaError> {
    for &child in value.nodes() {
        visitor.visit_node(child, registry)?;
    }
    Ok(())
}
