//! Traits that connect concrete node types to the schema layer.
//!
//! - [`Node`]: object-safe, tag plus generic field access. This is all a
//!   generic consumer ever sees of a node.
//! - [`SyntaxElement`]: anything that may sit in a child field, either a
//!   node shape or a variant group.
//! - [`NodeShape`]: a concrete shape with a static tag and declaration.
//! - [`VariantGroup`]: a closed union of shapes.
//!
//! All four are implemented by the declaration macros; hand-written impls
//! are possible but must keep `Node::field` in sync with the declaration.

use std::any::Any;
use std::fmt;

use crate::{ChildType, GroupDecl, SchemaError, ShapeDecl};

/// The contents of one field, as seen by a generic consumer.
#[derive(Clone, Debug)]
pub enum FieldValue<'a> {
    /// Opaque data.
    Scalar(&'a dyn fmt::Debug),
    /// An optional field that is not set.
    Absent,
    /// A single child node.
    Node(&'a dyn Node),
    /// A sequence of child nodes. May be empty; an unset optional sequence
    /// is [`FieldValue::Absent`] instead.
    Nodes(Vec<&'a dyn Node>),
}

impl<'a> FieldValue<'a> {
    /// Child nodes held by this value, in order.
    pub fn nodes(&self) -> &[&'a dyn Node] {
        match self {
            FieldValue::Node(node) => std::slice::from_ref(node),
            FieldValue::Nodes(nodes) => nodes,
            FieldValue::Scalar(_) | FieldValue::Absent => &[],
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// A syntax tree node of any shape.
pub trait Node: Any + fmt::Debug + Send + Sync {
    /// The discriminant tag of this node's shape.
    fn tag(&self) -> &'static str;

    /// Read a field by name, or `None` if the shape has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn as_any(&self) -> &dyn Any;
}

/// A type that may be stored in a child field.
pub trait SyntaxElement {
    /// How a field holding this type is described in a schema.
    const CHILD_TYPE: ChildType;

    /// The underlying node. For a group this is the active member.
    fn as_node(&self) -> &dyn Node;
}

/// A declared node shape.
pub trait NodeShape: Node + SyntaxElement + Sized {
    /// The discriminant tag, unique across the registry.
    const TAG: &'static str;

    /// The shape's field layout and key tables.
    fn decl() -> ShapeDecl;

    /// Whether `node` has this shape.
    fn is(node: &dyn Node) -> bool {
        node.tag() == Self::TAG
    }

    fn cast(node: &dyn Node) -> Option<&Self> {
        node.as_any().downcast_ref::<Self>()
    }

    /// Like [`cast`](NodeShape::cast), but reports the tag mismatch.
    fn try_cast(node: &dyn Node) -> Result<&Self, SchemaError> {
        Self::cast(node).ok_or(SchemaError::UnexpectedNodeTag {
            expected: Self::TAG,
            found: node.tag(),
        })
    }
}

/// A closed union of node shapes.
pub trait VariantGroup: SyntaxElement + Sized {
    const NAME: &'static str;

    /// Member tags, in declaration order.
    const MEMBERS: &'static [&'static str];

    fn decl() -> GroupDecl<'static> {
        GroupDecl {
            name: Self::NAME,
            members: Self::MEMBERS,
        }
    }

    /// Tag of the active member.
    fn tag(&self) -> &'static str {
        self.as_node().tag()
    }
}
