//! Field layout types.
//!
//! A node shape is an ordered list of [`FieldDecl`]s. The schema layer only
//! distinguishes scalar data (opaque) from child nodes; what a scalar holds
//! is the shape's business.

use std::fmt;

/// What a child-typed field may contain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChildType {
    /// Exactly one node shape, named by its tag.
    Shape(&'static str),
    /// Any member of a variant group, named by the group.
    Group(&'static str),
}

impl ChildType {
    /// The tag or group name this child type refers to.
    pub fn name(self) -> &'static str {
        match self {
            ChildType::Shape(name) | ChildType::Group(name) => name,
        }
    }
}

impl fmt::Display for ChildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildType::Shape(tag) => write!(f, "node shape `{tag}`"),
            ChildType::Group(name) => write!(f, "variant group `{name}`"),
        }
    }
}

/// The kind of a declared field.
///
/// Optional kinds are explicit so that generic consumers can tell "field
/// absent" apart from "field present but empty".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    /// Opaque data (literal values, flags, names stored as text).
    Scalar,
    /// Exactly one child node.
    Child(ChildType),
    /// Zero or one child node.
    OptionalChild(ChildType),
    /// A sequence of child nodes, always present.
    Sequence(ChildType),
    /// A sequence of child nodes that may be absent altogether.
    OptionalSequence(ChildType),
}

impl FieldKind {
    /// The child type, or `None` for scalars.
    pub fn child_type(self) -> Option<ChildType> {
        match self {
            FieldKind::Scalar => None,
            FieldKind::Child(ty)
            | FieldKind::OptionalChild(ty)
            | FieldKind::Sequence(ty)
            | FieldKind::OptionalSequence(ty) => Some(ty),
        }
    }

    /// Whether the field holds child node(s).
    #[inline]
    pub fn is_child(self) -> bool {
        !matches!(self, FieldKind::Scalar)
    }

    #[inline]
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            FieldKind::OptionalChild(_) | FieldKind::OptionalSequence(_)
        )
    }

    #[inline]
    pub fn is_sequence(self) -> bool {
        matches!(self, FieldKind::Sequence(_) | FieldKind::OptionalSequence(_))
    }
}

/// One field of a node shape's layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDecl {
    #[inline]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldDecl { name, kind }
    }
}

/// The kind of declaration a binding key introduces.
///
/// Consumed by the scope binder to decide which scope a name lands in and
/// how it may be redeclared.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BindingKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Parameter,
    Import,
    TypeAlias,
    CatchClause,
}

impl BindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BindingKind::Var => "var",
            BindingKind::Let => "let",
            BindingKind::Const => "const",
            BindingKind::Function => "function",
            BindingKind::Class => "class",
            BindingKind::Parameter => "parameter",
            BindingKind::Import => "import",
            BindingKind::TypeAlias => "type",
            BindingKind::CatchClause => "catch",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
