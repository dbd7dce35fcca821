//! Names and string literals.

use sylva_schema::declare_node_shape;

declare_node_shape! {
    /// A name in reference or property position.
    pub struct Identifier {
        name: scalar(String),
    }
}

declare_node_shape! {
    /// A name in declaring position. Shapes that declare names point a
    /// binding key at a field of this type.
    pub struct BindingIdentifier {
        name: scalar(String),
    }
}

declare_node_shape! {
    pub struct StringLiteral {
        value: scalar(String),
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl BindingIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        BindingIdentifier { name: name.into() }
    }
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
        }
    }
}
