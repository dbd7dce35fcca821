//! Every field kind and marker, with doc comments on fields.

use sylva_schema::{declare_node_shape, BindingKind, FieldKind, FieldValue, Node, NodeShape};

declare_node_shape! {
    pub struct Pattern {
        name: scalar(String),
    }
}

declare_node_shape! {
    pub(crate) struct Declaration {
        /// Declared names.
        @visit @bind(Let) targets: sequence(Pattern),
        @visit init: optional(Pattern),
        @visit @bind(Var) hoisted: optional_sequence(Pattern),
        @bind(Const) alias: child(Pattern),
        mutable: scalar(bool),
    }
}

fn main() {
    let decl = Declaration::decl();
    assert_eq!(decl.visitor_keys, vec!["targets", "init", "hoisted"]);
    assert_eq!(decl.binding_keys[0], ("targets", BindingKind::Let));
    assert!(matches!(decl.fields[4].kind, FieldKind::Scalar));

    let pattern = |name: &str| Pattern {
        name: name.to_owned(),
    };
    let node = Declaration {
        targets: vec![pattern("a"), pattern("b")],
        init: None,
        hoisted: Some(Vec::new()),
        alias: Box::new(pattern("c")),
        mutable: false,
    };
    assert_eq!(node.field("targets").map(|value| value.nodes().len()), Some(2));
    assert!(node.field("init").is_some_and(|value| value.is_absent()));
    assert!(matches!(node.field("hoisted"), Some(FieldValue::Nodes(nodes)) if nodes.is_empty()));
    assert!(node.field("missing").is_none());
}
