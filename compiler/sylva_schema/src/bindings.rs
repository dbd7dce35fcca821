//! Binding-site queries for scope analysis.
//!
//! The scope binder itself lives elsewhere. What it needs from the schema
//! layer is: for a given node, which of its children declare names and of
//! what kind. That is answered here from the binding keys alone.

use crate::visitor::{walk_node, Visitor};
use crate::{BindingKind, Node, Registry, SchemaError};

/// A child node that introduces a binding.
#[derive(Copy, Clone, Debug)]
pub struct BindingSite<'ast> {
    /// The node whose binding key produced this site.
    pub owner: &'ast dyn Node,
    /// The binding-key field.
    pub field: &'static str,
    pub kind: BindingKind,
    /// The declared node, e.g. an identifier or a destructuring pattern.
    pub node: &'ast dyn Node,
}

/// Binding sites declared directly by `node`.
///
/// Absent optional fields and empty sequences declare nothing. Sites come
/// out in field declaration order, then sequence order.
pub fn collect_bindings<'ast>(
    node: &'ast dyn Node,
    registry: &Registry,
) -> Result<Vec<BindingSite<'ast>>, SchemaError> {
    let schema = registry.schema_for(node)?;
    let mut sites = Vec::new();
    for (field, kind) in schema.binding_keys() {
        let Some(value) = node.field(field) else {
            continue;
        };
        sites.extend(value.nodes().iter().map(|&child| BindingSite {
            owner: node,
            field,
            kind,
            node: child,
        }));
    }
    Ok(sites)
}

/// Collects binding sites from a whole subtree, in pre-order.
#[derive(Debug, Default)]
pub struct BindingCollector<'ast> {
    pub sites: Vec<BindingSite<'ast>>,
}

impl<'ast> BindingCollector<'ast> {
    pub fn new() -> Self {
        BindingCollector { sites: Vec::new() }
    }

    /// Walk `root` and return every binding site beneath it.
    pub fn collect(
        root: &'ast dyn Node,
        registry: &Registry,
    ) -> Result<Vec<BindingSite<'ast>>, SchemaError> {
        let mut collector = BindingCollector::new();
        collector.visit_node(root, registry)?;
        Ok(collector.sites)
    }
}

impl<'ast> Visitor<'ast> for BindingCollector<'ast> {
    fn visit_node(&mut self, node: &'ast dyn Node, registry: &Registry) -> Result<(), SchemaError> {
        self.sites.extend(collect_bindings(node, registry)?);
        walk_node(self, node, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeShape, RegistryBuilder};
    use pretty_assertions::assert_eq;

    declare_node_shape! {
        pub struct BindingIdentifier {
            name: scalar(String),
        }
    }

    declare_node_shape! {
        pub struct Param {
            @visit @bind(Parameter) id: child(BindingIdentifier),
        }
    }

    declare_node_shape! {
        pub struct FunctionDecl {
            @visit @bind(Function) id: optional(BindingIdentifier),
            @visit params: sequence(Param),
            @visit @bind(Var) hoisted: optional_sequence(BindingIdentifier),
        }
    }

    fn registry() -> Registry {
        let builder = RegistryBuilder::new();
        let results = [
            builder.register_shape::<BindingIdentifier>(),
            builder.register_shape::<Param>(),
            builder.register_shape::<FunctionDecl>(),
        ];
        assert!(results.iter().all(Result::is_ok));
        match builder.finish() {
            Ok(registry) => registry,
            Err(err) => panic!("registry should finish: {err}"),
        }
    }

    fn ident(name: &str) -> BindingIdentifier {
        BindingIdentifier {
            name: name.to_owned(),
        }
    }

    fn function() -> FunctionDecl {
        FunctionDecl {
            id: Some(Box::new(ident("add"))),
            params: vec![
                Param {
                    id: Box::new(ident("a")),
                },
                Param {
                    id: Box::new(ident("b")),
                },
            ],
            hoisted: None,
        }
    }

    fn summary(sites: &[BindingSite<'_>]) -> Vec<(&'static str, &'static str, BindingKind)> {
        sites
            .iter()
            .map(|site| (site.owner.tag(), site.field, site.kind))
            .collect()
    }

    #[test]
    fn test_direct_bindings_only() {
        let registry = registry();
        let node = function();

        let Ok(sites) = collect_bindings(&node, &registry) else {
            panic!("FunctionDecl is registered");
        };
        assert_eq!(
            summary(&sites),
            vec![("FunctionDecl", "id", BindingKind::Function)]
        );
        assert!(BindingIdentifier::cast(sites[0].node).is_some_and(|id| id.name == "add"));
    }

    #[test]
    fn test_absent_binding_field_declares_nothing() {
        let registry = registry();
        let mut node = function();
        node.id = None;

        assert!(collect_bindings(&node, &registry).is_ok_and(|sites| sites.is_empty()));
    }

    #[test]
    fn test_sequence_binding_declares_each_element() {
        let registry = registry();
        let mut node = function();
        node.hoisted = Some(vec![ident("tmp"), ident("i")]);

        let Ok(sites) = collect_bindings(&node, &registry) else {
            panic!("FunctionDecl is registered");
        };
        let names: Vec<_> = sites
            .iter()
            .filter_map(|site| BindingIdentifier::cast(site.node))
            .map(|id| id.name.as_str())
            .collect();
        assert_eq!(names, vec!["add", "tmp", "i"]);
    }

    #[test]
    fn test_collector_walks_subtree() {
        let registry = registry();
        let node = function();

        let Ok(sites) = BindingCollector::collect(&node, &registry) else {
            panic!("all shapes are registered");
        };
        assert_eq!(
            summary(&sites),
            vec![
                ("FunctionDecl", "id", BindingKind::Function),
                ("Param", "id", BindingKind::Parameter),
                ("Param", "id", BindingKind::Parameter),
            ]
        );
    }
}
