use super::*;
use crate::{ConstExportModuleKind, ConstImportModuleKind};
use pretty_assertions::assert_eq;
use sylva_schema::{
    walk_node, BindingCollector, BindingKind, Node, NodeShape, Registry, SchemaError, Visitor,
};

fn registry() -> Registry {
    match catalog() {
        Ok(registry) => registry,
        Err(err) => panic!("catalog should build: {err}"),
    }
}

/// Records tags in visit order.
#[derive(Default)]
struct TagRecorder {
    tags: Vec<&'static str>,
}

impl<'ast> Visitor<'ast> for TagRecorder {
    fn visit_node(&mut self, node: &'ast dyn Node, registry: &Registry) -> Result<(), SchemaError> {
        self.tags.push(node.tag());
        walk_node(self, node, registry)
    }
}

fn tags_of(node: &dyn Node, registry: &Registry) -> Vec<&'static str> {
    let mut recorder = TagRecorder::default();
    assert_eq!(recorder.visit_node(node, registry), Ok(()));
    recorder.tags
}

/// `export * as ns, {a as b} from "mod";`
fn export_from_mod() -> ExportExternalDeclaration {
    ExportExternalDeclaration {
        specifiers: Some(vec![
            ExportNamespaceSpecifier {
                exported: Box::new(Identifier::new("ns")),
            }
            .into(),
            ExportExternalSpecifier {
                local: Box::new(Identifier::new("a")),
                exported: Box::new(Identifier::new("b")),
                export_kind: None,
            }
            .into(),
        ]),
        source: Box::new(StringLiteral::new("mod")),
        export_kind: Some(ConstExportModuleKind::Value),
    }
}

/// `import def, * as all from "lib";`
fn import_from_lib() -> ImportDeclaration {
    ImportDeclaration {
        specifiers: Some(vec![
            ImportDefaultSpecifier {
                local: Box::new(BindingIdentifier::new("def")),
            }
            .into(),
            ImportNamespaceSpecifier {
                local: Box::new(BindingIdentifier::new("all")),
            }
            .into(),
        ]),
        source: Box::new(StringLiteral::new("lib")),
        import_kind: None,
    }
}

#[test]
fn test_catalog_is_complete_and_clean() {
    let registry = registry();

    assert_eq!(
        registry.tags(),
        vec![
            "BindingIdentifier",
            "ExportDefaultSpecifier",
            "ExportExternalDeclaration",
            "ExportExternalSpecifier",
            "ExportNamespaceSpecifier",
            "Identifier",
            "ImportDeclaration",
            "ImportDefaultSpecifier",
            "ImportNamespaceSpecifier",
            "ImportSpecifier",
            "Program",
            "StringLiteral",
        ]
    );
    assert_eq!(
        registry
            .groups()
            .iter()
            .map(|group| group.name())
            .collect::<Vec<_>>(),
        vec![
            "AnyExportExternalSpecifier",
            "AnyImportSpecifier",
            "AnyModuleStatement",
        ]
    );
    assert!(registry.warnings().is_empty());
}

#[test]
fn test_register_all_twice_is_a_duplicate() {
    let builder = Registry::builder();
    assert_eq!(register_all(&builder), Ok(()));
    assert_eq!(
        register_all(&builder),
        Err(SchemaError::DuplicateNodeTag { tag: "Identifier" })
    );
}

#[test]
fn test_export_external_declaration_tables() {
    let registry = registry();
    let Ok(schema) = registry.schema_of::<ExportExternalDeclaration>() else {
        panic!("ExportExternalDeclaration is registered");
    };

    assert_eq!(
        schema.visitor_keys().collect::<Vec<_>>(),
        vec!["specifiers", "source"]
    );
    assert!(!schema.is_traversable("export_kind"));
    assert!(!schema.introduces_bindings());

    let Ok(group) = registry.lookup_group("AnyExportExternalSpecifier") else {
        panic!("AnyExportExternalSpecifier is registered");
    };
    assert_eq!(
        group.members(),
        &[
            "ExportNamespaceSpecifier",
            "ExportDefaultSpecifier",
            "ExportExternalSpecifier",
        ]
    );
}

#[test]
fn test_walk_export_declaration() {
    let registry = registry();
    let decl = export_from_mod();

    assert_eq!(
        tags_of(&decl, &registry),
        vec![
            "ExportExternalDeclaration",
            "ExportNamespaceSpecifier",
            "Identifier",
            "ExportExternalSpecifier",
            "Identifier",
            "Identifier",
            "StringLiteral",
        ]
    );
    assert_eq!(decl.exported_names().collect::<Vec<_>>(), vec!["ns", "b"]);
    assert!(!decl.is_type_only());
}

#[test]
fn test_absent_specifiers_walks_source_only() {
    let registry = registry();
    let decl = ExportExternalDeclaration {
        specifiers: None,
        source: Box::new(StringLiteral::new("mod")),
        export_kind: Some(ConstExportModuleKind::Type),
    };

    assert_eq!(
        tags_of(&decl, &registry),
        vec!["ExportExternalDeclaration", "StringLiteral"]
    );
    assert!(decl.is_type_only());
    assert_eq!(decl.exported_names().count(), 0);
}

#[test]
fn test_program_bindings_come_from_imports_only() {
    let registry = registry();
    let program = Program {
        body: vec![
            import_from_lib().into(),
            ImportDeclaration {
                specifiers: Some(vec![ImportSpecifier {
                    imported: Box::new(Identifier::new("T")),
                    local: Box::new(BindingIdentifier::new("Local")),
                    import_kind: Some(ConstImportModuleKind::Type),
                }
                .into()]),
                source: Box::new(StringLiteral::new("types")),
                import_kind: None,
            }
            .into(),
            export_from_mod().into(),
        ],
        filename: "index.js".to_owned(),
    };

    let Ok(sites) = BindingCollector::collect(&program, &registry) else {
        panic!("every shape is registered");
    };
    let declared: Vec<_> = sites
        .iter()
        .map(|site| {
            let name = BindingIdentifier::cast(site.node).map(|id| id.name.as_str());
            (site.owner.tag(), name, site.kind)
        })
        .collect();
    assert_eq!(
        declared,
        vec![
            ("ImportDefaultSpecifier", Some("def"), BindingKind::Import),
            ("ImportNamespaceSpecifier", Some("all"), BindingKind::Import),
            ("ImportSpecifier", Some("Local"), BindingKind::Import),
        ]
    );
}

#[test]
fn test_group_accessors() {
    let import = import_from_lib();
    let locals: Vec<_> = import
        .specifiers
        .iter()
        .flatten()
        .map(|spec| spec.local().name.as_str())
        .collect();
    assert_eq!(locals, vec!["def", "all"]);

    let statement = AnyModuleStatement::from(import);
    assert!(ImportDeclaration::is(sylva_schema::SyntaxElement::as_node(
        &statement
    )));
    assert_eq!(ConstImportModuleKind::TypeOf.to_string(), "typeof");
}
