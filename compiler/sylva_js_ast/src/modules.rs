//! Import and export declarations.
//!
//! ```text
//! import def, {a as b} from "mod";      ImportDeclaration
//! export * as ns, {c as d} from "mod";  ExportExternalDeclaration
//! export type {T} from "mod";           ExportExternalDeclaration (Type)
//! ```

use std::fmt;

use sylva_schema::{declare_node_shape, declare_variant_group};

use crate::{BindingIdentifier, Identifier, StringLiteral};

/// Whether an export moves values or only types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstExportModuleKind {
    Value,
    Type,
}

impl ConstExportModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstExportModuleKind::Value => "value",
            ConstExportModuleKind::Type => "type",
        }
    }
}

impl fmt::Display for ConstExportModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an import brings in values, only types, or a `typeof` view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstImportModuleKind {
    Value,
    Type,
    TypeOf,
}

impl ConstImportModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstImportModuleKind::Value => "value",
            ConstImportModuleKind::Type => "type",
            ConstImportModuleKind::TypeOf => "typeof",
        }
    }
}

impl fmt::Display for ConstImportModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Export specifiers name things in another module, so none of them
// declares a local binding.

declare_node_shape! {
    /// `{local as exported}`
    pub struct ExportExternalSpecifier {
        @visit local: child(Identifier),
        @visit exported: child(Identifier),
        export_kind: scalar(Option<ConstExportModuleKind>),
    }
}

declare_node_shape! {
    /// `* as exported`
    pub struct ExportNamespaceSpecifier {
        @visit exported: child(Identifier),
    }
}

declare_node_shape! {
    /// `exported` in `export exported from "mod"`.
    pub struct ExportDefaultSpecifier {
        @visit exported: child(Identifier),
    }
}

declare_variant_group! {
    pub enum AnyExportExternalSpecifier {
        ExportNamespaceSpecifier,
        ExportDefaultSpecifier,
        ExportExternalSpecifier,
    }
}

impl AnyExportExternalSpecifier {
    /// The name this module exports.
    pub fn exported(&self) -> &Identifier {
        match self {
            AnyExportExternalSpecifier::ExportNamespaceSpecifier(spec) => &spec.exported,
            AnyExportExternalSpecifier::ExportDefaultSpecifier(spec) => &spec.exported,
            AnyExportExternalSpecifier::ExportExternalSpecifier(spec) => &spec.exported,
        }
    }
}

declare_node_shape! {
    /// Re-export from another module.
    ///
    /// An absent `specifiers` means no clause was recorded, which is
    /// distinct from the empty list of `export {} from "mod"`.
    pub struct ExportExternalDeclaration {
        @visit specifiers: optional_sequence(AnyExportExternalSpecifier),
        @visit source: child(StringLiteral),
        export_kind: scalar(Option<ConstExportModuleKind>),
    }
}

impl ExportExternalDeclaration {
    pub fn is_type_only(&self) -> bool {
        self.export_kind == Some(ConstExportModuleKind::Type)
    }

    /// Names exported by this declaration, in source order.
    pub fn exported_names(&self) -> impl Iterator<Item = &str> {
        self.specifiers
            .iter()
            .flatten()
            .map(|spec| spec.exported().name.as_str())
    }
}

declare_node_shape! {
    /// `{imported as local}`
    pub struct ImportSpecifier {
        @visit imported: child(Identifier),
        @visit @bind(Import) local: child(BindingIdentifier),
        import_kind: scalar(Option<ConstImportModuleKind>),
    }
}

declare_node_shape! {
    /// `local` in `import local from "mod"`.
    pub struct ImportDefaultSpecifier {
        @visit @bind(Import) local: child(BindingIdentifier),
    }
}

declare_node_shape! {
    /// `* as local`
    pub struct ImportNamespaceSpecifier {
        @visit @bind(Import) local: child(BindingIdentifier),
    }
}

declare_variant_group! {
    pub enum AnyImportSpecifier {
        ImportDefaultSpecifier,
        ImportNamespaceSpecifier,
        ImportSpecifier,
    }
}

impl AnyImportSpecifier {
    /// The local name this specifier declares.
    pub fn local(&self) -> &BindingIdentifier {
        match self {
            AnyImportSpecifier::ImportDefaultSpecifier(spec) => &spec.local,
            AnyImportSpecifier::ImportNamespaceSpecifier(spec) => &spec.local,
            AnyImportSpecifier::ImportSpecifier(spec) => &spec.local,
        }
    }
}

declare_node_shape! {
    pub struct ImportDeclaration {
        @visit specifiers: optional_sequence(AnyImportSpecifier),
        @visit source: child(StringLiteral),
        import_kind: scalar(Option<ConstImportModuleKind>),
    }
}

declare_variant_group! {
    pub enum AnyModuleStatement {
        ImportDeclaration,
        ExportExternalDeclaration,
    }
}

declare_node_shape! {
    /// A parsed module.
    pub struct Program {
        @visit body: sequence(AnyModuleStatement),
        filename: scalar(String),
    }
}
