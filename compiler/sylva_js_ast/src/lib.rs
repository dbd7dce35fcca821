//! JavaScript module syntax for the Sylva tree.
//!
//! The import/export shapes of an ES module, declared through
//! `sylva_schema` and collected into one registry by [`catalog`]. Generic
//! consumers see them only through the registry; code that knows the
//! grammar matches on the concrete types and groups.

mod catalog;
mod literals;
mod modules;

pub use catalog::{catalog, register_all};
pub use literals::{BindingIdentifier, Identifier, StringLiteral};
pub use modules::{
    AnyExportExternalSpecifier, AnyImportSpecifier, AnyModuleStatement, ConstExportModuleKind,
    ConstImportModuleKind, ExportDefaultSpecifier, ExportExternalDeclaration,
    ExportExternalSpecifier, ExportNamespaceSpecifier, ImportDeclaration, ImportDefaultSpecifier,
    ImportNamespaceSpecifier, ImportSpecifier, Program,
};
