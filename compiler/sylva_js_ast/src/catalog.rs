//! The registry for every shape in this crate.

use sylva_schema::{Registry, RegistryBuilder, SchemaError};

use crate::{
    AnyExportExternalSpecifier, AnyImportSpecifier, AnyModuleStatement, BindingIdentifier,
    ExportDefaultSpecifier, ExportExternalDeclaration, ExportExternalSpecifier,
    ExportNamespaceSpecifier, Identifier, ImportDeclaration, ImportDefaultSpecifier,
    ImportNamespaceSpecifier, ImportSpecifier, Program, StringLiteral,
};

/// Register every shape and group of this crate into `builder`.
///
/// For hosts that combine several catalogs into one registry.
pub fn register_all(builder: &RegistryBuilder) -> Result<(), SchemaError> {
    builder.register_shape::<Identifier>()?;
    builder.register_shape::<BindingIdentifier>()?;
    builder.register_shape::<StringLiteral>()?;

    builder.register_shape::<ExportExternalSpecifier>()?;
    builder.register_shape::<ExportNamespaceSpecifier>()?;
    builder.register_shape::<ExportDefaultSpecifier>()?;
    builder.register_variant_group::<AnyExportExternalSpecifier>()?;
    builder.register_shape::<ExportExternalDeclaration>()?;

    builder.register_shape::<ImportSpecifier>()?;
    builder.register_shape::<ImportDefaultSpecifier>()?;
    builder.register_shape::<ImportNamespaceSpecifier>()?;
    builder.register_variant_group::<AnyImportSpecifier>()?;
    builder.register_shape::<ImportDeclaration>()?;

    builder.register_variant_group::<AnyModuleStatement>()?;
    builder.register_shape::<Program>()?;
    Ok(())
}

/// Build a finished registry holding only this crate's shapes.
#[tracing::instrument(level = "debug")]
pub fn catalog() -> Result<Registry, SchemaError> {
    let builder = Registry::builder();
    register_all(&builder)?;
    builder.finish()
}

#[cfg(test)]
mod tests;
