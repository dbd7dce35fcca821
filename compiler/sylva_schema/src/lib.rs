//! Sylva schema - node shapes, variant groups, and the builder registry.
//!
//! Every syntax tree node type plugs into this crate so that traversal,
//! transformation, scope binding and printing can work over any shape
//! without shape-specific code:
//! - Node shapes: a tagged struct plus a metadata table saying which fields
//!   are children to walk (visitor keys) and which declare names (binding
//!   keys)
//! - Variant groups: closed unions of shapes, as Rust enums
//! - The registry: tag -> metadata table, built once, read-only afterwards
//!
//! # Declaring shapes
//!
//! ```
//! use sylva_schema::{declare_node_shape, declare_variant_group, Registry};
//!
//! declare_node_shape! {
//!     pub struct StringLiteral {
//!         value: scalar(String),
//!     }
//! }
//!
//! declare_node_shape! {
//!     pub struct TemplateLiteral {
//!         @visit quasis: sequence(StringLiteral),
//!     }
//! }
//!
//! declare_variant_group! {
//!     pub enum AnyLiteral {
//!         StringLiteral,
//!         TemplateLiteral,
//!     }
//! }
//!
//! let builder = Registry::builder();
//! builder.register_shape::<StringLiteral>()?;
//! builder.register_shape::<TemplateLiteral>()?;
//! builder.register_variant_group::<AnyLiteral>()?;
//! let registry = builder.finish()?;
//!
//! let schema = registry.lookup("TemplateLiteral")?;
//! assert!(schema.is_traversable("quasis"));
//! # Ok::<(), sylva_schema::SchemaError>(())
//! ```
//!
//! # Design
//!
//! - **Closed unions**: groups are enums, so matches over them are checked
//!   for exhaustiveness at build time
//! - **Fixed-shape metadata**: keys are attached to the fields they name;
//!   an unknown key is rejected at declaration
//! - **One construction step**: `RegistryBuilder` -> `Registry`, no
//!   registration side effects at load time

#[macro_use]
mod macros;

mod bindings;
mod error;
mod field;
pub mod global;
mod group;
mod node;
mod options;
mod registry;
mod schema;
pub mod visitor;

pub use bindings::{collect_bindings, BindingCollector, BindingSite};
pub use error::{ErrorCode, KeyTable, SchemaError};
pub use field::{BindingKind, ChildType, FieldDecl, FieldKind};
pub use group::{GroupDecl, GroupSchema};
pub use node::{FieldValue, Node, NodeShape, SyntaxElement, VariantGroup};
pub use options::{LintLevel, ValidationOptions};
pub use registry::{Registry, RegistryBuilder, SharedRegistry};
pub use schema::{FieldSchema, NodeSchema, SchemaWarning, ShapeDecl};
pub use visitor::{walk_field, walk_node, Visitor};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=sylva_schema=debug` to see every registration.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
