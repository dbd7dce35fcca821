//! The builder registry.
//!
//! Lifecycle: `Empty -> Populating -> Stable`, encoded in two types.
//!
//! ```text
//! RegistryBuilder (Populating, &self registration behind a mutex)
//!     └── finish() ──> Registry (Stable, immutable, lock-free lookups)
//!                          └── into_shared() ──> SharedRegistry (Arc)
//! ```
//!
//! Registration is eager: every shape and group is registered before any
//! consumer runs, and `finish` checks cross-references once everything is
//! in. There is no way back from `Registry` to a builder.

use std::collections::hash_map::Entry;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::{
    ChildType, GroupDecl, GroupSchema, Node, NodeSchema, NodeShape, SchemaError, SchemaWarning,
    ShapeDecl, ValidationOptions, VariantGroup,
};

/// Registered tables. Shared by the builder (behind a lock) and the
/// finished registry.
#[derive(Debug, Default)]
struct Tables {
    shapes: FxHashMap<&'static str, NodeSchema>,
    groups: FxHashMap<&'static str, GroupSchema>,
    warnings: Vec<SchemaWarning>,
}

/// Collects node shape and variant group declarations.
///
/// Registration takes `&self`: the check for an existing tag and the insert
/// happen under one lock, so shape modules may register from parallel
/// initialisation and duplicates are still caught. A rejected declaration
/// leaves the builder exactly as it was.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    options: ValidationOptions,
    tables: Mutex<Tables>,
}

impl RegistryBuilder {
    /// Create an empty builder with default validation options.
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        RegistryBuilder {
            options,
            tables: Mutex::default(),
        }
    }

    #[inline]
    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Register a node shape declaration.
    ///
    /// Validation runs before the lock is taken; only the duplicate check
    /// and the insert are serialized.
    #[tracing::instrument(level = "debug", skip_all, fields(tag = decl.tag))]
    pub fn register(&self, decl: &ShapeDecl) -> Result<(), SchemaError> {
        let (schema, warnings) = NodeSchema::from_decl(decl, self.options)?;

        let mut tables = self.tables.lock();
        match tables.shapes.entry(decl.tag) {
            Entry::Occupied(_) => {
                return Err(SchemaError::DuplicateNodeTag { tag: decl.tag });
            }
            Entry::Vacant(slot) => {
                slot.insert(schema);
            }
        }

        for warning in &warnings {
            tracing::warn!(%warning, "node shape lint");
        }
        tables.warnings.extend(warnings);
        tracing::debug!("registered node shape");
        Ok(())
    }

    /// Register a shape declared with
    /// [`declare_node_shape!`](crate::declare_node_shape).
    pub fn register_shape<T: NodeShape>(&self) -> Result<(), SchemaError> {
        self.register(&T::decl())
    }

    /// Register a variant group declaration.
    ///
    /// Members need not be registered yet; they are checked by
    /// [`finish`](RegistryBuilder::finish).
    #[tracing::instrument(level = "debug", skip_all, fields(group = decl.name))]
    pub fn register_group(&self, decl: &GroupDecl<'_>) -> Result<(), SchemaError> {
        let group = GroupSchema::from_decl(decl)?;

        let mut tables = self.tables.lock();
        match tables.groups.entry(decl.name) {
            Entry::Occupied(_) => Err(SchemaError::DuplicateGroupName { name: decl.name }),
            Entry::Vacant(slot) => {
                slot.insert(group);
                tracing::debug!(members = decl.members.len(), "registered variant group");
                Ok(())
            }
        }
    }

    /// Register a group declared with
    /// [`declare_variant_group!`](crate::declare_variant_group).
    pub fn register_variant_group<G: VariantGroup>(&self) -> Result<(), SchemaError> {
        self.register_group(&G::decl())
    }

    /// Look up a shape registered so far.
    ///
    /// Legal during population, but a miss here may just mean "not yet".
    /// Returns a copy since the tables are still behind the lock.
    pub fn lookup(&self, tag: &str) -> Result<NodeSchema, SchemaError> {
        self.tables
            .lock()
            .shapes
            .get(tag)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownNodeTag {
                tag: tag.to_owned(),
            })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tables.lock().shapes.contains_key(tag)
    }

    /// Number of shapes registered so far.
    pub fn len(&self) -> usize {
        self.tables.lock().shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lints collected from accepted declarations.
    pub fn warnings(&self) -> Vec<SchemaWarning> {
        self.tables.lock().warnings.clone()
    }

    /// Close registration and check cross-references.
    ///
    /// Every group member must be a registered shape, and every child field
    /// must name a registered shape or group. Checks run in tag order so
    /// the reported error does not depend on hashing.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn finish(self) -> Result<Registry, SchemaError> {
        let tables = self.tables.into_inner();

        let mut groups: Vec<_> = tables.groups.values().collect();
        groups.sort_unstable_by_key(|group| group.name());
        for group in groups {
            if let Some(&member) = group
                .members()
                .iter()
                .find(|member| !tables.shapes.contains_key(*member))
            {
                return Err(SchemaError::UnknownGroupMember {
                    group: group.name(),
                    member,
                });
            }
        }

        let mut shapes: Vec<_> = tables.shapes.values().collect();
        shapes.sort_unstable_by_key(|schema| schema.tag());
        for schema in shapes {
            for (field, target) in schema.child_types() {
                let resolved = match target {
                    ChildType::Shape(tag) => tables.shapes.contains_key(tag),
                    ChildType::Group(name) => tables.groups.contains_key(name),
                };
                if !resolved {
                    return Err(SchemaError::UnresolvedChildType {
                        tag: schema.tag(),
                        field,
                        target,
                    });
                }
            }
        }

        tracing::debug!(
            shapes = tables.shapes.len(),
            groups = tables.groups.len(),
            warnings = tables.warnings.len(),
            "node registry finished"
        );
        Ok(Registry { tables })
    }
}

/// The finished, immutable registry.
///
/// Lookups take `&self` and no locks; share it across traversal workers by
/// reference or through [`SharedRegistry`].
#[derive(Debug)]
pub struct Registry {
    tables: Tables,
}

impl Registry {
    /// Start a new registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up the metadata table for a tag.
    ///
    /// This is the one query generic consumers need.
    #[inline]
    pub fn lookup(&self, tag: &str) -> Result<&NodeSchema, SchemaError> {
        self.tables
            .shapes
            .get(tag)
            .ok_or_else(|| SchemaError::UnknownNodeTag {
                tag: tag.to_owned(),
            })
    }

    /// Metadata table for a node instance.
    #[inline]
    pub fn schema_for(&self, node: &dyn Node) -> Result<&NodeSchema, SchemaError> {
        self.lookup(node.tag())
    }

    pub fn schema_of<T: NodeShape>(&self) -> Result<&NodeSchema, SchemaError> {
        self.lookup(T::TAG)
    }

    pub fn lookup_group(&self, name: &str) -> Result<&GroupSchema, SchemaError> {
        self.tables
            .groups
            .get(name)
            .ok_or_else(|| SchemaError::UnknownVariantGroup {
                name: name.to_owned(),
            })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tables.shapes.contains_key(tag)
    }

    /// All registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.tables.shapes.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// All registered groups, sorted by name.
    pub fn groups(&self) -> Vec<&GroupSchema> {
        let mut groups: Vec<_> = self.tables.groups.values().collect();
        groups.sort_unstable_by_key(|group| group.name());
        groups
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.tables.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.shapes.is_empty()
    }

    /// Lints collected while the registry was populated.
    pub fn warnings(&self) -> &[SchemaWarning] {
        &self.tables.warnings
    }

    pub fn into_shared(self) -> SharedRegistry {
        SharedRegistry(Arc::new(self))
    }
}

/// Shared handle to a finished registry.
///
/// Cheap to clone; hand one to each worker that walks or binds trees.
#[derive(Clone, Debug)]
pub struct SharedRegistry(Arc<Registry>);

impl Deref for SharedRegistry {
    type Target = Registry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
