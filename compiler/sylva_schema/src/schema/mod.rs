//! Node shape declarations and their validated metadata tables.
//!
//! A [`ShapeDecl`] is what an author writes: a tag, a field layout, and two
//! key tables. Validation turns it into a [`NodeSchema`], a fixed-shape
//! record where every key is attached to the field it names. Keys that do
//! not name a field cannot be represented past this point.

use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{
    BindingKind, ChildType, FieldDecl, FieldKind, KeyTable, LintLevel, SchemaError,
    ValidationOptions,
};

/// An unvalidated node shape declaration.
///
/// Built with the chained methods below, mirroring how a shape is written
/// down: tag first, then fields, then the keys.
///
/// ```
/// use sylva_schema::{BindingKind, ChildType, FieldKind, ShapeDecl};
///
/// let decl = ShapeDecl::new("ImportSpecifier")
///     .field("imported", FieldKind::Child(ChildType::Shape("Identifier")))
///     .field("local", FieldKind::Child(ChildType::Shape("BindingIdentifier")))
///     .visit("imported")
///     .visit("local")
///     .bind("local", BindingKind::Import);
/// assert_eq!(decl.fields.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeDecl {
    /// The discriminant tag.
    pub tag: &'static str,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Fields whose contents generic traversal recurses into.
    pub visitor_keys: Vec<&'static str>,
    /// Fields that introduce a binding, with the binding's kind.
    pub binding_keys: Vec<(&'static str, BindingKind)>,
}

impl ShapeDecl {
    pub fn new(tag: &'static str) -> Self {
        ShapeDecl {
            tag,
            fields: Vec::new(),
            visitor_keys: Vec::new(),
            binding_keys: Vec::new(),
        }
    }

    /// Append a field to the layout.
    #[must_use]
    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldDecl::new(name, kind));
        self
    }

    /// Mark a field as a visitor key.
    #[must_use]
    pub fn visit(mut self, name: &'static str) -> Self {
        self.visitor_keys.push(name);
        self
    }

    /// Mark a field as a binding key.
    #[must_use]
    pub fn bind(mut self, name: &'static str, kind: BindingKind) -> Self {
        self.binding_keys.push((name, kind));
        self
    }
}

/// Validated metadata for one field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Listed in the visitor keys. Visiting is unconditional: every node
    /// held by a visited field is walked.
    pub visit: bool,
    /// Listed in the binding keys.
    pub binding: Option<BindingKind>,
}

/// The field metadata table for one node shape.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeSchema {
    tag: &'static str,
    fields: Box<[FieldSchema]>,
    /// Indices of visited fields, in declaration order.
    #[cfg_attr(feature = "serde", serde(skip))]
    traversable: SmallVec<[usize; 4]>,
}

/// A non-fatal authoring lint found while validating a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SchemaWarning {
    /// A child-typed field is not a visitor key, so generic traversal will
    /// never reach its contents.
    UntraversedChild {
        tag: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::UntraversedChild { tag, field } => write!(
                f,
                "`{tag}` field `{field}` holds child nodes but is not a visitor key"
            ),
        }
    }
}

impl NodeSchema {
    /// Validate a declaration.
    ///
    /// Checks, in order: duplicate fields, visitor keys, binding keys, then
    /// the untraversed-child lint. Each key must name a child field and
    /// appear at most once in its table. Warnings are returned, not logged; the
    /// registry logs them once the declaration is actually accepted.
    pub fn from_decl(
        decl: &ShapeDecl,
        options: ValidationOptions,
    ) -> Result<(NodeSchema, Vec<SchemaWarning>), SchemaError> {
        let tag = decl.tag;

        let mut seen = FxHashSet::default();
        let mut fields = Vec::with_capacity(decl.fields.len());
        for field in &decl.fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField {
                    tag,
                    field: field.name,
                });
            }
            fields.push(FieldSchema {
                name: field.name,
                kind: field.kind,
                visit: false,
                binding: None,
            });
        }

        for &key in &decl.visitor_keys {
            let field = find_field(&mut fields, key).ok_or(SchemaError::UnknownFieldKey {
                tag,
                field: key,
                table: KeyTable::Visitor,
            })?;
            if !field.kind.is_child() {
                return Err(SchemaError::NonNodeVisit { tag, field: key });
            }
            if field.visit {
                return Err(SchemaError::DuplicateKey {
                    tag,
                    field: key,
                    table: KeyTable::Visitor,
                });
            }
            field.visit = true;
        }

        for &(key, kind) in &decl.binding_keys {
            let field = find_field(&mut fields, key).ok_or(SchemaError::UnknownFieldKey {
                tag,
                field: key,
                table: KeyTable::Binding,
            })?;
            if !field.kind.is_child() {
                return Err(SchemaError::NonNodeBinding { tag, field: key });
            }
            if field.binding.is_some() {
                return Err(SchemaError::DuplicateKey {
                    tag,
                    field: key,
                    table: KeyTable::Binding,
                });
            }
            field.binding = Some(kind);
        }

        let mut warnings = Vec::new();
        for field in fields.iter().filter(|f| f.kind.is_child() && !f.visit) {
            match options.untraversed_child {
                LintLevel::Allow => {}
                LintLevel::Warn => warnings.push(SchemaWarning::UntraversedChild {
                    tag,
                    field: field.name,
                }),
                LintLevel::Deny => {
                    return Err(SchemaError::UntraversedChild {
                        tag,
                        field: field.name,
                    })
                }
            }
        }

        let traversable = fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.visit)
            .map(|(idx, _)| idx)
            .collect();

        let schema = NodeSchema {
            tag,
            fields: fields.into_boxed_slice(),
            traversable,
        };
        Ok((schema, warnings))
    }

    /// The discriminant tag.
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// All fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the visitor keys, in declaration order.
    pub fn visitor_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.traversable.iter().map(|&idx| self.fields[idx].name)
    }

    /// Binding keys with their kinds, in declaration order.
    pub fn binding_keys(&self) -> impl Iterator<Item = (&'static str, BindingKind)> + '_ {
        self.fields
            .iter()
            .filter_map(|f| f.binding.map(|kind| (f.name, kind)))
    }

    /// Whether generic traversal recurses into `name`.
    ///
    /// Unknown names are opaque, like any unlisted field.
    pub fn is_traversable(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.visit)
    }

    pub fn binding_kind(&self, name: &str) -> Option<BindingKind> {
        self.field(name).and_then(|f| f.binding)
    }

    /// Whether the shape has no visitor keys at all.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.traversable.is_empty()
    }

    pub fn introduces_bindings(&self) -> bool {
        self.fields.iter().any(|f| f.binding.is_some())
    }

    /// Child types referenced by the layout, with the field naming each.
    pub fn child_types(&self) -> impl Iterator<Item = (&'static str, ChildType)> + '_ {
        self.fields
            .iter()
            .filter_map(|f| f.kind.child_type().map(|ty| (f.name, ty)))
    }
}

fn find_field<'a>(fields: &'a mut [FieldSchema], name: &str) -> Option<&'a mut FieldSchema> {
    fields.iter_mut().find(|f| f.name == name)
}
