//! Variant group metadata.
//!
//! The Rust type of a variant group is a closed `enum` generated by
//! [`declare_variant_group!`](crate::declare_variant_group), which gives
//! build-time exhaustiveness. The registry only needs the group's name and
//! member tags, so it can check that every member is a registered shape.

use rustc_hash::FxHashSet;

use crate::SchemaError;

/// An unvalidated variant group declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDecl<'a> {
    pub name: &'static str,
    /// Member tags. Order only matters for tooling output.
    pub members: &'a [&'static str],
}

/// A validated variant group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupSchema {
    name: &'static str,
    members: Box<[&'static str]>,
}

impl GroupSchema {
    /// Validate a group declaration on its own.
    ///
    /// Membership in the registry is checked later, when the registry is
    /// finished, since members may be registered after the group.
    pub fn from_decl(decl: &GroupDecl<'_>) -> Result<GroupSchema, SchemaError> {
        if decl.members.is_empty() {
            return Err(SchemaError::EmptyVariantGroup { name: decl.name });
        }

        let mut seen = FxHashSet::default();
        for &member in decl.members {
            if !seen.insert(member) {
                return Err(SchemaError::DuplicateGroupMember {
                    group: decl.name,
                    member,
                });
            }
        }

        Ok(GroupSchema {
            name: decl.name,
            members: decl.members.into(),
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn members(&self) -> &[&'static str] {
        &self.members
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.members.iter().any(|&member| member == tag)
    }
}
