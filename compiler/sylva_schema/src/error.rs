//! Schema errors.
//!
//! Every error here is a structural authoring defect in the node catalog
//! (or a foreign tag reaching the registry). None of them are transient,
//! so there is no retry story: callers surface them and stop.

use std::fmt;

use crate::ChildType;

/// Stable codes for schema errors.
///
/// Format: S#### where the first digit indicates the phase:
/// - S0xxx: declaration errors (a single shape or group is malformed)
/// - S1xxx: registry build errors (cross-references between declarations)
/// - S2xxx: lookup and cast errors (consumers querying the registry)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declaration (S0xxx)
    /// Two shapes declared with the same tag
    S0001,
    /// Visitor or binding key names an undeclared field
    S0002,
    /// Field declared twice on one shape
    S0003,
    /// Binding key on a scalar field
    S0004,
    /// Child-typed field missing from the visitor keys (denied lint)
    S0005,
    /// Two groups declared with the same name
    S0006,
    /// Group declared without members
    S0007,
    /// Member listed twice in one group
    S0008,
    /// Visitor key on a scalar field
    S0009,
    /// Field listed twice in one key table
    S0010,

    // Registry build (S1xxx)
    /// Group member is not a registered shape
    S1001,
    /// Child field refers to an unregistered shape or group
    S1002,
    /// Process-wide registry installed twice
    S1003,

    // Lookup (S2xxx)
    /// No shape registered under the tag
    S2001,
    /// No group registered under the name
    S2002,
    /// Node does not have the expected shape
    S2003,
}

impl ErrorCode {
    /// Get the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::S0001 => "S0001",
            ErrorCode::S0002 => "S0002",
            ErrorCode::S0003 => "S0003",
            ErrorCode::S0004 => "S0004",
            ErrorCode::S0005 => "S0005",
            ErrorCode::S0006 => "S0006",
            ErrorCode::S0007 => "S0007",
            ErrorCode::S0008 => "S0008",
            ErrorCode::S0009 => "S0009",
            ErrorCode::S0010 => "S0010",
            ErrorCode::S1001 => "S1001",
            ErrorCode::S1002 => "S1002",
            ErrorCode::S1003 => "S1003",
            ErrorCode::S2001 => "S2001",
            ErrorCode::S2002 => "S2002",
            ErrorCode::S2003 => "S2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which metadata table a key was declared in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeyTable {
    Visitor,
    Binding,
}

impl fmt::Display for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTable::Visitor => f.write_str("visitor"),
            KeyTable::Binding => f.write_str("binding"),
        }
    }
}

/// Errors raised while declaring, registering, or querying node schemas.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("node tag `{tag}` is already registered")]
    DuplicateNodeTag { tag: &'static str },

    #[error("`{tag}` lists {table} key `{field}`, which is not a declared field")]
    UnknownFieldKey {
        tag: &'static str,
        field: &'static str,
        table: KeyTable,
    },

    #[error("`{tag}` declares field `{field}` more than once")]
    DuplicateField {
        tag: &'static str,
        field: &'static str,
    },

    #[error("`{tag}` binds scalar field `{field}`; binding keys must name child fields")]
    NonNodeBinding {
        tag: &'static str,
        field: &'static str,
    },

    #[error("`{tag}` visits scalar field `{field}`; visitor keys must name child fields")]
    NonNodeVisit {
        tag: &'static str,
        field: &'static str,
    },

    #[error("`{tag}` lists {table} key `{field}` more than once")]
    DuplicateKey {
        tag: &'static str,
        field: &'static str,
        table: KeyTable,
    },

    #[error("`{tag}` field `{field}` holds child nodes but is not a visitor key")]
    UntraversedChild {
        tag: &'static str,
        field: &'static str,
    },

    #[error("variant group `{name}` is already registered")]
    DuplicateGroupName { name: &'static str },

    #[error("variant group `{name}` has no members")]
    EmptyVariantGroup { name: &'static str },

    #[error("variant group `{group}` lists `{member}` more than once")]
    DuplicateGroupMember {
        group: &'static str,
        member: &'static str,
    },

    #[error("variant group `{group}` lists `{member}`, which is not a registered node shape")]
    UnknownGroupMember {
        group: &'static str,
        member: &'static str,
    },

    #[error("`{tag}` field `{field}` refers to unregistered {target}")]
    UnresolvedChildType {
        tag: &'static str,
        field: &'static str,
        target: ChildType,
    },

    #[error("a process-wide node registry is already installed")]
    AlreadyInstalled,

    #[error("no node shape is registered under tag `{tag}`")]
    UnknownNodeTag { tag: String },

    #[error("no variant group is registered under name `{name}`")]
    UnknownVariantGroup { name: String },

    #[error("expected a `{expected}` node, found `{found}`")]
    UnexpectedNodeTag {
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaError {
    /// Get the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::DuplicateNodeTag { .. } => ErrorCode::S0001,
            SchemaError::UnknownFieldKey { .. } => ErrorCode::S0002,
            SchemaError::DuplicateField { .. } => ErrorCode::S0003,
            SchemaError::NonNodeBinding { .. } => ErrorCode::S0004,
            SchemaError::UntraversedChild { .. } => ErrorCode::S0005,
            SchemaError::DuplicateGroupName { .. } => ErrorCode::S0006,
            SchemaError::EmptyVariantGroup { .. } => ErrorCode::S0007,
            SchemaError::DuplicateGroupMember { .. } => ErrorCode::S0008,
            SchemaError::NonNodeVisit { .. } => ErrorCode::S0009,
            SchemaError::DuplicateKey { .. } => ErrorCode::S0010,
            SchemaError::UnknownGroupMember { .. } => ErrorCode::S1001,
            SchemaError::UnresolvedChildType { .. } => ErrorCode::S1002,
            SchemaError::AlreadyInstalled => ErrorCode::S1003,
            SchemaError::UnknownNodeTag { .. } => ErrorCode::S2001,
            SchemaError::UnknownVariantGroup { .. } => ErrorCode::S2002,
            SchemaError::UnexpectedNodeTag { .. } => ErrorCode::S2003,
        }
    }
}
