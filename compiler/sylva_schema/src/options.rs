//! Validation settings for schema registration.

/// How an authoring lint is reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LintLevel {
    /// Say nothing.
    Allow,
    /// Record a [`SchemaWarning`](crate::SchemaWarning) and log it.
    #[default]
    Warn,
    /// Reject the declaration.
    Deny,
}

/// Options applied to every declaration registered through one builder.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ValidationOptions {
    /// Child-typed fields that are not visitor keys.
    ///
    /// Usually an authoring mistake, but some child fields are informational
    /// references that must not be walked, hence `Warn` rather than `Deny`.
    pub untraversed_child: LintLevel,
}

impl ValidationOptions {
    /// Options that turn every lint into an error.
    pub fn strict() -> Self {
        ValidationOptions {
            untraversed_child: LintLevel::Deny,
        }
    }
}
