//! Process-wide registry handle.
//!
//! For hosts that cannot thread a [`SharedRegistry`] through every
//! consumer. The registry is installed exactly once, after it is finished,
//! and never replaced. Passing a `SharedRegistry` explicitly is preferred.

use std::sync::OnceLock;

use crate::{Registry, SchemaError, SharedRegistry};

static GLOBAL: OnceLock<SharedRegistry> = OnceLock::new();

/// Install the process-wide registry.
///
/// Fails with [`SchemaError::AlreadyInstalled`] on a second call; the first
/// registry stays in place.
pub fn install(registry: Registry) -> Result<SharedRegistry, SchemaError> {
    let shared = registry.into_shared();
    GLOBAL
        .set(shared.clone())
        .map_err(|_| SchemaError::AlreadyInstalled)?;
    tracing::debug!(shapes = shared.len(), "installed process-wide node registry");
    Ok(shared)
}

/// The process-wide registry, if one has been installed.
pub fn get() -> Option<SharedRegistry> {
    GLOBAL.get().cloned()
}
