//! Repository error types.

use std::path::PathBuf;

use rockets_core::{CoreError, EntityKind};
use thiserror::Error;

/// Errors from repository operations and dataset loading.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored entity matches.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// An entity points at an id that is not stored.
    #[error("{kind} {id}: {field} references unknown id {target}")]
    DanglingReference {
        kind: EntityKind,
        id: String,
        field: &'static str,
        target: String,
    },

    /// An entity cannot be deleted while others point at it.
    #[error("{kind} {id} is still referenced by {by}")]
    StillReferenced {
        kind: EntityKind,
        id: String,
        by: String,
    },

    /// A different id already holds an entity with the same natural key.
    #[error("{kind} {id} duplicates stored entity {existing}")]
    Duplicate {
        kind: EntityKind,
        id: String,
        existing: String,
    },

    /// The store handed back, or was handed, an entity of another kind.
    #[error("expected a {expected}, found a {found}")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    /// The entity failed its structural checks.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// A dataset or preparation file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset or preparation file is not valid JSON for its shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
