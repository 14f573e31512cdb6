//! Error types for report computation.

use rockets_core::EntityKind;
use rockets_store::StoreError;

/// Errors raised while computing a report.
///
/// None of these are retried or patched up locally: the caller decides
/// whether to skip, fill in, or abort.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// A record points at an entity that is not in the snapshot.
    #[error("malformed {kind} {id}: {reason}")]
    MalformedRecord {
        kind: EntityKind,
        id: String,
        reason: String,
    },

    /// A field the report needs is unset on a record.
    #[error("incomplete data: {kind} {id} has no {field}")]
    IncompleteData {
        field: &'static str,
        kind: EntityKind,
        id: String,
    },

    /// The report was asked about an entity that does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Loading the snapshot failed.
    #[error("repository error: {0}")]
    Store(#[from] StoreError),
}

impl MiningError {
    pub(crate) fn dangling(kind: EntityKind, id: &str, field: &str, target: &str) -> Self {
        Self::MalformedRecord {
            kind,
            id: id.to_string(),
            reason: format!("{field} '{target}' is not in the snapshot"),
        }
    }

    pub(crate) fn missing(field: &'static str, kind: EntityKind, id: &str) -> Self {
        Self::IncompleteData {
            field,
            kind,
            id: id.to_string(),
        }
    }
}
