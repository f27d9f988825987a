//! Error types for the catalog engine.

use crate::{validate::ValidationReport, ProductId};
use thiserror::Error;

/// All possible errors from the catalog engine.
///
/// Per-field validation failures are carried as a full [`ValidationReport`]
/// so the host can annotate every field in one pass instead of stopping at
/// the first bad one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("draft failed validation: {0}")]
    InvalidDraft(ValidationReport),

    #[error("record not found: {0}")]
    RecordNotFound(ProductId),

    #[error("no record is being edited")]
    NoEditCursor,

    #[error("unknown product type: {0}")]
    UnknownKind(String),

    #[error("catalog serialization failed: {0}")]
    Serialize(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
