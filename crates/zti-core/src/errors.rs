//! Error types for the inventory core.
//!
//! Only schema problems are errors here. Unresolvable tag pairs and
//! ineligible members are normal outcomes and never surface as `CoreError`.

use thiserror::Error;

/// Errors raised while building the inventory core structures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The controller's tag schema payload does not have the expected shape.
    ///
    /// There is no safe partial schema, so this aborts the run.
    #[error("Malformed tag schema: {reason}")]
    SchemaFormat { reason: String },
}

impl CoreError {
    pub(crate) fn schema_format(reason: impl Into<String>) -> Self {
        Self::SchemaFormat {
            reason: reason.into(),
        }
    }
}
