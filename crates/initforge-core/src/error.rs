//! Generator error taxonomy

use thiserror::Error;

/// Errors produced by the generation pipeline.
///
/// Validation-class failures (bad field, unknown database) are distinguished
/// from internal faults so that callers can map them to a client error
/// instead of a generic server fault.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A config field failed validation before rendering
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The selected database is not part of the built-in catalog
    #[error("unknown database '{0}'")]
    UnknownDatabase(String),

    /// Zip assembly failed
    #[error("failed to assemble archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing entry bytes into the archive failed
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Whether this failure is attributable to the submitted configuration
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidField { .. } | Self::UnknownDatabase(_)
        )
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
