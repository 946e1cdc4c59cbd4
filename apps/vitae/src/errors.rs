use std::path::PathBuf;

use thiserror::Error;

/// Document-level failure. Section-level problems (missing fields, bad dates)
/// never surface here; they are degraded inside the formatters.
///
/// Any `Err` means no document was produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid CV data: {0}")]
    InvalidCv(#[from] serde_json::Error),

    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout produced no pages")]
    EmptyLayout,
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
