use std::io;
use std::path::PathBuf;

/// Errors that can occur during testpilot operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Project root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestError {
        path: PathBuf,
        #[source]
        source: ManifestSource,
    },

    #[error("Invalid mode '{0}' (expected one of: all, unit, e2e)")]
    InvalidMode(String),
}

/// Underlying cause of a manifest failure
#[derive(Debug, thiserror::Error)]
pub enum ManifestSource {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for testpilot operations
pub type Result<T> = std::result::Result<T, Error>;
