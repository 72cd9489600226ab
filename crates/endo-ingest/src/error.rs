use std::path::PathBuf;

/// Errors raised while reading a manifest.
///
/// Any of them means the manifest is unusable; callers are not expected to
/// recover.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {message}")]
    Xml { path: PathBuf, message: String },
}

/// Result type alias for manifest loading.
pub type Result<T> = std::result::Result<T, ManifestError>;

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Xml {
            path: path.into(),
            message: message.into(),
        }
    }
}
