use endo_ingest::ManifestError;
use endo_map::MappingError;
use thiserror::Error;

/// Failure of a whole conversion. Errors from the manifest source and the
/// mapper pass through unchanged.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Result type alias for conversions.
pub type Result<T> = std::result::Result<T, ConversionError>;
