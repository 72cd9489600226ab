use std::path::Path;

use endo_model::{FieldMap, MediaFiles};

use crate::error::Result;

/// Everything a manifest contributes to a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Field values, last occurrence wins.
    pub fields: FieldMap,
    /// Media file names relative to the manifest, in document order.
    pub media: MediaFiles<String>,
}

/// Produces a [`ParsedManifest`] from a manifest file.
pub trait ManifestSource {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`](crate::ManifestError) if the file cannot be
    /// read or is not a well-formed manifest.
    fn load(&self, path: &Path) -> Result<ParsedManifest>;
}

impl<S: ManifestSource + ?Sized> ManifestSource for &S {
    fn load(&self, path: &Path) -> Result<ParsedManifest> {
        (**self).load(path)
    }
}
