use std::path::{Path, PathBuf};

use crate::paths::manifest_base_dir;

/// Settings for one conversion.
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Directory media names are resolved against. Defaults to the
    /// manifest's parent directory.
    pub base_dir: Option<PathBuf>,
}

impl ConversionOptions {
    /// Resolve media against `dir` instead of the manifest's directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Base directory to use for `manifest`.
    pub fn base_dir_for(&self, manifest: &Path) -> PathBuf {
        self.base_dir
            .clone()
            .unwrap_or_else(|| manifest_base_dir(manifest))
    }
}
