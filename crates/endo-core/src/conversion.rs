//! Manifest to attribute record + media path conversion.

use std::path::{Path, PathBuf};

use endo_ingest::{ManifestSource, XmlManifestSource};
use endo_map::AttributeMapper;
use endo_model::{AttributeRecord, MediaFiles, MediaKind};
use tracing::{debug, info};

use crate::error::Result;
use crate::options::ConversionOptions;
use crate::paths::resolve_media;

/// Products of converting one manifest.
///
/// A value of this type only exists once every step has succeeded, so callers
/// never see a record without its media lists or the reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndoscopicConversion {
    attributes: AttributeRecord,
    media: MediaFiles<PathBuf>,
}

impl EndoscopicConversion {
    /// Converts an XML manifest, resolving media next to it.
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self> {
        Self::convert(
            &XmlManifestSource::new(),
            path.as_ref(),
            &ConversionOptions::default(),
        )
    }

    /// Converts the manifest at `path` read through `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's [`ManifestError`](endo_ingest::ManifestError) or
    /// the mapper's [`MappingError`](endo_map::MappingError) unchanged.
    pub fn convert<S>(source: &S, path: &Path, options: &ConversionOptions) -> Result<Self>
    where
        S: ManifestSource + ?Sized,
    {
        let manifest = source.load(path)?;
        let attributes = AttributeMapper::new().map(&manifest.fields)?;

        let base_dir = options.base_dir_for(path);
        let media = resolve_media(&base_dir, &manifest.media);
        debug!(base_dir = %base_dir.display(), "resolved media paths");

        info!(
            manifest = %path.display(),
            attributes = attributes.len(),
            videos = media.video.len(),
            pictures = media.picture.len(),
            sounds = media.sound.len(),
            "converted manifest"
        );
        Ok(Self { attributes, media })
    }

    pub fn attributes(&self) -> &AttributeRecord {
        &self.attributes
    }

    pub fn video_files(&self) -> &[PathBuf] {
        &self.media.video
    }

    pub fn picture_files(&self) -> &[PathBuf] {
        &self.media.picture
    }

    pub fn sound_files(&self) -> &[PathBuf] {
        &self.media.sound
    }

    pub fn files_of(&self, kind: MediaKind) -> &[PathBuf] {
        self.media.get(kind)
    }

    pub fn media(&self) -> &MediaFiles<PathBuf> {
        &self.media
    }

    /// Hands both products over to the caller.
    pub fn into_parts(self) -> (AttributeRecord, MediaFiles<PathBuf>) {
        (self.attributes, self.media)
    }
}
