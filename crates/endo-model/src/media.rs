use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a media file referenced by a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Picture,
    Sound,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Video, MediaKind::Picture, MediaKind::Sound];

    /// Element name used for this kind in manifest files.
    pub fn element_name(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Picture => "Picture",
            MediaKind::Sound => "Sound",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.element_name() == name)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MediaKind::Video => "video",
            MediaKind::Picture => "picture",
            MediaKind::Sound => "sound",
        };
        f.write_str(label)
    }
}

/// One ordered file list per media kind.
///
/// Lists keep document order and duplicates. `MediaFiles<String>` holds the
/// relative names from a manifest, `MediaFiles<PathBuf>` the resolved paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFiles<T> {
    pub video: Vec<T>,
    pub picture: Vec<T>,
    pub sound: Vec<T>,
}

impl<T> Default for MediaFiles<T> {
    fn default() -> Self {
        Self {
            video: Vec::new(),
            picture: Vec::new(),
            sound: Vec::new(),
        }
    }
}

impl<T> MediaFiles<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: MediaKind) -> &[T] {
        match kind {
            MediaKind::Video => &self.video,
            MediaKind::Picture => &self.picture,
            MediaKind::Sound => &self.sound,
        }
    }

    pub fn push(&mut self, kind: MediaKind, item: T) {
        match kind {
            MediaKind::Video => self.video.push(item),
            MediaKind::Picture => self.picture.push(item),
            MediaKind::Sound => self.sound.push(item),
        }
    }

    /// Total number of entries across all kinds.
    pub fn len(&self) -> usize {
        self.video.len() + self.picture.len() + self.sound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies `f` to every entry, keeping kind, order and cardinality.
    pub fn map<U, F>(&self, mut f: F) -> MediaFiles<U>
    where
        F: FnMut(&T) -> U,
    {
        MediaFiles {
            video: self.video.iter().map(&mut f).collect(),
            picture: self.picture.iter().map(&mut f).collect(),
            sound: self.sound.iter().map(&mut f).collect(),
        }
    }
}
