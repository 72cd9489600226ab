//! Media path resolution.
//!
//! Resolution is path algebra only: nothing touches the file system and no
//! name is validated, so empty names or `..` segments pass through as given.

use std::path::{Path, PathBuf};

use endo_model::MediaFiles;

/// Joins `base` with every name, keeping order and length.
pub fn resolve<S: AsRef<Path>>(base: &Path, names: &[S]) -> Vec<PathBuf> {
    names.iter().map(|name| resolve_one(base, name)).collect()
}

/// Resolves all three media lists against `base`.
pub fn resolve_media(base: &Path, media: &MediaFiles<String>) -> MediaFiles<PathBuf> {
    media.map(|name| resolve_one(base, name))
}

fn resolve_one(base: &Path, name: impl AsRef<Path>) -> PathBuf {
    base.join(name)
}

/// Directory a manifest's media names are relative to: its parent, or the
/// empty path when it has none.
pub fn manifest_base_dir(manifest: &Path) -> PathBuf {
    manifest.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use endo_model::MediaKind;

    use super::*;

    #[test]
    fn resolves_under_base() {
        let resolved = resolve(Path::new("/data/study7"), &["clip1.mp4", "clip2.mp4"]);
        assert_eq!(
            resolved,
            vec![
                PathBuf::from("/data/study7/clip1.mp4"),
                PathBuf::from("/data/study7/clip2.mp4"),
            ]
        );
    }

    #[test]
    fn passes_unusual_names_through() {
        let resolved = resolve(Path::new("/data"), &["", "../x.mp4", "a/b.jpg"]);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[1], Path::new("/data").join("../x.mp4"));
        assert_eq!(resolved[2], PathBuf::from("/data/a/b.jpg"));
    }

    #[test]
    fn media_lists_resolve_like_plain_lists() {
        let mut media = MediaFiles::new();
        media.push(MediaKind::Video, "clip1.mp4".to_string());
        media.push(MediaKind::Video, "clip1.mp4".to_string());
        media.push(MediaKind::Sound, "../notes.wav".to_string());
        let base = Path::new("/data/study7");

        let resolved = resolve_media(base, &media);
        for kind in MediaKind::ALL {
            assert_eq!(resolved.get(kind), resolve(base, media.get(kind)).as_slice());
        }
        assert_eq!(resolved.len(), 3);
        assert!(resolved.picture.is_empty());
    }

    #[test]
    fn base_dir_of_manifest() {
        assert_eq!(
            manifest_base_dir(Path::new("/data/study7/procedure.xml")),
            PathBuf::from("/data/study7")
        );
        assert_eq!(manifest_base_dir(Path::new("procedure.xml")), PathBuf::new());
        assert_eq!(manifest_base_dir(Path::new("/")), PathBuf::new());
    }
}
