//! Property tests for media path resolution.

use std::path::{Path, PathBuf};

use endo_core::{resolve, resolve_media};
use endo_model::MediaFiles;
use proptest::prelude::*;

#[test]
fn resolves_study_clips() {
    let resolved = resolve(Path::new("/data/study7"), &["clip1.mp4", "clip2.mp4"]);
    assert_eq!(
        resolved,
        vec![
            PathBuf::from("/data/study7/clip1.mp4"),
            PathBuf::from("/data/study7/clip2.mp4"),
        ]
    );
}

fn file_name() -> impl Strategy<Value = String> {
    "[a-z0-9_]{0,8}(\\.[a-z0-9]{1,4})?"
}

proptest! {
    #[test]
    fn resolution_preserves_order_and_length(
        base in "/[a-z]{1,6}(/[a-z]{1,6}){0,3}",
        names in prop::collection::vec(file_name(), 0..12),
    ) {
        let base = PathBuf::from(base);
        let resolved = resolve(&base, &names);
        prop_assert_eq!(resolved.len(), names.len());
        for (path, name) in resolved.iter().zip(&names) {
            prop_assert_eq!(path, &base.join(name));
        }
    }

    #[test]
    fn media_lists_resolve_independently(
        video in prop::collection::vec(file_name(), 0..5),
        picture in prop::collection::vec(file_name(), 0..5),
        sound in prop::collection::vec(file_name(), 0..5),
    ) {
        let media = MediaFiles { video: video.clone(), picture: picture.clone(), sound: sound.clone() };
        let base = Path::new("/captures");
        let resolved = resolve_media(base, &media);
        prop_assert_eq!(resolved.video, resolve(base, &video));
        prop_assert_eq!(resolved.picture, resolve(base, &picture));
        prop_assert_eq!(resolved.sound, resolve(base, &sound));
    }
}
