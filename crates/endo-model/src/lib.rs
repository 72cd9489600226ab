//! Shared types for endoscopic manifest conversion.
//!
//! - [`FieldMap`] and [`FieldName`]: what a manifest source produces.
//! - [`AttributeRecord`]: the typed DICOM attributes the mapper produces.
//! - [`MediaFiles`]: media references grouped by [`MediaKind`].

#![deny(unsafe_code)]

pub mod attributes;
pub mod fields;
pub mod media;

pub use attributes::{
    Attribute, AttributeRecord, AttributeRecordBuilder, AttributeTag, AttributeValue,
    ValueRepresentation,
};
pub use fields::{FieldMap, FieldName};
pub use media::{MediaFiles, MediaKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_map_keeps_shape() {
        let mut files = MediaFiles::new();
        files.push(MediaKind::Video, "a.mp4".to_string());
        files.push(MediaKind::Video, "a.mp4".to_string());
        files.push(MediaKind::Sound, "b.wav".to_string());

        let lengths = files.map(String::len);
        assert_eq!(lengths.video, vec![5, 5]);
        assert!(lengths.picture.is_empty());
        assert_eq!(lengths.sound, vec![5]);
        assert_eq!(lengths.len(), 3);
    }

    #[test]
    fn media_kind_element_names() {
        assert_eq!(MediaKind::from_element_name("Video"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_element_name("Picture"), Some(MediaKind::Picture));
        assert_eq!(MediaKind::from_element_name("Sound"), Some(MediaKind::Sound));
        assert_eq!(MediaKind::from_element_name("video"), None);
    }
}
