//! Typed DICOM attributes produced from a manifest.
//!
//! An [`AttributeRecord`] is built once through an [`AttributeRecordBuilder`]
//! and is immutable afterwards. Entries are ordered by tag number, the order
//! a DICOM writer emits them in.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Output attribute identifiers.
///
/// Variants are declared in ascending tag order so the derived `Ord` matches
/// DICOM element ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeTag {
    StudyDate,
    StudyTime,
    AccessionNumber,
    ReferringPhysicianName,
    StudyDescription,
    PatientName,
    PatientId,
    PatientBirthDate,
    PatientSex,
    OtherPatientIds,
    StudyInstanceUid,
    SeriesInstanceUid,
    StudyId,
}

impl AttributeTag {
    /// DICOM data element tag as `(group, element)`.
    pub fn tag(&self) -> (u16, u16) {
        match self {
            AttributeTag::StudyDate => (0x0008, 0x0020),
            AttributeTag::StudyTime => (0x0008, 0x0030),
            AttributeTag::AccessionNumber => (0x0008, 0x0050),
            AttributeTag::ReferringPhysicianName => (0x0008, 0x0090),
            AttributeTag::StudyDescription => (0x0008, 0x1030),
            AttributeTag::PatientName => (0x0010, 0x0010),
            AttributeTag::PatientId => (0x0010, 0x0020),
            AttributeTag::PatientBirthDate => (0x0010, 0x0030),
            AttributeTag::PatientSex => (0x0010, 0x0040),
            AttributeTag::OtherPatientIds => (0x0010, 0x1000),
            AttributeTag::StudyInstanceUid => (0x0020, 0x000D),
            AttributeTag::SeriesInstanceUid => (0x0020, 0x000E),
            AttributeTag::StudyId => (0x0020, 0x0010),
        }
    }

    /// DICOM data dictionary keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            AttributeTag::StudyDate => "StudyDate",
            AttributeTag::StudyTime => "StudyTime",
            AttributeTag::AccessionNumber => "AccessionNumber",
            AttributeTag::ReferringPhysicianName => "ReferringPhysicianName",
            AttributeTag::StudyDescription => "StudyDescription",
            AttributeTag::PatientName => "PatientName",
            AttributeTag::PatientId => "PatientID",
            AttributeTag::PatientBirthDate => "PatientBirthDate",
            AttributeTag::PatientSex => "PatientSex",
            AttributeTag::OtherPatientIds => "OtherPatientIDs",
            AttributeTag::StudyInstanceUid => "StudyInstanceUID",
            AttributeTag::SeriesInstanceUid => "SeriesInstanceUID",
            AttributeTag::StudyId => "StudyID",
        }
    }
}

impl fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (group, element) = self.tag();
        write!(f, "({group:04X},{element:04X})")
    }
}

/// Value representation of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueRepresentation {
    /// Long string.
    #[serde(rename = "LO")]
    Lo,
    /// Person name.
    #[serde(rename = "PN")]
    Pn,
    /// Unique identifier.
    #[serde(rename = "UI")]
    Ui,
    /// Short string.
    #[serde(rename = "SH")]
    Sh,
    /// Code string.
    #[serde(rename = "CS")]
    Cs,
    /// Calendar date.
    #[serde(rename = "DA")]
    Da,
    /// Time of day.
    #[serde(rename = "TM")]
    Tm,
}

impl ValueRepresentation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueRepresentation::Lo => "LO",
            ValueRepresentation::Pn => "PN",
            ValueRepresentation::Ui => "UI",
            ValueRepresentation::Sh => "SH",
            ValueRepresentation::Cs => "CS",
            ValueRepresentation::Da => "DA",
            ValueRepresentation::Tm => "TM",
        }
    }
}

impl fmt::Display for ValueRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl AttributeValue {
    /// Encodes the value the way it appears in a DICOM data element:
    /// dates as `YYYYMMDD`, times as `HHMMSS`, text unchanged.
    pub fn to_dicom_string(&self) -> String {
        match self {
            AttributeValue::Text(text) => text.clone(),
            AttributeValue::Date(date) => date.format("%Y%m%d").to_string(),
            AttributeValue::Time(time) => time.format("%H%M%S").to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            AttributeValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            AttributeValue::Time(time) => Some(*time),
            _ => None,
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dicom_string())
    }
}

/// One entry of an [`AttributeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub vr: ValueRepresentation,
    pub value: AttributeValue,
}

/// Typed attribute record handed to the container writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    entries: BTreeMap<AttributeTag, Attribute>,
}

impl AttributeRecord {
    pub fn builder() -> AttributeRecordBuilder {
        AttributeRecordBuilder::default()
    }

    pub fn get(&self, tag: AttributeTag) -> Option<&Attribute> {
        self.entries.get(&tag)
    }

    pub fn value(&self, tag: AttributeTag) -> Option<&AttributeValue> {
        self.get(tag).map(|attribute| &attribute.value)
    }

    pub fn text(&self, tag: AttributeTag) -> Option<&str> {
        self.value(tag).and_then(AttributeValue::as_text)
    }

    pub fn date(&self, tag: AttributeTag) -> Option<NaiveDate> {
        self.value(tag).and_then(AttributeValue::as_date)
    }

    pub fn time(&self, tag: AttributeTag) -> Option<NaiveTime> {
        self.value(tag).and_then(AttributeValue::as_time)
    }

    pub fn contains(&self, tag: AttributeTag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeTag, &Attribute)> {
        self.entries.iter().map(|(tag, attribute)| (*tag, attribute))
    }
}

impl Serialize for AttributeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tag, attribute) in &self.entries {
            map.serialize_entry(tag.keyword(), attribute)?;
        }
        map.end()
    }
}

/// Accumulates attributes and yields a finished [`AttributeRecord`].
///
/// Setting a tag twice keeps the later value.
#[derive(Debug, Default)]
pub struct AttributeRecordBuilder {
    entries: BTreeMap<AttributeTag, Attribute>,
}

impl AttributeRecordBuilder {
    pub fn set(&mut self, tag: AttributeTag, vr: ValueRepresentation, value: AttributeValue) {
        self.entries.insert(tag, Attribute { vr, value });
    }

    pub fn set_string(&mut self, tag: AttributeTag, vr: ValueRepresentation, value: &str) {
        self.set(tag, vr, AttributeValue::Text(value.to_string()));
    }

    pub fn set_date(&mut self, tag: AttributeTag, value: NaiveDate) {
        self.set(tag, ValueRepresentation::Da, AttributeValue::Date(value));
    }

    pub fn set_time(&mut self, tag: AttributeTag, value: NaiveTime) {
        self.set(tag, ValueRepresentation::Tm, AttributeValue::Time(value));
    }

    #[must_use]
    pub fn build(self) -> AttributeRecord {
        AttributeRecord {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_order_follows_tag_numbers() {
        let tags = [
            AttributeTag::StudyDate,
            AttributeTag::StudyTime,
            AttributeTag::AccessionNumber,
            AttributeTag::ReferringPhysicianName,
            AttributeTag::StudyDescription,
            AttributeTag::PatientName,
            AttributeTag::PatientId,
            AttributeTag::PatientBirthDate,
            AttributeTag::PatientSex,
            AttributeTag::OtherPatientIds,
            AttributeTag::StudyInstanceUid,
            AttributeTag::SeriesInstanceUid,
            AttributeTag::StudyId,
        ];
        for pair in tags.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].tag() < pair[1].tag());
        }
    }

    #[test]
    fn tag_display_is_hex_pair() {
        assert_eq!(AttributeTag::StudyInstanceUid.to_string(), "(0020,000D)");
        assert_eq!(AttributeTag::PatientId.to_string(), "(0010,0020)");
    }

    #[test]
    fn dicom_string_encoding() {
        let date = AttributeValue::Date(NaiveDate::from_ymd_opt(2021, 11, 3).unwrap());
        let time = AttributeValue::Time(NaiveTime::from_hms_opt(14, 5, 30).unwrap());
        assert_eq!(date.to_dicom_string(), "20211103");
        assert_eq!(time.to_dicom_string(), "140530");
        assert_eq!(
            AttributeValue::Text("Doe^Jane".to_string()).to_dicom_string(),
            "Doe^Jane"
        );
    }

    #[test]
    fn builder_keeps_last_value() {
        let mut builder = AttributeRecord::builder();
        builder.set_string(AttributeTag::PatientId, ValueRepresentation::Lo, "A");
        builder.set_string(AttributeTag::PatientId, ValueRepresentation::Lo, "B");
        let record = builder.build();
        assert_eq!(record.len(), 1);
        assert_eq!(record.text(AttributeTag::PatientId), Some("B"));
    }
}
