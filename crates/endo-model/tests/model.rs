//! Tests for endo-model types.

use chrono::{NaiveDate, NaiveTime};
use endo_model::{AttributeRecord, AttributeTag, FieldMap, MediaFiles, ValueRepresentation};

fn sample_record() -> AttributeRecord {
    let mut builder = AttributeRecord::builder();
    builder.set_string(AttributeTag::PatientId, ValueRepresentation::Lo, "P001");
    builder.set_string(AttributeTag::PatientName, ValueRepresentation::Pn, "Doe^Jane");
    builder.set_date(
        AttributeTag::StudyDate,
        NaiveDate::from_ymd_opt(2021, 11, 3).expect("date"),
    );
    builder.set_time(
        AttributeTag::StudyTime,
        NaiveTime::from_hms_opt(14, 5, 30).expect("time"),
    );
    builder.build()
}

#[test]
fn record_iterates_in_tag_order() {
    let record = sample_record();
    let tags: Vec<AttributeTag> = record.iter().map(|(tag, _)| tag).collect();
    assert_eq!(
        tags,
        vec![
            AttributeTag::StudyDate,
            AttributeTag::StudyTime,
            AttributeTag::PatientName,
            AttributeTag::PatientId,
        ]
    );
}

#[test]
fn record_serializes_by_keyword() {
    let json = serde_json::to_value(sample_record()).expect("serialize record");
    assert_eq!(json["PatientID"]["vr"], "LO");
    assert_eq!(json["PatientID"]["value"], "P001");
    assert_eq!(json["StudyDate"]["vr"], "DA");
    assert_eq!(json["StudyDate"]["value"], "20211103");
    assert_eq!(json["StudyTime"]["vr"], "TM");
    assert_eq!(json["StudyTime"]["value"], "140530");
}

#[test]
fn typed_accessors_reject_other_kinds() {
    let record = sample_record();
    assert_eq!(record.text(AttributeTag::StudyDate), None);
    assert_eq!(record.date(AttributeTag::PatientId), None);
    assert_eq!(
        record.time(AttributeTag::StudyTime),
        NaiveTime::from_hms_opt(14, 5, 30)
    );
    assert!(!record.contains(AttributeTag::AccessionNumber));
}

#[test]
fn field_map_serde_round_trip() {
    let map: FieldMap = [("PatID", "P001"), ("Extra", "x")].into_iter().collect();
    let json = serde_json::to_string(&map).expect("serialize");
    let back: FieldMap = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, map);
}

#[test]
fn media_files_serialize_lowercase_lists() {
    let mut files: MediaFiles<String> = MediaFiles::new();
    files.video.push("clip1.mp4".to_string());
    let json = serde_json::to_value(&files).expect("serialize");
    assert_eq!(json["video"][0], "clip1.mp4");
    assert!(json["sound"].as_array().expect("array").is_empty());
}
