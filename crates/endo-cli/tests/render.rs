//! Tests for conversion renderings.

use std::fs;

use endo_cli::render::{ConversionReport, render_record};
use endo_core::EndoscopicConversion;
use endo_map::map_fields;
use endo_model::FieldMap;

#[test]
fn record_renders_in_tag_order() {
    let fields: FieldMap = [
        ("PatID", "P001"),
        ("PatName", "Doe^Jane"),
        ("PatBirth", "01/01/1980"),
        ("ORDate", "03/11/2021 14:05:30"),
        ("PATSex", "F"),
        ("StudyInstanceUID", "1.2.3.4"),
    ]
    .into_iter()
    .collect();
    let record = map_fields(&fields).expect("map");

    insta::assert_snapshot!(render_record(&record), @r"
    (0008,0020) DA StudyDate = 20211103
    (0008,0030) TM StudyTime = 140530
    (0010,0010) PN PatientName = Doe^Jane
    (0010,0020) LO PatientID = P001
    (0010,0030) DA PatientBirthDate = 19800101
    (0010,0040) CS PatientSex = F
    (0020,000D) UI StudyInstanceUID = 1.2.3.4
    ");
}

#[test]
fn report_json_has_attributes_and_media() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manifest = dir.path().join("procedure.xml");
    fs::write(
        &manifest,
        "<Procedure><PatID>P001</PatID><Video>clip1.mp4</Video></Procedure>",
    )
    .expect("write manifest");

    let conversion = EndoscopicConversion::from_manifest(&manifest).expect("convert");
    let json = ConversionReport::new(&manifest, &conversion)
        .to_json()
        .expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    assert_eq!(value["attributes"]["PatientID"]["vr"], "LO");
    assert_eq!(value["attributes"]["PatientID"]["value"], "P001");
    assert_eq!(
        value["media"]["video"][0].as_str(),
        dir.path().join("clip1.mp4").to_str()
    );
    assert!(value["media"]["sound"].as_array().expect("array").is_empty());
}
