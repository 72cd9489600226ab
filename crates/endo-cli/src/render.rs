//! Plain-text and JSON renderings of a conversion.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use endo_core::EndoscopicConversion;
use endo_model::{AttributeRecord, MediaFiles};
use serde::Serialize;

/// One line per attribute: `(gggg,eeee) VR Keyword = value`.
pub fn render_record(record: &AttributeRecord) -> String {
    let mut out = String::new();
    for (tag, attribute) in record.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "{tag} {} {} = {}",
            attribute.vr,
            tag.keyword(),
            attribute.value.to_dicom_string()
        );
    }
    out
}

/// Serializable view of a finished conversion.
#[derive(Debug, Serialize)]
pub struct ConversionReport<'a> {
    pub manifest: &'a Path,
    pub attributes: &'a AttributeRecord,
    pub media: &'a MediaFiles<PathBuf>,
}

impl<'a> ConversionReport<'a> {
    pub fn new(manifest: &'a Path, conversion: &'a EndoscopicConversion) -> Self {
        Self {
            manifest,
            attributes: conversion.attributes(),
            media: conversion.media(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
