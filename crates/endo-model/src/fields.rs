//! Manifest field vocabulary and the field map produced by a manifest source.
//!
//! The manifest carries loosely typed `name -> text` pairs. Only the names in
//! [`FieldName`] are understood; anything else is kept in the [`FieldMap`] but
//! never turned into an attribute.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A manifest field name the attribute mapper understands.
///
/// Matching against manifest text is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    /// `PatID`: patient identifier.
    PatientId,
    /// `PatName`: patient name.
    PatientName,
    /// `ProcedureDescription`: free-text procedure description.
    ProcedureDescription,
    /// `ProcedureID`: procedure identifier.
    ProcedureId,
    /// `ReferringPhysician`: referring physician name.
    ReferringPhysician,
    /// `StudyInstanceUID`: study instance identifier.
    StudyInstanceUid,
    /// `SeriesInstanceUID`: series instance identifier.
    SeriesInstanceUid,
    /// `OtherPatientID`: additional patient identifier.
    OtherPatientId,
    /// `PATAccession`: accession number.
    Accession,
    /// `PATSex`: patient sex code.
    PatientSex,
    /// `PatBirth`: patient birth date, `dd/MM/yyyy`.
    PatientBirth,
    /// `ORDate`: procedure date and time, `dd/MM/yyyy HH:mm:ss`.
    ProcedureDateTime,
}

impl FieldName {
    /// Every recognized field, in manifest documentation order.
    pub const ALL: [FieldName; 12] = [
        FieldName::PatientId,
        FieldName::PatientName,
        FieldName::ProcedureDescription,
        FieldName::ProcedureId,
        FieldName::ReferringPhysician,
        FieldName::StudyInstanceUid,
        FieldName::SeriesInstanceUid,
        FieldName::OtherPatientId,
        FieldName::Accession,
        FieldName::PatientSex,
        FieldName::PatientBirth,
        FieldName::ProcedureDateTime,
    ];

    /// Returns the spelling used in manifest files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::PatientId => "PatID",
            FieldName::PatientName => "PatName",
            FieldName::ProcedureDescription => "ProcedureDescription",
            FieldName::ProcedureId => "ProcedureID",
            FieldName::ReferringPhysician => "ReferringPhysician",
            FieldName::StudyInstanceUid => "StudyInstanceUID",
            FieldName::SeriesInstanceUid => "SeriesInstanceUID",
            FieldName::OtherPatientId => "OtherPatientID",
            FieldName::Accession => "PATAccession",
            FieldName::PatientSex => "PATSex",
            FieldName::PatientBirth => "PatBirth",
            FieldName::ProcedureDateTime => "ORDate",
        }
    }

    /// Looks up a manifest field name. Returns `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Returns true if the field holds a date that must parse.
    pub fn is_date_bearing(&self) -> bool {
        matches!(self, FieldName::PatientBirth | FieldName::ProcedureDateTime)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values read from one manifest, keyed by raw field name.
///
/// Keys are unique. Inserting a name that is already present replaces its
/// value and keeps its original position, so the last occurrence in the
/// manifest wins. Iteration follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a recognized field, if present.
    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.get(field.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Names in the map that are not part of the recognized vocabulary.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .map(|(name, _)| name)
            .filter(|name| FieldName::parse(name).is_none())
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
