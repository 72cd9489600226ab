//! Conversion rule for each recognized manifest field.

use endo_model::{AttributeTag, FieldName, ValueRepresentation};

use crate::dates::{DATE_FORMAT, DATE_TIME_FORMAT};

/// How one manifest field becomes attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Copy the text into one attribute.
    Text {
        tag: AttributeTag,
        vr: ValueRepresentation,
    },
    /// Parse `dd/MM/yyyy` into a date attribute.
    Date { tag: AttributeTag },
    /// Parse `dd/MM/yyyy HH:mm:ss` into a date attribute and a time attribute.
    DateTime {
        date_tag: AttributeTag,
        time_tag: AttributeTag,
    },
}

impl FieldRule {
    /// Textual format a date-bearing rule requires.
    pub fn expected_format(&self) -> Option<&'static str> {
        match self {
            FieldRule::Text { .. } => None,
            FieldRule::Date { .. } => Some(DATE_FORMAT),
            FieldRule::DateTime { .. } => Some(DATE_TIME_FORMAT),
        }
    }

    /// Attributes the rule writes, with their value representations.
    pub fn outputs(&self) -> Vec<(AttributeTag, ValueRepresentation)> {
        match *self {
            FieldRule::Text { tag, vr } => vec![(tag, vr)],
            FieldRule::Date { tag } => vec![(tag, ValueRepresentation::Da)],
            FieldRule::DateTime { date_tag, time_tag } => vec![
                (date_tag, ValueRepresentation::Da),
                (time_tag, ValueRepresentation::Tm),
            ],
        }
    }

    /// Attribute tags the rule writes.
    pub fn targets(&self) -> Vec<AttributeTag> {
        self.outputs().into_iter().map(|(tag, _)| tag).collect()
    }
}

/// Returns the conversion rule for a recognized field.
///
/// StudyDescription and StudyID are written as PN and OtherPatientIDs as UI,
/// matching what existing endoscopy capture stations produce.
pub fn rule_for(field: FieldName) -> FieldRule {
    use ValueRepresentation as Vr;

    let text = |tag, vr| FieldRule::Text { tag, vr };
    match field {
        FieldName::PatientId => text(AttributeTag::PatientId, Vr::Lo),
        FieldName::PatientName => text(AttributeTag::PatientName, Vr::Pn),
        FieldName::ProcedureDescription => text(AttributeTag::StudyDescription, Vr::Pn),
        FieldName::ProcedureId => text(AttributeTag::StudyId, Vr::Pn),
        FieldName::ReferringPhysician => text(AttributeTag::ReferringPhysicianName, Vr::Pn),
        FieldName::StudyInstanceUid => text(AttributeTag::StudyInstanceUid, Vr::Ui),
        FieldName::SeriesInstanceUid => text(AttributeTag::SeriesInstanceUid, Vr::Ui),
        FieldName::OtherPatientId => text(AttributeTag::OtherPatientIds, Vr::Ui),
        FieldName::Accession => text(AttributeTag::AccessionNumber, Vr::Sh),
        FieldName::PatientSex => text(AttributeTag::PatientSex, Vr::Cs),
        FieldName::PatientBirth => FieldRule::Date {
            tag: AttributeTag::PatientBirthDate,
        },
        FieldName::ProcedureDateTime => FieldRule::DateTime {
            date_tag: AttributeTag::StudyDate,
            time_tag: AttributeTag::StudyTime,
        },
    }
}
