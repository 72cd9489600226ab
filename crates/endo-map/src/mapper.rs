//! Field map to attribute record conversion.

use endo_model::{AttributeRecord, AttributeRecordBuilder, FieldMap, FieldName};
use tracing::{debug, trace};

use crate::dates::{parse_day_month_year, parse_day_month_year_time};
use crate::error::{MappingError, Result};
use crate::rules::{FieldRule, rule_for};

/// Converts manifest fields into a typed [`AttributeRecord`].
///
/// The mapper is stateless; one instance can serve any number of
/// conversions, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMapper;

impl AttributeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Maps every recognized field and ignores the rest.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MalformedDate`] if a date-bearing field does
    /// not parse. No record is produced in that case.
    pub fn map(&self, fields: &FieldMap) -> Result<AttributeRecord> {
        let mut builder = AttributeRecord::builder();
        let mut skipped = 0usize;
        for (name, value) in fields.iter() {
            match FieldName::parse(name) {
                Some(field) => apply_rule(&mut builder, field, value)?,
                None => {
                    debug!(field = name, "ignoring unrecognized manifest field");
                    skipped += 1;
                }
            }
        }
        let record = builder.build();
        trace!(
            attributes = record.len(),
            skipped,
            "mapped manifest fields"
        );
        Ok(record)
    }
}

/// Maps `fields` with a default [`AttributeMapper`].
pub fn map_fields(fields: &FieldMap) -> Result<AttributeRecord> {
    AttributeMapper::new().map(fields)
}

fn apply_rule(builder: &mut AttributeRecordBuilder, field: FieldName, value: &str) -> Result<()> {
    let rule = rule_for(field);
    match rule {
        FieldRule::Text { tag, vr } => builder.set_string(tag, vr, value),
        FieldRule::Date { tag } => {
            let date = parse_day_month_year(value).ok_or_else(|| malformed(field, value, rule))?;
            builder.set_date(tag, date);
        }
        FieldRule::DateTime { date_tag, time_tag } => {
            let stamp =
                parse_day_month_year_time(value).ok_or_else(|| malformed(field, value, rule))?;
            builder.set_date(date_tag, stamp.date());
            builder.set_time(time_tag, stamp.time());
        }
    }
    Ok(())
}

fn malformed(field: FieldName, value: &str, rule: FieldRule) -> MappingError {
    MappingError::malformed_date(field, value, rule.expected_format().unwrap_or_default())
}
