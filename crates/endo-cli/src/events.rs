//! Log events that may carry patient values.
//!
//! Attribute values and the field text quoted by a malformed-date error are
//! replaced with [`REDACTED_VALUE`] unless `log_data` is set.

use std::error::Error as StdError;

use endo_core::ConversionError;
use endo_map::MappingError;
use endo_model::AttributeRecord;
use tracing::{debug, error};

use crate::logging::{REDACTED_VALUE, redact_value};

/// Logs every attribute of `record` at debug level.
pub fn log_attributes(record: &AttributeRecord, log_data: bool) {
    for (tag, attribute) in record.iter() {
        debug!(
            tag = %tag,
            keyword = tag.keyword(),
            vr = %attribute.vr,
            value = redact_value(&attribute.value.to_dicom_string(), log_data),
            "mapped attribute"
        );
    }
}

/// Logs a failed command at error level.
pub fn log_failure(error: &anyhow::Error, log_data: bool) {
    error!("{}", failure_message(error, log_data));
}

/// The `{error:#}` rendering of `error`, with field values redacted unless
/// `log_data` is set.
pub fn failure_message(error: &anyhow::Error, log_data: bool) -> String {
    if log_data {
        return format!("{error:#}");
    }
    error
        .chain()
        .map(redacted_cause)
        .collect::<Vec<_>>()
        .join(": ")
}

fn redacted_cause(cause: &(dyn StdError + 'static)) -> String {
    let mapping = cause.downcast_ref::<MappingError>().or_else(|| {
        match cause.downcast_ref::<ConversionError>() {
            Some(ConversionError::Mapping(inner)) => Some(inner),
            _ => None,
        }
    });
    match mapping {
        Some(MappingError::MalformedDate { field, expected, .. }) => {
            format!("malformed date in field {field}: {REDACTED_VALUE} does not match {expected}")
        }
        None => cause.to_string(),
    }
}
