//! Manifest field to DICOM attribute mapping.
//!
//! Each recognized manifest field has a fixed [`FieldRule`]: copy text with a
//! value representation, parse a date, or split a date-time into a date and
//! a time attribute. Unrecognized fields are ignored. A date that fails to
//! parse aborts the whole mapping.
//!
//! ```
//! use endo_map::map_fields;
//! use endo_model::{AttributeTag, FieldMap};
//!
//! let fields: FieldMap = [("PatID", "P001"), ("PatBirth", "01/01/1980")]
//!     .into_iter()
//!     .collect();
//! let record = map_fields(&fields).unwrap();
//! assert_eq!(record.text(AttributeTag::PatientId), Some("P001"));
//! ```

#![deny(unsafe_code)]

pub mod dates;
mod error;
mod mapper;
pub mod rules;

pub use error::{MappingError, Result};
pub use mapper::{AttributeMapper, map_fields};
pub use rules::{FieldRule, rule_for};
