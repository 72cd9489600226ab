//! Manifest loading for endoscopic captures.
//!
//! A [`ManifestSource`] turns a manifest file into a [`ParsedManifest`]: the
//! field map and the relative media file lists. [`XmlManifestSource`] reads
//! the XML layout written by capture stations.

#![deny(unsafe_code)]

mod error;
mod source;
pub mod xml;

pub use error::{ManifestError, Result};
pub use source::{ManifestSource, ParsedManifest};
pub use xml::XmlManifestSource;
