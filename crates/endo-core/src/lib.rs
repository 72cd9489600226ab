//! Endoscopic capture conversion.
//!
//! [`EndoscopicConversion`] reads a manifest, maps its fields to a typed
//! DICOM attribute record and resolves its media file names against the
//! manifest's directory. Either every product is returned or an error is.
//!
//! ```no_run
//! use endo_core::EndoscopicConversion;
//!
//! let conversion = EndoscopicConversion::from_manifest("/data/study7/procedure.xml").unwrap();
//! for video in conversion.video_files() {
//!     println!("{}", video.display());
//! }
//! ```

#![deny(unsafe_code)]

pub mod conversion;
mod error;
mod options;
pub mod paths;

pub use conversion::EndoscopicConversion;
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;
pub use paths::{manifest_base_dir, resolve, resolve_media};
