//! Library components of the endo2dcm command-line tool.

pub mod events;
pub mod logging;
pub mod render;
