//! Directory listing output
//!
//! Turns entry descriptors into the byte streams sent for NLST, LIST and
//! MLSD/MLST.

mod format;
mod formatter;
mod padding;

pub use format::ListFormat;
pub use formatter::ListFormatter;
pub use padding::lpad;
