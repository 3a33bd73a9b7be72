//! Transfer module
//!
//! Hands rendered listings to a data connection or any other async writer.

pub mod operations;

pub use operations::send_listing;
