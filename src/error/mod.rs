//! Error handling
//!
//! Defines error types for the collaborators around the listing formatter.
//! The formatter itself is total and has no error type.

pub mod types;

pub use types::*;
