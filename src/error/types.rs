//! Error types
//!
//! Defines domain-specific error types for entry adapters, transfers and configuration.

use std::fmt;
use std::io;

/// Errors raised while building entry descriptors from a backend
#[derive(Debug)]
pub enum EntryError {
    Io(io::Error),
    InvalidName(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Io(e) => write!(f, "IO error: {}", e),
            EntryError::InvalidName(p) => write!(f, "Cannot derive entry name from: {}", p),
        }
    }
}

impl std::error::Error for EntryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EntryError::Io(e) => Some(e),
            EntryError::InvalidName(_) => None,
        }
    }
}

impl From<io::Error> for EntryError {
    fn from(error: io::Error) -> Self {
        EntryError::Io(error)
    }
}

/// Errors raised while handing a rendered listing to the transport
#[derive(Debug)]
pub enum TransferError {
    WriteFailed(io::Error),
    FlushFailed(io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::WriteFailed(e) => write!(f, "Failed to write listing: {}", e),
            TransferError::FlushFailed(e) => write!(f, "Failed to flush listing: {}", e),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::WriteFailed(e) | TransferError::FlushFailed(e) => Some(e),
        }
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum ListingError {
    Entry(EntryError),
    Transfer(TransferError),
    Config(config::ConfigError),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::Entry(e) => write!(f, "Entry error: {}", e),
            ListingError::Transfer(e) => write!(f, "Transfer error: {}", e),
            ListingError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ListingError {}

impl From<EntryError> for ListingError {
    fn from(error: EntryError) -> Self {
        ListingError::Entry(error)
    }
}

impl From<TransferError> for ListingError {
    fn from(error: TransferError) -> Self {
        ListingError::Transfer(error)
    }
}

impl From<config::ConfigError> for ListingError {
    fn from(error: config::ConfigError) -> Self {
        ListingError::Config(error)
    }
}
