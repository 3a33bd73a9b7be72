//! RAX FTP listing
//!
//! Renders directory entries as NLST, LIST and MLSD/MLST output for an FTP
//! server. Formatting is pure; reading entries and sending bytes live in the
//! `entry` adapters and `transfer` respectively.

pub mod config;
pub mod entry;
pub mod error;
pub mod listing;
pub mod transfer;
pub mod utils;

pub use crate::config::ListingConfig;
pub use entry::{DirEntry, EntryKind, EntryMode, FileEntry, VirtualEntry};
pub use error::{EntryError, ListingError, TransferError};
pub use listing::{ListFormat, ListFormatter};
pub use transfer::send_listing;
