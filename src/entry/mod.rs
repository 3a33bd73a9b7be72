//! Entry descriptors
//!
//! The read-only view of directory entries consumed by the listing formatter,
//! plus adapters for the local filesystem and for virtual backends.

mod descriptor;
mod file;
mod mode;
mod virtual_entry;

pub use descriptor::{DirEntry, UNKNOWN_ID, id_from_sentinel};
pub use file::FileEntry;
pub use mode::{EntryKind, EntryMode, PERM_MASK};
pub use virtual_entry::VirtualEntry;
