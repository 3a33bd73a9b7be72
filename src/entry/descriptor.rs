//! Directory entry capability
//!
//! Every storage backend exposes its entries through [`DirEntry`]. The
//! listing formatter reads entries only through these accessors and never
//! mutates them.

use chrono::{DateTime, FixedOffset};

use super::mode::EntryMode;

/// Raw id value backends use for "unknown"
pub const UNKNOWN_ID: i64 = -1;

/// Read-only metadata of one directory entry.
///
/// Implementations must be pure: repeated calls return the same values.
pub trait DirEntry {
    /// Display name, without path separators
    fn name(&self) -> &str;

    /// Byte length for files; backend-defined for directories
    fn size(&self) -> i64;

    /// Modification time in the offset the backend reports it in
    fn mod_time(&self) -> DateTime<FixedOffset>;

    fn mode(&self) -> EntryMode;

    fn owner(&self) -> &str;

    fn group(&self) -> &str;

    /// Numeric owner id, `None` when the backend cannot tell
    fn uid(&self) -> Option<i64>;

    /// Numeric group id, `None` when the backend cannot tell
    fn gid(&self) -> Option<i64>;
}

/// Maps a backend id using the `-1` convention to an optional id
pub fn id_from_sentinel(raw: i64) -> Option<i64> {
    if raw == UNKNOWN_ID { None } else { Some(raw) }
}

impl<T: DirEntry + ?Sized> DirEntry for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size(&self) -> i64 {
        (**self).size()
    }

    fn mod_time(&self) -> DateTime<FixedOffset> {
        (**self).mod_time()
    }

    fn mode(&self) -> EntryMode {
        (**self).mode()
    }

    fn owner(&self) -> &str {
        (**self).owner()
    }

    fn group(&self) -> &str {
        (**self).group()
    }

    fn uid(&self) -> Option<i64> {
        (**self).uid()
    }

    fn gid(&self) -> Option<i64> {
        (**self).gid()
    }
}

impl<T: DirEntry + ?Sized> DirEntry for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size(&self) -> i64 {
        (**self).size()
    }

    fn mod_time(&self) -> DateTime<FixedOffset> {
        (**self).mod_time()
    }

    fn mode(&self) -> EntryMode {
        (**self).mode()
    }

    fn owner(&self) -> &str {
        (**self).owner()
    }

    fn group(&self) -> &str {
        (**self).group()
    }

    fn uid(&self) -> Option<i64> {
        (**self).uid()
    }

    fn gid(&self) -> Option<i64> {
        (**self).gid()
    }
}
