//! Plain-data entries for virtual and in-memory backends

use chrono::{DateTime, FixedOffset};

use super::descriptor::{DirEntry, id_from_sentinel};
use super::mode::EntryMode;

/// Entry whose metadata is supplied directly by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    name: String,
    size: i64,
    mod_time: DateTime<FixedOffset>,
    mode: EntryMode,
    owner: String,
    group: String,
    uid: Option<i64>,
    gid: Option<i64>,
}

impl VirtualEntry {
    pub fn new(
        name: impl Into<String>,
        size: i64,
        mod_time: impl Into<DateTime<FixedOffset>>,
        mode: EntryMode,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mod_time: mod_time.into(),
            mode,
            owner: String::new(),
            group: String::new(),
            uid: None,
            gid: None,
        }
    }

    /// Regular file with `rw-r--r--` permissions
    pub fn file(
        name: impl Into<String>,
        size: i64,
        mod_time: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self::new(name, size, mod_time, EntryMode::file(0o644))
    }

    /// Directory with `rwxr-xr-x` permissions
    pub fn dir(
        name: impl Into<String>,
        size: i64,
        mod_time: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self::new(name, size, mod_time, EntryMode::dir(0o755))
    }

    pub fn with_mode(mut self, mode: EntryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.group = group.into();
        self
    }

    pub fn with_ids(mut self, uid: Option<i64>, gid: Option<i64>) -> Self {
        self.uid = uid;
        self.gid = gid;
        self
    }

    /// Sets ids from raw values where `-1` means unknown
    pub fn with_raw_ids(self, uid: i64, gid: i64) -> Self {
        self.with_ids(id_from_sentinel(uid), id_from_sentinel(gid))
    }
}

impl DirEntry for VirtualEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> i64 {
        self.size
    }

    fn mod_time(&self) -> DateTime<FixedOffset> {
        self.mod_time
    }

    fn mode(&self) -> EntryMode {
        self.mode
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn uid(&self) -> Option<i64> {
        self.uid
    }

    fn gid(&self) -> Option<i64> {
        self.gid
    }
}
