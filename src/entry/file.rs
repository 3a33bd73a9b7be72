//! Local filesystem entries
//!
//! Wraps platform metadata and augments it with backend-resolved owner and
//! group names. Numeric ids are never resolved here, so they are reported as
//! unknown.

use chrono::{DateTime, FixedOffset, Local};
use log::{debug, warn};
use std::fs::Metadata;
use std::path::{Component, Path};

use super::descriptor::DirEntry;
use super::mode::EntryMode;
use crate::config::ListingConfig;
use crate::error::EntryError;

/// Entry backed by `std::fs::Metadata`
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: String,
    size: i64,
    mod_time: DateTime<FixedOffset>,
    mode: EntryMode,
    owner: String,
    group: String,
}

impl FileEntry {
    /// Builds an entry from already-fetched metadata
    pub fn from_metadata(
        name: impl Into<String>,
        metadata: &Metadata,
        owner: impl Into<String>,
        group: impl Into<String>,
        config: &ListingConfig,
    ) -> Self {
        let name = name.into();

        let mod_time = match metadata.modified() {
            Ok(time) => DateTime::<Local>::from(time).fixed_offset(),
            Err(e) => {
                warn!("No modification time for {}: {}", name, e);
                DateTime::<Local>::from(std::time::UNIX_EPOCH).fixed_offset()
            }
        };

        Self {
            size: clamp_len(metadata.len()),
            mod_time,
            mode: mode_of(metadata, config),
            owner: owner.into(),
            group: group.into(),
            name,
        }
    }

    /// Stats a single path without following a final symlink.
    ///
    /// Owner and group come from the configured defaults.
    pub async fn load(path: &Path, config: &ListingConfig) -> Result<Self, EntryError> {
        let name = entry_name(path)?;
        let metadata = tokio::fs::symlink_metadata(path).await?;

        debug!("Loaded metadata for {} ({})", path.display(), name);

        Ok(Self::from_metadata(
            name,
            &metadata,
            config.default_owner.clone(),
            config.default_group.clone(),
            config,
        ))
    }
}

impl DirEntry for FileEntry {
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
        None
    }

    fn gid(&self) -> Option<i64> {
        None
    }
}

/// Lengths beyond `i64::MAX` are clamped rather than wrapped
fn clamp_len(len: u64) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Final path component used as the display name; `.` and `..` are kept literally
fn entry_name(path: &Path) -> Result<String, EntryError> {
    match path.components().next_back() {
        Some(Component::CurDir) => Ok(".".to_string()),
        Some(Component::ParentDir) => Ok("..".to_string()),
        Some(Component::Normal(name)) => Ok(name.to_string_lossy().into_owned()),
        _ => Err(EntryError::InvalidName(path.display().to_string())),
    }
}

#[cfg(unix)]
fn mode_of(metadata: &Metadata, _config: &ListingConfig) -> EntryMode {
    use std::os::unix::fs::MetadataExt;

    EntryMode::from_raw(metadata.mode())
}

#[cfg(not(unix))]
fn mode_of(metadata: &Metadata, config: &ListingConfig) -> EntryMode {
    use super::mode::EntryKind;

    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    let mut perm = if kind == EntryKind::Dir {
        config.fallback_dir_mode
    } else {
        config.fallback_mode
    };
    if metadata.permissions().readonly() {
        perm &= !0o222;
    }

    EntryMode::new(kind, perm)
}
