//! Entry type and permission bits
//!
//! Decodes POSIX `st_mode` values and renders them the way `ls -l` does.

use std::fmt;

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Permission and special bits carried by an entry
pub const PERM_MASK: u32 = 0o7777;

/// Kind of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    NamedPipe,
    Socket,
    BlockDevice,
    CharDevice,
    Other,
}

impl EntryKind {
    /// Leading character of the `ls -l` permission string
    pub fn type_char(self) -> char {
        match self {
            EntryKind::File => '-',
            EntryKind::Dir => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::NamedPipe => 'p',
            EntryKind::Socket => 's',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Other => '?',
        }
    }

    fn from_format_bits(bits: u32) -> Self {
        match bits & S_IFMT {
            S_IFREG => EntryKind::File,
            S_IFDIR => EntryKind::Dir,
            S_IFLNK => EntryKind::Symlink,
            S_IFIFO => EntryKind::NamedPipe,
            S_IFSOCK => EntryKind::Socket,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFCHR => EntryKind::CharDevice,
            _ => EntryKind::Other,
        }
    }
}

/// Entry kind plus its low twelve permission bits.
///
/// `Display` yields the 10-character `drwxr-xr-x` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryMode {
    kind: EntryKind,
    perm: u32,
}

impl EntryMode {
    pub fn new(kind: EntryKind, perm: u32) -> Self {
        Self {
            kind,
            perm: perm & PERM_MASK,
        }
    }

    pub fn file(perm: u32) -> Self {
        Self::new(EntryKind::File, perm)
    }

    pub fn dir(perm: u32) -> Self {
        Self::new(EntryKind::Dir, perm)
    }

    /// Decodes a raw POSIX `st_mode`
    pub fn from_raw(st_mode: u32) -> Self {
        Self::new(EntryKind::from_format_bits(st_mode), st_mode)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Permission bits including setuid, setgid and sticky
    pub fn octal(&self) -> u32 {
        self.perm
    }

    /// The nine rwx bits only
    pub fn perm(&self) -> u32 {
        self.perm & 0o777
    }
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(10);
        s.push(self.kind.type_char());

        // (shift, special bit, set+exec, set without exec)
        let triplets = [
            (6, S_ISUID, 's', 'S'),
            (3, S_ISGID, 's', 'S'),
            (0, S_ISVTX, 't', 'T'),
        ];
        for (shift, special, with_exec, without_exec) in triplets {
            let bits = (self.perm >> shift) & 7;
            s.push(if bits & 4 != 0 { 'r' } else { '-' });
            s.push(if bits & 2 != 0 { 'w' } else { '-' });
            let exec = bits & 1 != 0;
            s.push(match (self.perm & special != 0, exec) {
                (true, true) => with_exec,
                (true, false) => without_exec,
                (false, true) => 'x',
                (false, false) => '-',
            });
        }

        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file_string() {
        assert_eq!(EntryMode::file(0o644).to_string(), "-rw-r--r--");
    }

    #[test]
    fn test_directory_from_raw() {
        let mode = EntryMode::from_raw(0o040755);
        assert!(mode.is_dir());
        assert_eq!(mode.to_string(), "drwxr-xr-x");
        assert_eq!(mode.octal(), 0o755);
    }

    #[test]
    fn test_other_kinds_use_ls_letters() {
        assert_eq!(EntryMode::from_raw(0o120777).to_string(), "lrwxrwxrwx");
        assert_eq!(EntryMode::from_raw(0o010600).to_string(), "prw-------");
        assert_eq!(EntryMode::from_raw(0o140755).to_string(), "srwxr-xr-x");
        assert_eq!(EntryMode::from_raw(0o060660).to_string(), "brw-rw----");
        assert_eq!(EntryMode::from_raw(0o020620).to_string(), "crw--w----");
        assert_eq!(EntryMode::from_raw(0o000644).to_string(), "?rw-r--r--");
    }

    #[test]
    fn test_special_bits_replace_exec_slot() {
        assert_eq!(EntryMode::file(0o4755).to_string(), "-rwsr-xr-x");
        assert_eq!(EntryMode::file(0o2644).to_string(), "-rw-r-Sr--");
        assert_eq!(EntryMode::dir(0o1777).to_string(), "drwxrwxrwt");
        assert_eq!(EntryMode::dir(0o1776).to_string(), "drwxrwxrwT");
        assert_eq!(EntryMode::file(0o4755).octal(), 0o4755);
        assert_eq!(EntryMode::file(0o4755).perm(), 0o755);
        assert_eq!(EntryMode::dir(0o1777).perm(), 0o777);
    }

    #[test]
    fn test_always_ten_characters() {
        for raw in [0o100000, 0o047777, 0o120000, 0o007777] {
            assert_eq!(EntryMode::from_raw(raw).to_string().len(), 10);
        }
    }
}
