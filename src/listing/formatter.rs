//! Listing formatter
//!
//! Renders an ordered slice of entries into NLST, LIST or MLSD bytes. Every
//! record ends with CRLF. Entries are emitted in the order given and are not
//! validated or escaped.
//!
//! LIST times are shown in each entry's own offset; MLSD `modify` facts are
//! always UTC.

use chrono::Utc;
use log::debug;

use super::format::ListFormat;
use super::padding::lpad;
use crate::entry::DirEntry;

const CRLF: &str = "\r\n";
const SIZE_WIDTH: usize = 12;
const DETAILED_TIME_LAYOUT: &str = " %b %e %H:%M ";
const FACT_TIME_LAYOUT: &str = "%Y%m%d%H%M%S";

/// Borrowing formatter over one listing's entries
#[derive(Debug, Clone, Copy)]
pub struct ListFormatter<'a, E: DirEntry> {
    entries: &'a [E],
}

impl<'a, E: DirEntry> ListFormatter<'a, E> {
    pub fn new(entries: &'a [E]) -> Self {
        Self { entries }
    }

    /// Renders the entries in the requested encoding
    pub fn render(&self, format: ListFormat) -> Vec<u8> {
        let bytes = match format {
            ListFormat::Short => self.short(),
            ListFormat::Detailed => self.detailed(),
            ListFormat::Rfc3659 => self.rfc3659(),
        };
        debug!(
            "Rendered {} entries as {} listing ({} bytes)",
            self.entries.len(),
            format,
            bytes.len()
        );
        bytes
    }

    /// One name per line
    pub fn short(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in self.entries {
            out.push_str(entry.name());
            out.push_str(CRLF);
        }
        out.into_bytes()
    }

    /// `ls -l` style lines: mode, link count, owner, group, size, time, name
    pub fn detailed(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in self.entries {
            out.push_str(&detailed_line(entry));
        }
        out.into_bytes()
    }

    /// RFC3659 fact lines
    pub fn rfc3659(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in self.entries {
            out.push_str(&facts_line(entry));
        }
        out.into_bytes()
    }
}

fn detailed_line<E: DirEntry>(entry: &E) -> String {
    format!(
        "{} 1 {} {} {}{}{}{}",
        entry.mode(),
        entry.owner(),
        entry.group(),
        lpad(&entry.size().to_string(), SIZE_WIDTH),
        entry.mod_time().format(DETAILED_TIME_LAYOUT),
        entry.name(),
        CRLF
    )
}

/// `cdir`/`pdir` depend only on the entry's own name
fn fact_kind<E: DirEntry>(entry: &E) -> (&'static str, &'static str) {
    if !entry.mode().is_dir() {
        return ("file", "size");
    }
    let kind = match entry.name() {
        "." => "cdir",
        ".." => "pdir",
        _ => "dir",
    };
    (kind, "sizd")
}

fn facts_line<E: DirEntry>(entry: &E) -> String {
    let (kind, size_fact) = fact_kind(entry);

    let mut line = format!(
        "type={};{}={};modify={};UNIX.mode={:04o};",
        kind,
        size_fact,
        entry.size(),
        entry.mod_time().with_timezone(&Utc).format(FACT_TIME_LAYOUT),
        entry.mode().perm()
    );

    // uid and gid facts are joined without a separator
    if let Some(uid) = entry.uid() {
        line.push_str(&format!("UNIX.uid={}", uid));
    }
    if let Some(gid) = entry.gid() {
        line.push_str(&format!("UNIX.gid={}", gid));
    }

    line.push(' ');
    line.push_str(entry.name());
    line.push_str(CRLF);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryMode, VirtualEntry};
    use chrono::{FixedOffset, TimeZone};

    fn sample_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, 15, 4, 5).unwrap()
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_short_lists_names_in_order() {
        let entries = vec![
            VirtualEntry::file("b.txt", 1, sample_time()),
            VirtualEntry::dir("a", 0, sample_time()),
        ];
        let out = text(ListFormatter::new(&entries).short());
        assert_eq!(out, "b.txt\r\na\r\n");
    }

    #[test]
    fn test_detailed_line_layout() {
        let entries = vec![
            VirtualEntry::file("readme.txt", 123, sample_time()).with_owner("alice", "staff"),
        ];
        let out = text(ListFormatter::new(&entries).detailed());
        assert_eq!(
            out,
            "-rw-r--r-- 1 alice staff          123 Mar  2 15:04 readme.txt\r\n"
        );
    }

    #[test]
    fn test_detailed_two_digit_day() {
        let when = Utc.with_ymd_and_hms(1999, 12, 25, 9, 7, 0).unwrap();
        let entries = vec![VirtualEntry::dir("old", 4096, when).with_owner("root", "wheel")];
        let out = text(ListFormatter::new(&entries).detailed());
        assert_eq!(
            out,
            "drwxr-xr-x 1 root wheel         4096 Dec 25 09:07 old\r\n"
        );
    }

    #[test]
    fn test_facts_for_file_with_ids() {
        let entries = vec![
            VirtualEntry::file("notes.md", 42, sample_time()).with_ids(Some(501), Some(20)),
        ];
        let out = text(ListFormatter::new(&entries).rfc3659());
        assert_eq!(
            out,
            "type=file;size=42;modify=20240302150405;UNIX.mode=0644;UNIX.uid=501UNIX.gid=20 notes.md\r\n"
        );
    }

    #[test]
    fn test_facts_directory_kinds() {
        let entries = vec![
            VirtualEntry::dir(".", 0, sample_time()),
            VirtualEntry::dir("..", 0, sample_time()),
            VirtualEntry::dir("pub", 4096, sample_time()),
        ];
        let out = text(ListFormatter::new(&entries).rfc3659());
        let lines: Vec<&str> = out.split_terminator("\r\n").collect();
        assert!(lines[0].starts_with("type=cdir;sizd=0;"));
        assert!(lines[1].starts_with("type=pdir;sizd=0;"));
        assert!(lines[2].starts_with("type=dir;sizd=4096;"));
        assert!(lines[2].ends_with("UNIX.mode=0755; pub"));
    }

    #[test]
    fn test_facts_dot_named_file_is_still_file() {
        let entries = vec![VirtualEntry::file(".", 3, sample_time())];
        let out = text(ListFormatter::new(&entries).rfc3659());
        assert!(out.starts_with("type=file;size=3;"));
    }

    #[test]
    fn test_facts_mode_omits_special_bits() {
        let entries = vec![
            VirtualEntry::file("tool", 9, sample_time()).with_mode(EntryMode::file(0o4755)),
        ];
        let formatter = ListFormatter::new(&entries);
        let facts = text(formatter.rfc3659());
        assert!(facts.contains("UNIX.mode=0755;"));

        // the ls -l column still shows setuid
        let detailed = text(formatter.detailed());
        assert!(detailed.starts_with("-rwsr-xr-x "));
    }

    #[test]
    fn test_detailed_keeps_entry_offset_and_facts_use_utc() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let when = plus_two.with_ymd_and_hms(2024, 3, 2, 15, 4, 5).unwrap();
        let entries = vec![VirtualEntry::file("local.txt", 1, when).with_owner("o", "g")];
        let formatter = ListFormatter::new(&entries);

        let detailed = text(formatter.detailed());
        assert!(detailed.contains(" Mar  2 15:04 local.txt"));

        let facts = text(formatter.rfc3659());
        assert!(facts.contains("modify=20240302130405;"));
    }

    #[test]
    fn test_render_dispatches() {
        let entries = vec![VirtualEntry::file("x", 1, sample_time())];
        let formatter = ListFormatter::new(&entries);
        assert_eq!(formatter.render(ListFormat::Short), formatter.short());
        assert_eq!(formatter.render(ListFormat::Detailed), formatter.detailed());
        assert_eq!(formatter.render(ListFormat::Rfc3659), formatter.rfc3659());
    }
}
