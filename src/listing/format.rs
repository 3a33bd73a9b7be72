//! Listing encodings and the commands that select them

use std::fmt;
use std::str::FromStr;

/// One of the three listing encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListFormat {
    /// Bare names (NLST)
    Short,
    /// `ls -l` style lines (LIST)
    Detailed,
    /// RFC3659 facts (MLSD, MLST)
    Rfc3659,
}

impl ListFormat {
    /// Maps an FTP listing command verb to its encoding, ignoring case.
    ///
    /// Returns `None` for verbs that do not produce a listing.
    pub fn from_command(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NLST" => Some(ListFormat::Short),
            "LIST" => Some(ListFormat::Detailed),
            "MLSD" | "MLST" => Some(ListFormat::Rfc3659),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListFormat::Short => "short",
            ListFormat::Detailed => "detailed",
            ListFormat::Rfc3659 => "rfc3659",
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(format) = ListFormat::from_command(s) {
            return Ok(format);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ListFormat::Short),
            "detailed" => Ok(ListFormat::Detailed),
            "rfc3659" => Ok(ListFormat::Rfc3659),
            other => Err(format!("unknown listing format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command() {
        assert_eq!(ListFormat::from_command("NLST"), Some(ListFormat::Short));
        assert_eq!(ListFormat::from_command("list"), Some(ListFormat::Detailed));
        assert_eq!(ListFormat::from_command(" Mlsd "), Some(ListFormat::Rfc3659));
        assert_eq!(ListFormat::from_command("MLST"), Some(ListFormat::Rfc3659));
        assert_eq!(ListFormat::from_command("RETR"), None);
    }

    #[test]
    fn test_from_str_accepts_names_and_verbs() {
        assert_eq!("detailed".parse::<ListFormat>(), Ok(ListFormat::Detailed));
        assert_eq!("NLST".parse::<ListFormat>(), Ok(ListFormat::Short));
        assert_eq!("RFC3659".parse::<ListFormat>(), Ok(ListFormat::Rfc3659));
        assert!("wide".parse::<ListFormat>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [ListFormat::Short, ListFormat::Detailed, ListFormat::Rfc3659] {
            assert_eq!(format.to_string().parse::<ListFormat>(), Ok(format));
        }
    }
}
