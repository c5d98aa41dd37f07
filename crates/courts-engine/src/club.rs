//! Closed registry of supported clubs and their GotCourts identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::CourtsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Club {
    Mythenquai,
    Lengg,
}

impl Club {
    pub const ALL: [Club; 2] = [Club::Mythenquai, Club::Lengg];

    /// Name used in commands and report headers.
    pub fn name(self) -> &'static str {
        match self {
            Club::Mythenquai => "mythenquai",
            Club::Lengg => "lengg",
        }
    }

    /// Numeric club id in the GotCourts public API.
    pub fn api_id(self) -> u32 {
        match self {
            Club::Mythenquai => 16,
            Club::Lengg => 19,
        }
    }

    /// Comma-joined list of valid names, for diagnostics.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-sensitive lookup by name.
impl FromStr for Club {
    type Err = CourtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|club| club.name() == s)
            .ok_or_else(|| CourtsError::UnknownClub {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}
