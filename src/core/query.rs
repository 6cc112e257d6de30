//! Search sanitizing and the region filter.

use std::fmt;
use std::str::FromStr;

/// Strip everything that is not an ASCII letter.
///
/// `"Ger-many 2"` becomes `"Germany"`; `"123 !"` becomes `""`, which callers
/// treat as "no search".
pub fn sanitize_query(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Coarse geographic category used to narrow the list.
///
/// `All` is the sentinel that means "no filter" and maps to a full-directory
/// load instead of a region request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    Antarctic,
}

impl Region {
    /// Picker order.
    pub const ALL: [Region; 7] = [
        Region::All,
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
        Region::Antarctic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::All => "All",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::Antarctic => "Antarctic",
        }
    }

    /// Path segment for `/region/{region}`. `None` for the `All` sentinel.
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            Region::All => None,
            Region::Africa => Some("africa"),
            Region::Americas => Some("americas"),
            Region::Asia => Some("asia"),
            Region::Europe => Some("europe"),
            Region::Oceania => Some("oceania"),
            Region::Antarctic => Some("antarctic"),
        }
    }

    fn position(self) -> usize {
        Region::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Cycles to the next region (wraps around).
    pub fn next(self) -> Region {
        Region::ALL[(self.position() + 1) % Region::ALL.len()]
    }

    /// Cycles to the previous region (wraps around).
    pub fn prev(self) -> Region {
        let len = Region::ALL.len();
        Region::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        // "America" is accepted as a spelling of the Americas
        if wanted.eq_ignore_ascii_case("america") {
            return Ok(Region::Americas);
        }
        Region::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown region '{wanted}'"))
    }
}
