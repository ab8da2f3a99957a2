//! Verse references such as `2:255` or `2:1-5`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MushafError, Result};
use crate::metadata::{TOTAL_CHAPTERS, VersePosition};

static REFERENCE_PATTERN: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*:\s*(\d+)(?:\s*-\s*(\d+))?$"));

/// A parsed reference: one verse, or a range of verses within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseReference {
    pub chapter: u16,
    pub verse: u16,
    /// Last verse of a range; `None` for a single verse.
    pub end_verse: Option<u16>,
}

impl VerseReference {
    /// Parse `chapter:verse` or `chapter:start-end`.
    ///
    /// The chapter must be 1-114, verses start at 1 and a range must not run
    /// backwards. Whether the verses exist is checked on lookup, not here.
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(MushafError::invalid_reference(
                "reference cannot be empty",
            ));
        }

        let pattern = REFERENCE_PATTERN
            .as_ref()
            .map_err(|e| MushafError::invalid_reference(e.to_string()))?;
        let captures = pattern.captures(reference).ok_or_else(|| {
            MushafError::invalid_reference(format!(
                "'{reference}'. Expected 'chapter:verse' or 'chapter:start-end'"
            ))
        })?;

        let number = |index: usize, what: &str| -> Result<u16> {
            let digits = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            digits
                .parse::<u16>()
                .map_err(|_| MushafError::invalid_reference(format!("invalid {what} '{digits}'")))
        };

        let chapter = number(1, "chapter")?;
        if !(1..=TOTAL_CHAPTERS).contains(&chapter) {
            return Err(MushafError::invalid_reference(format!(
                "chapter {chapter} is outside 1-{TOTAL_CHAPTERS}"
            )));
        }

        let verse = number(2, "verse")?;
        if verse == 0 {
            return Err(MushafError::invalid_reference("verse numbers start at 1"));
        }

        let end_verse = match captures.get(3) {
            Some(_) => {
                let end = number(3, "end verse")?;
                if end < verse {
                    return Err(MushafError::invalid_reference(format!(
                        "end verse {end} is before start verse {verse}"
                    )));
                }
                Some(end)
            }
            None => None,
        };

        Ok(VerseReference {
            chapter,
            verse,
            end_verse,
        })
    }

    pub fn is_range(&self) -> bool {
        self.end_verse.is_some()
    }

    /// First verse of the reference.
    pub fn start(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.verse)
    }

    /// Last verse of the reference; the start for a single verse.
    pub fn end(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.end_verse.unwrap_or(self.verse))
    }
}

impl FromStr for VerseReference {
    type Err = MushafError;

    fn from_str(s: &str) -> Result<Self> {
        VerseReference::parse(s)
    }
}

impl std::fmt::Display for VerseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end_verse {
            Some(end) => write!(f, "{}:{}-{}", self.chapter, self.verse, end),
            None => write!(f, "{}:{}", self.chapter, self.verse),
        }
    }
}
