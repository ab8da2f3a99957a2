//! Verse records.

use serde::{Deserialize, Serialize};

use crate::metadata::VersePosition;

use super::store::Located;

/// A verse as served by the text store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// Chapter number (1-114).
    pub chapter: u16,
    /// Verse number within the chapter, starting at 1.
    pub verse: u16,
    /// Raw text, possibly carrying combining marks.
    pub text: String,
    /// Part (juz) number, 0 when the source did not provide it.
    pub part: u16,
    /// Page of the standard Madani print, 0 when unknown.
    pub page: u16,
    /// Hizb quarter (1-240), 0 when unknown.
    pub hizb_quarter: u16,
    /// Set once at load time from the prostration table.
    pub has_prostration: bool,
}

impl Verse {
    pub fn position(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.verse)
    }
}

impl Located for Verse {
    fn position(&self) -> VersePosition {
        Verse::position(self)
    }
}

impl std::fmt::Display for Verse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const PREVIEW_CHARS: usize = 50;
        let preview: String = self.text.chars().take(PREVIEW_CHARS).collect();
        if preview.len() < self.text.len() {
            write!(f, "[{}:{}] {}...", self.chapter, self.verse, preview)
        } else {
            write!(f, "[{}:{}] {}", self.chapter, self.verse, preview)
        }
    }
}

/// One record of a verse text file.
///
/// Keys are accepted in camelCase (`hizbQuarter`) and PascalCase
/// (`HizbQuarter`), the two spellings the published data files use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    #[serde(alias = "Surah")]
    pub surah: u16,
    #[serde(alias = "Ayah")]
    pub ayah: u16,
    #[serde(alias = "Text", default)]
    pub text: Option<String>,
    #[serde(alias = "Juz", default)]
    pub juz: u16,
    #[serde(alias = "Page", default)]
    pub page: u16,
    #[serde(rename = "hizbQuarter", alias = "HizbQuarter", default)]
    pub hizb_quarter: u16,
}

impl VerseEntry {
    /// An entry with text only, the rest left unknown.
    pub fn new<S: Into<String>>(surah: u16, ayah: u16, text: S) -> Self {
        VerseEntry {
            surah,
            ayah,
            text: Some(text.into()),
            juz: 0,
            page: 0,
            hizb_quarter: 0,
        }
    }

    /// Set the part, page and hizb quarter.
    pub fn with_layout(mut self, juz: u16, page: u16, hizb_quarter: u16) -> Self {
        self.juz = juz;
        self.page = page;
        self.hizb_quarter = hizb_quarter;
        self
    }
}

impl From<VerseEntry> for Verse {
    fn from(entry: VerseEntry) -> Self {
        Verse {
            chapter: entry.surah,
            verse: entry.ayah,
            text: entry.text.unwrap_or_default(),
            part: entry.juz,
            page: entry.page,
            hizb_quarter: entry.hizb_quarter,
            has_prostration: false,
        }
    }
}
