//! Search result records.

use serde::{Deserialize, Serialize};

use crate::corpus::translation::TranslationEdition;
use crate::metadata::VersePosition;

/// A verse that matched a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub chapter: u16,
    pub verse: u16,
    /// The verse text as stored, marks included.
    pub text: String,
    /// Transliterated chapter name, e.g. "Al-Fatiha".
    pub chapter_name: String,
    /// The term as the caller supplied it.
    pub term: String,
}

impl MatchRecord {
    pub fn position(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.verse)
    }
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{} - {}", self.chapter_name, self.chapter, self.verse, self.text)
    }
}

/// A translated verse that matched a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMatch {
    pub chapter: u16,
    pub verse: u16,
    pub text: String,
    pub chapter_name: String,
    pub term: String,
    pub edition: TranslationEdition,
}

impl TranslationMatch {
    pub fn position(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.verse)
    }
}

impl std::fmt::Display for TranslationMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{} [{}] - {}",
            self.chapter_name, self.chapter, self.verse, self.edition, self.text
        )
    }
}
