//! Word and letter counts.
//!
//! Words are whitespace-separated runs. Letters are the non-whitespace
//! characters left after stripping marks. Unique words are compared after
//! full search normalization, so spellings that differ only in marks or Alef
//! form count once.

use std::collections::HashSet;

use crate::analysis::{normalize_for_search, strip_diacritics};
use crate::corpus::Script;
use crate::corpus::verse::Verse;
use crate::error::Result;

use super::Mushaf;

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn letter_count(text: &str) -> usize {
    strip_diacritics(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .count()
}

fn unique_words<'a, I>(verses: I) -> usize
where
    I: IntoIterator<Item = &'a Verse>,
{
    let mut words = HashSet::new();
    for verse in verses {
        let normalized = normalize_for_search(&verse.text);
        words.extend(normalized.split_whitespace().map(str::to_string));
    }
    words.len()
}

impl Mushaf {
    /// Words in a chapter.
    pub fn word_count(&self, chapter: u16, script: Script) -> Result<usize> {
        Self::require_chapter(chapter)?;
        Ok(self
            .text(script)
            .chapter(chapter)
            .iter()
            .map(|verse| word_count(&verse.text))
            .sum())
    }

    /// Letters in a chapter, marks and whitespace excluded.
    pub fn letter_count(&self, chapter: u16, script: Script) -> Result<usize> {
        Self::require_chapter(chapter)?;
        Ok(self
            .text(script)
            .chapter(chapter)
            .iter()
            .map(|verse| letter_count(&verse.text))
            .sum())
    }

    pub fn total_word_count(&self, script: Script) -> usize {
        self.text(script).iter().map(|verse| word_count(&verse.text)).sum()
    }

    pub fn total_letter_count(&self, script: Script) -> usize {
        self.text(script).iter().map(|verse| letter_count(&verse.text)).sum()
    }

    /// Distinct normalized words across the whole text.
    pub fn unique_word_count(&self, script: Script) -> usize {
        unique_words(self.text(script).iter())
    }

    /// Distinct normalized words in a chapter.
    pub fn unique_word_count_in(&self, chapter: u16, script: Script) -> Result<usize> {
        Self::require_chapter(chapter)?;
        Ok(unique_words(self.text(script).chapter(chapter)))
    }
}
