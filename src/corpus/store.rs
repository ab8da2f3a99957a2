//! Dense, read-only verse tables.
//!
//! Chapters are numbered 1..=114 without gaps, so records are kept in one
//! vector per chapter, indexed by `chapter - 1`, each sorted by verse number.

use log::{debug, warn};

use crate::metadata::prostration::PROSTRATIONS;
use crate::metadata::{TOTAL_CHAPTERS, VersePosition};

use super::translation::TranslatedVerse;
use super::verse::{Verse, VerseEntry};

/// Anything addressable by (chapter, verse).
pub trait Located {
    fn position(&self) -> VersePosition;
}

/// Records grouped per chapter, in corpus order.
#[derive(Debug, Clone)]
pub struct ChapterTable<T> {
    chapters: Vec<Vec<T>>,
    len: usize,
}

/// Verse text for one script variant.
pub type TextStore = ChapterTable<Verse>;

/// Verse text for one translation edition.
pub type TranslationStore = ChapterTable<TranslatedVerse>;

impl<T> Default for ChapterTable<T> {
    fn default() -> Self {
        ChapterTable {
            chapters: (0..TOTAL_CHAPTERS).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }
}

impl<T: Located> ChapterTable<T> {
    /// Build a table from records in any order.
    ///
    /// Records outside chapters 1-114 or with verse 0 are dropped. When a
    /// position repeats, the first record wins.
    pub fn from_records<I: IntoIterator<Item = T>>(records: I) -> Self {
        let mut table = Self::default();

        for record in records {
            let position = record.position();
            match table.slot_mut(position.chapter) {
                Some(slot) if position.verse > 0 => slot.push(record),
                _ => warn!("Dropping record with invalid position {position}"),
            }
        }

        for chapter in table.chapters.iter_mut() {
            chapter.sort_by_key(|record| record.position().verse);
            let before = chapter.len();
            chapter.dedup_by_key(|record| record.position().verse);
            if chapter.len() != before {
                warn!("Dropped {} duplicate verse records", before - chapter.len());
            }
        }

        table.len = table.chapters.iter().map(Vec::len).sum();
        debug!("Built chapter table with {} records", table.len);
        table
    }

    /// Records of one chapter; empty for an unknown chapter or missing text.
    pub fn chapter(&self, chapter: u16) -> &[T] {
        chapter
            .checked_sub(1)
            .and_then(|index| self.chapters.get(index as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A single record.
    pub fn get(&self, chapter: u16, verse: u16) -> Option<&T> {
        let records = self.chapter(chapter);
        records
            .binary_search_by_key(&verse, |record| record.position().verse)
            .ok()
            .map(|index| &records[index])
    }

    /// All records in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chapters.iter().flatten()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no text is loaded at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn slot_mut(&mut self, chapter: u16) -> Option<&mut Vec<T>> {
        chapter
            .checked_sub(1)
            .and_then(|index| self.chapters.get_mut(index as usize))
    }
}

impl ChapterTable<Verse> {
    /// Build a text store from file entries and set the prostration flags.
    pub fn from_entries<I: IntoIterator<Item = VerseEntry>>(entries: I) -> Self {
        let mut store = Self::from_records(entries.into_iter().map(Verse::from));

        for prostration in PROSTRATIONS.iter() {
            let position = prostration.position;
            let Some(slot) = store.slot_mut(position.chapter) else {
                continue;
            };
            if let Ok(index) = slot.binary_search_by_key(&position.verse, |v| v.verse) {
                slot[index].has_prostration = true;
            }
        }

        store
    }
}
