//! Parts, prostration verses and opening letters.

use crate::error::{MushafError, Result};
use crate::metadata::opening_letters::{self, OPENING_LETTERS};
use crate::metadata::part::{self, PARTS};
use crate::metadata::prostration::{self, PROSTRATIONS};
use crate::metadata::{OpeningLetters, Part, ProstrationKind, ProstrationVerse, VersePosition};

use super::Mushaf;

impl Mushaf {
    // Parts

    /// Part (juz) by number (1-30).
    pub fn part(&self, number: u16) -> Result<Part> {
        part::by_number(number)
            .copied()
            .ok_or_else(|| MushafError::part_not_found(number))
    }

    pub fn part_opt(&self, number: u16) -> Option<Part> {
        part::by_number(number).copied()
    }

    pub fn parts(&self) -> Vec<Part> {
        PARTS.to_vec()
    }

    /// Part containing a verse, or `None` for a position outside the corpus.
    pub fn part_number(&self, chapter: u16, verse: u16) -> Option<u16> {
        part::containing(VersePosition::new(chapter, verse)).map(|part| part.number)
    }

    pub fn is_valid_part(&self, number: u16) -> bool {
        part::by_number(number).is_some()
    }

    // Prostration verses

    pub fn prostrations(&self) -> Vec<ProstrationVerse> {
        PROSTRATIONS.to_vec()
    }

    pub fn obligatory_prostrations(&self) -> Vec<ProstrationVerse> {
        self.prostrations_of_kind(ProstrationKind::Obligatory)
    }

    pub fn recommended_prostrations(&self) -> Vec<ProstrationVerse> {
        self.prostrations_of_kind(ProstrationKind::Recommended)
    }

    fn prostrations_of_kind(&self, kind: ProstrationKind) -> Vec<ProstrationVerse> {
        PROSTRATIONS
            .iter()
            .filter(|prostration| prostration.kind == kind)
            .copied()
            .collect()
    }

    pub fn is_prostration_verse(&self, chapter: u16, verse: u16) -> bool {
        prostration::at(VersePosition::new(chapter, verse)).is_some()
    }

    pub fn prostration(&self, chapter: u16, verse: u16) -> Option<ProstrationVerse> {
        prostration::at(VersePosition::new(chapter, verse)).copied()
    }

    // Opening letters

    /// The 29 chapters that open with disconnected letters.
    pub fn opening_letters(&self) -> Vec<OpeningLetters> {
        OPENING_LETTERS.to_vec()
    }

    pub fn has_opening_letters(&self, chapter: u16) -> bool {
        opening_letters::for_chapter(chapter).is_some()
    }

    pub fn opening_letters_for(&self, chapter: u16) -> Option<OpeningLetters> {
        opening_letters::for_chapter(chapter).copied()
    }
}
