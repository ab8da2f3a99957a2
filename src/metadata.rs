//! Fixed structural metadata of the corpus.
//!
//! Every table here is static data: chapters, parts, manzils, prostration
//! positions and the chapters that open with disconnected letters. Nothing
//! in this module touches verse text.

pub mod chapter;
pub mod chapter_name;
pub mod manzil;
pub mod opening_letters;
pub mod part;
pub mod prostration;

use serde::{Deserialize, Serialize};

pub use chapter::{Chapter, RevelationType, TOTAL_CHAPTERS, TOTAL_VERSES};
pub use chapter_name::ChapterName;
pub use manzil::{Manzil, TOTAL_MANZILS};
pub use opening_letters::OpeningLetters;
pub use part::{Part, TOTAL_PARTS};
pub use prostration::{ProstrationKind, ProstrationVerse, TOTAL_PROSTRATIONS};

/// Number of pages in the standard Madani print.
pub const TOTAL_PAGES: u16 = 604;

/// Number of hizb quarters.
pub const TOTAL_HIZB_QUARTERS: u16 = 240;

/// The opening formula in fully marked script.
pub const OPENING_FORMULA_UTHMANI: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";

/// The opening formula in simple script.
pub const OPENING_FORMULA_SIMPLE: &str = "بسم الله الرحمن الرحيم";

/// A (chapter, verse) pair. Orders by chapter, then verse, which is corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersePosition {
    pub chapter: u16,
    pub verse: u16,
}

impl VersePosition {
    pub const fn new(chapter: u16, verse: u16) -> Self {
        VersePosition { chapter, verse }
    }
}

impl std::fmt::Display for VersePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}
