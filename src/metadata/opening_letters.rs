//! Chapters opening with disconnected letters (muqatta'at).

use serde::Serialize;

/// Number of chapters that open with disconnected letters.
pub const TOTAL_OPENING_LETTER_CHAPTERS: usize = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpeningLetters {
    pub chapter: u16,
    /// Transliteration, e.g. "Alif Lam Mim".
    pub letters: &'static str,
    pub arabic_letters: &'static str,
}

impl std::fmt::Display for OpeningLetters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chapter {}: {} ({})", self.chapter, self.arabic_letters, self.letters)
    }
}

const fn letters(chapter: u16, letters: &'static str, arabic_letters: &'static str) -> OpeningLetters {
    OpeningLetters {
        chapter,
        letters,
        arabic_letters,
    }
}

pub static OPENING_LETTERS: [OpeningLetters; TOTAL_OPENING_LETTER_CHAPTERS] = [
    letters(2, "Alif Lam Mim", "الم"),
    letters(3, "Alif Lam Mim", "الم"),
    letters(7, "Alif Lam Mim Sad", "المص"),
    letters(10, "Alif Lam Ra", "الر"),
    letters(11, "Alif Lam Ra", "الر"),
    letters(12, "Alif Lam Ra", "الر"),
    letters(13, "Alif Lam Mim Ra", "المر"),
    letters(14, "Alif Lam Ra", "الر"),
    letters(15, "Alif Lam Ra", "الر"),
    letters(19, "Kaf Ha Ya Ain Sad", "كهيعص"),
    letters(20, "Ta Ha", "طه"),
    letters(26, "Ta Sin Mim", "طسم"),
    letters(27, "Ta Sin", "طس"),
    letters(28, "Ta Sin Mim", "طسم"),
    letters(29, "Alif Lam Mim", "الم"),
    letters(30, "Alif Lam Mim", "الم"),
    letters(31, "Alif Lam Mim", "الم"),
    letters(32, "Alif Lam Mim", "الم"),
    letters(36, "Ya Sin", "يس"),
    letters(38, "Sad", "ص"),
    letters(40, "Ha Mim", "حم"),
    letters(41, "Ha Mim", "حم"),
    letters(42, "Ha Mim Ain Sin Qaf", "حم عسق"),
    letters(43, "Ha Mim", "حم"),
    letters(44, "Ha Mim", "حم"),
    letters(45, "Ha Mim", "حم"),
    letters(46, "Ha Mim", "حم"),
    letters(50, "Qaf", "ق"),
    letters(68, "Nun", "ن"),
];

pub fn for_chapter(chapter: u16) -> Option<&'static OpeningLetters> {
    OPENING_LETTERS.iter().find(|entry| entry.chapter == chapter)
}
