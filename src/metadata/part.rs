//! Part (juz) boundaries.

use serde::Serialize;

use super::VersePosition;

/// Total number of parts.
pub const TOTAL_PARTS: u16 = 30;

/// One of the 30 parts of the standard Madani print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Part {
    /// Part number (1-30).
    pub number: u16,
    /// First verse of the part.
    pub start: VersePosition,
    /// Last verse of the part (inclusive).
    pub end: VersePosition,
    /// Arabic name, taken from the opening words.
    pub arabic_name: &'static str,
}

impl Part {
    /// Whether the verse lies inside this part.
    pub fn contains(&self, position: VersePosition) -> bool {
        self.start <= position && position <= self.end
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Part {}: {} ({} - {})",
            self.number, self.arabic_name, self.start, self.end
        )
    }
}

const fn part(
    number: u16,
    start_chapter: u16,
    start_verse: u16,
    end_chapter: u16,
    end_verse: u16,
    arabic_name: &'static str,
) -> Part {
    Part {
        number,
        start: VersePosition::new(start_chapter, start_verse),
        end: VersePosition::new(end_chapter, end_verse),
        arabic_name,
    }
}

/// All parts in order. `PARTS[n - 1]` is part `n`.
pub static PARTS: [Part; TOTAL_PARTS as usize] = [
    part(1, 1, 1, 2, 141, "الم"),
    part(2, 2, 142, 2, 252, "سيقول"),
    part(3, 2, 253, 3, 92, "تلك الرسل"),
    part(4, 3, 93, 4, 23, "لن تنالوا"),
    part(5, 4, 24, 4, 147, "والمحصنات"),
    part(6, 4, 148, 5, 81, "لا يحب الله"),
    part(7, 5, 82, 6, 110, "وإذا سمعوا"),
    part(8, 6, 111, 7, 87, "ولو أننا"),
    part(9, 7, 88, 8, 40, "قال الملأ"),
    part(10, 8, 41, 9, 92, "واعلموا"),
    part(11, 9, 93, 11, 5, "يعتذرون"),
    part(12, 11, 6, 12, 52, "وما من دابة"),
    part(13, 12, 53, 14, 52, "وما أبرئ"),
    part(14, 15, 1, 16, 128, "ربما"),
    part(15, 17, 1, 18, 74, "سبحان الذي"),
    part(16, 18, 75, 20, 135, "قال ألم"),
    part(17, 21, 1, 22, 78, "اقترب للناس"),
    part(18, 23, 1, 25, 20, "قد أفلح"),
    part(19, 25, 21, 27, 55, "وقال الذين"),
    part(20, 27, 56, 29, 45, "أمن خلق"),
    part(21, 29, 46, 33, 30, "اتل ما أوحي"),
    part(22, 33, 31, 36, 27, "ومن يقنت"),
    part(23, 36, 28, 39, 31, "وما لي"),
    part(24, 39, 32, 41, 46, "فمن أظلم"),
    part(25, 41, 47, 45, 37, "إليه يرد"),
    part(26, 46, 1, 51, 30, "حم"),
    part(27, 51, 31, 57, 29, "قال فما خطبكم"),
    part(28, 58, 1, 66, 12, "قد سمع"),
    part(29, 67, 1, 77, 50, "تبارك الذي"),
    part(30, 78, 1, 114, 6, "عم"),
];

/// Part by number, or `None` outside 1-30.
pub fn by_number(number: u16) -> Option<&'static Part> {
    number.checked_sub(1).and_then(|index| PARTS.get(index as usize))
}

/// The part containing the verse, if the position is inside the corpus.
pub fn containing(position: VersePosition) -> Option<&'static Part> {
    PARTS.iter().find(|part| part.contains(position))
}
