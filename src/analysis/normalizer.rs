//! Arabic text normalization for search.
//!
//! Normalization strips combining marks (tashkeel, Quranic annotation signs)
//! and folds the decorated Alef forms onto the plain letter, so that fully
//! marked script compares equal to simple script. All functions here are
//! total: they never fail and the empty string maps to itself.
//!
//! # Examples
//!
//! ```
//! use mushaf::analysis::normalizer::{normalize_for_search, strip_diacritics};
//!
//! assert_eq!(strip_diacritics("بِسْمِ"), "بسم");
//! assert_eq!(normalize_for_search("  إِيَّاكَ "), "اياك");
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Code point ranges treated as marks. Not a single contiguous block.
const MARK_RANGES: [RangeInclusive<char>; 5] = [
    '\u{064B}'..='\u{0655}', // tanween, short vowels, shadda, sukun, maddah, hamza marks
    '\u{0670}'..='\u{0670}', // superscript alef
    '\u{06D6}'..='\u{06ED}', // Quranic annotation signs
    '\u{0610}'..='\u{061A}', // honorific and small signs
    '\u{FE70}'..='\u{FE7F}', // presentation forms of the marks
];

const ALEF: char = '\u{0627}';
const ALEF_WITH_MADDA_ABOVE: char = '\u{0622}';
const ALEF_WITH_HAMZA_ABOVE: char = '\u{0623}';
const ALEF_WITH_HAMZA_BELOW: char = '\u{0625}';

/// Returns true if `c` is one of the marks removed by [`strip_diacritics`].
pub fn is_mark_character(c: char) -> bool {
    MARK_RANGES.iter().any(|range| range.contains(&c))
}

fn unify_alef(c: char) -> char {
    match c {
        ALEF_WITH_MADDA_ABOVE | ALEF_WITH_HAMZA_ABOVE | ALEF_WITH_HAMZA_BELOW => ALEF,
        other => other,
    }
}

/// Remove every mark character. Other characters, including Latin letters
/// and whitespace, pass through unchanged.
pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_mark_character(*c)).collect()
}

/// Position map from a stripped string back into its original.
///
/// Entry `i` is the byte offset in the original string of the character that
/// ended up at char position `i` of the stripped string. Offsets are strictly
/// increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMap {
    offsets: Vec<usize>,
}

impl IndexMap {
    /// Number of mapped characters (the stripped string's char count).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Original byte offset of stripped char `position`.
    pub fn original_offset(&self, position: usize) -> Option<usize> {
        self.offsets.get(position).copied()
    }

    /// The raw offsets, indexed by stripped char position.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

/// Like [`strip_diacritics`], but also records where each kept character
/// came from.
pub fn strip_diacritics_with_map(text: &str) -> (String, IndexMap) {
    let mut stripped = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());

    for (offset, c) in text.char_indices() {
        if !is_mark_character(c) {
            offsets.push(offset);
            stripped.push(c);
        }
    }

    (stripped, IndexMap { offsets })
}

/// Replace Alef with madda, hamza above and hamza below by plain Alef.
///
/// Each substitution is one char for one char, so char positions are kept.
pub fn unify_alef_forms(text: &str) -> String {
    text.chars().map(unify_alef).collect()
}

/// Strip marks, unify Alef forms and trim surrounding whitespace.
///
/// Idempotent: `normalize_for_search(&normalize_for_search(x)) == normalize_for_search(x)`.
pub fn normalize_for_search(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| !is_mark_character(*c))
        .map(unify_alef)
        .collect();

    folded.trim().to_string()
}

/// Normalization as methods, with absence propagated for `Option` inputs.
///
/// `str` yields `String`; `Option<T>` yields `Option<String>`, mapping `None`
/// to `None`.
///
/// ```
/// use mushaf::analysis::normalizer::ArabicText;
///
/// assert_eq!("أحد".unify_alef_forms(), "احد");
/// let missing: Option<&str> = None;
/// assert_eq!(missing.normalize_for_search(), None);
/// ```
pub trait ArabicText {
    type Output;
    type Mapped;

    fn strip_diacritics(&self) -> Self::Output;

    fn strip_diacritics_with_map(&self) -> Self::Mapped;

    fn unify_alef_forms(&self) -> Self::Output;

    fn normalize_for_search(&self) -> Self::Output;
}

impl ArabicText for str {
    type Output = String;
    type Mapped = (String, IndexMap);

    fn strip_diacritics(&self) -> String {
        strip_diacritics(self)
    }

    fn strip_diacritics_with_map(&self) -> (String, IndexMap) {
        strip_diacritics_with_map(self)
    }

    fn unify_alef_forms(&self) -> String {
        unify_alef_forms(self)
    }

    fn normalize_for_search(&self) -> String {
        normalize_for_search(self)
    }
}

impl<T: AsRef<str>> ArabicText for Option<T> {
    type Output = Option<String>;
    type Mapped = Option<(String, IndexMap)>;

    fn strip_diacritics(&self) -> Option<String> {
        self.as_ref().map(|text| strip_diacritics(text.as_ref()))
    }

    fn strip_diacritics_with_map(&self) -> Option<(String, IndexMap)> {
        self.as_ref().map(|text| strip_diacritics_with_map(text.as_ref()))
    }

    fn unify_alef_forms(&self) -> Option<String> {
        self.as_ref().map(|text| unify_alef_forms(text.as_ref()))
    }

    fn normalize_for_search(&self) -> Option<String> {
        self.as_ref().map(|text| normalize_for_search(text.as_ref()))
    }
}
