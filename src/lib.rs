//! # Mushaf
//!
//! Read-only access to the text and structural metadata of the Quran
//! (114 chapters, 6,236 verses), with diacritics-insensitive Arabic search.
//!
//! ## Features
//!
//! - Arabic normalization: mark stripping, Alef-form unification, position maps
//! - Search that ignores marks, Alef forms and case, in corpus order
//! - Highlighting of matches in the original, fully marked text
//! - Chapter, part, manzil, page, hizb quarter and prostration metadata
//! - Verse references (`2:255`, `2:1-5`), translations, statistics
//! - Text loaded lazily, once, from pluggable sources
//!
//! ```
//! use mushaf::prelude::*;
//!
//! let mushaf = Mushaf::new(MushafConfig::default());
//! assert_eq!(mushaf.chapter(112).unwrap().verse_count, 4);
//! assert_eq!(normalize_for_search("أَحَدٌ"), "احد");
//! ```

pub mod analysis;
pub mod corpus;
pub mod error;
pub mod metadata;
pub mod mushaf;
pub mod reference;
pub mod search;

pub use mushaf::Mushaf;

pub mod prelude {
    pub use crate::Mushaf;
    pub use crate::analysis::{ArabicText, normalize_for_search, strip_diacritics};
    pub use crate::corpus::{MushafConfig, Script, TranslationEdition};
    pub use crate::error::{MushafError, Result};
    pub use crate::metadata::ChapterName;
    pub use crate::reference::VerseReference;
    pub use crate::search::{MatchRecord, SearchScope, highlight_match};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
