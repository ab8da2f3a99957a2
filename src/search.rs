//! Searching the verse text and highlighting what was found.

pub mod engine;
pub mod highlight;
pub mod result;

pub use engine::{SearchEngine, SearchScope, TranslationSearcher};
pub use highlight::{HighlightConfig, Highlighter, highlight_match};
pub use result::{MatchRecord, TranslationMatch};
