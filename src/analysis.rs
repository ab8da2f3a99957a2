//! Text analysis for Mushaf.
//!
//! This module provides the Arabic normalization used for matching and the
//! char-level case-insensitive matcher shared by search and highlighting.

pub mod matcher;
pub mod normalizer;

pub use normalizer::{
    ArabicText, IndexMap, is_mark_character, normalize_for_search, strip_diacritics,
    strip_diacritics_with_map, unify_alef_forms,
};
