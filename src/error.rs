//! Error types for the Mushaf library.
//!
//! All fallible operations return [`MushafError`]. The variants form a small
//! closed set so callers can tell "the chapter you asked for does not exist"
//! apart from "the chapter exists but nothing matched".
//!
//! # Examples
//!
//! ```
//! use mushaf::error::{MushafError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MushafError::chapter_not_found(115))
//! }
//!
//! match example_operation() {
//!     Err(e) if e.is_not_found() => eprintln!("missing: {e}"),
//!     Err(e) => eprintln!("Error: {e}"),
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::corpus::Script;
use crate::corpus::translation::TranslationEdition;

/// The main error type for Mushaf operations.
#[derive(Error, Debug)]
pub enum MushafError {
    /// A chapter number outside 1-114.
    #[error("Chapter {number} was not found. Valid range is 1-114.")]
    ChapterNotFound { number: u16 },

    /// No chapter carries the given name.
    #[error("Chapter with name '{name}' was not found.")]
    ChapterNameNotFound { name: String },

    /// The chapter exists but has no such verse (or no text is loaded).
    #[error("Verse {verse} was not found in chapter {chapter}.")]
    VerseNotFound { chapter: u16, verse: u16 },

    /// A part (juz) number outside 1-30.
    #[error("Part {number} was not found. Valid range is 1-30.")]
    PartNotFound { number: u16 },

    /// A page, hizb quarter or manzil number outside its range.
    #[error("{scope} {value} is out of range. Valid range is 1-{max}.")]
    OutOfRange {
        scope: &'static str,
        value: u16,
        max: u16,
    },

    /// A verse reference string that does not parse.
    #[error("Invalid verse reference: {0}")]
    InvalidReference(String),

    /// An argument that is structurally unusable (e.g. a blank name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Verse text for the script is not provided by the source.
    #[error("Text for script '{script}' is not available.")]
    TextUnavailable { script: Script },

    /// Translation data for the edition is not loaded.
    #[error("Translation '{edition}' is not available.")]
    TranslationUnavailable { edition: TranslationEdition },

    /// I/O errors while reading corpus files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization errors while reading corpus files.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with MushafError.
pub type Result<T> = std::result::Result<T, MushafError>;

impl MushafError {
    /// Create a new chapter-not-found error.
    pub fn chapter_not_found(number: u16) -> Self {
        MushafError::ChapterNotFound { number }
    }

    /// Create a new chapter-name-not-found error.
    pub fn chapter_name_not_found<S: Into<String>>(name: S) -> Self {
        MushafError::ChapterNameNotFound { name: name.into() }
    }

    /// Create a new verse-not-found error.
    pub fn verse_not_found(chapter: u16, verse: u16) -> Self {
        MushafError::VerseNotFound { chapter, verse }
    }

    /// Create a new part-not-found error.
    pub fn part_not_found(number: u16) -> Self {
        MushafError::PartNotFound { number }
    }

    /// Create a new out-of-range error.
    pub fn out_of_range(scope: &'static str, value: u16, max: u16) -> Self {
        MushafError::OutOfRange { scope, value, max }
    }

    /// Create a new invalid reference error.
    pub fn invalid_reference<S: Into<String>>(msg: S) -> Self {
        MushafError::InvalidReference(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MushafError::InvalidArgument(msg.into())
    }

    /// Create a new text-unavailable error.
    pub fn text_unavailable(script: Script) -> Self {
        MushafError::TextUnavailable { script }
    }

    /// Create a new translation-unavailable error.
    pub fn translation_unavailable(edition: TranslationEdition) -> Self {
        MushafError::TranslationUnavailable { edition }
    }

    /// Whether this error reports a lookup that addressed nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MushafError::ChapterNotFound { .. }
                | MushafError::ChapterNameNotFound { .. }
                | MushafError::VerseNotFound { .. }
                | MushafError::PartNotFound { .. }
                | MushafError::OutOfRange { .. }
        )
    }
}
