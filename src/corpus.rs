//! Verse text: records, stores, sources and configuration.
//!
//! The metadata tables are compiled in; verse text is not. A [`TextSource`]
//! supplies the records for each script variant and translation edition, and
//! the stores built from them are read-only once constructed.

pub mod config;
pub mod source;
pub mod store;
pub mod translation;
pub mod verse;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MushafError;

pub use config::MushafConfig;
pub use source::{DirectorySource, MemorySource, TextSource};
pub use store::{ChapterTable, Located, TextStore, TranslationStore};
pub use translation::{TranslatedVerse, TranslationEdition, TranslationEntry, TranslationInfo};
pub use verse::{Verse, VerseEntry};

/// Script variant of the verse text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Plain letters without marks.
    Simple,
    /// Fully marked script.
    #[default]
    Uthmani,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Simple, Script::Uthmani];

    /// File stem of the text resource for this script.
    pub fn resource_name(self) -> &'static str {
        match self {
            Script::Simple => "quran_simple",
            Script::Uthmani => "quran_uthmani",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Script::Simple => 0,
            Script::Uthmani => 1,
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Script::Simple => write!(f, "simple"),
            Script::Uthmani => write!(f, "uthmani"),
        }
    }
}

impl FromStr for Script {
    type Err = MushafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Script::Simple),
            "uthmani" => Ok(Script::Uthmani),
            other => Err(MushafError::invalid_argument(format!(
                "Unknown script '{other}'. Expected 'simple' or 'uthmani'."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_default_and_names() {
        assert_eq!(Script::default(), Script::Uthmani);
        assert_eq!(Script::Simple.resource_name(), "quran_simple");
        assert_eq!(Script::Uthmani.to_string(), "uthmani");
    }

    #[test]
    fn test_script_from_str() {
        assert_eq!(" Simple ".parse::<Script>().unwrap(), Script::Simple);
        assert_eq!("UTHMANI".parse::<Script>().unwrap(), Script::Uthmani);
        assert!("indopak".parse::<Script>().is_err());
    }

    #[test]
    fn test_script_serde() {
        assert_eq!(serde_json::to_string(&Script::Simple).unwrap(), "\"simple\"");
        let script: Script = serde_json::from_str("\"uthmani\"").unwrap();
        assert_eq!(script, Script::Uthmani);
    }
}
