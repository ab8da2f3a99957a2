//! Translation editions and their catalog.

use serde::{Deserialize, Serialize};

use crate::metadata::VersePosition;

use super::store::Located;

/// A translation (or transliteration) edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum TranslationEdition {
    EnglishSaheehInternational = 1,
    EnglishYusufAli = 2,
    EnglishPickthall = 3,
    /// The Clear Quran by Talal Itani.
    EnglishClearQuran = 4,
    EnglishMaududi = 5,
    EnglishTransliteration = 10,
    UrduJalandhry = 101,
    UrduJunagarhi = 102,
    UrduMaududi = 103,
}

impl TranslationEdition {
    /// Every edition, in catalog order.
    pub const ALL: [TranslationEdition; 9] = [
        TranslationEdition::EnglishSaheehInternational,
        TranslationEdition::EnglishYusufAli,
        TranslationEdition::EnglishPickthall,
        TranslationEdition::EnglishClearQuran,
        TranslationEdition::EnglishMaududi,
        TranslationEdition::EnglishTransliteration,
        TranslationEdition::UrduJalandhry,
        TranslationEdition::UrduJunagarhi,
        TranslationEdition::UrduMaududi,
    ];

    /// Position of the edition in [`TranslationEdition::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|edition| *edition == self)
            .unwrap_or_default()
    }

    /// Catalog entry for the edition.
    pub fn info(self) -> &'static TranslationInfo {
        &CATALOG[self.index()]
    }
}

impl std::fmt::Display for TranslationEdition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().api_identifier)
    }
}

/// Catalog entry describing an edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslationInfo {
    pub edition: TranslationEdition,
    /// Identifier on the upstream text service, e.g. "en.sahih".
    pub api_identifier: &'static str,
    /// File stem of the data file, e.g. "en_sahih".
    pub resource_name: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub language: &'static str,
    /// "ltr" or "rtl".
    pub direction: &'static str,
    /// "translation" or "transliteration".
    pub kind: &'static str,
}

impl std::fmt::Display for TranslationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.language, self.author)
    }
}

#[allow(clippy::too_many_arguments)]
const fn info(
    edition: TranslationEdition,
    api_identifier: &'static str,
    resource_name: &'static str,
    name: &'static str,
    author: &'static str,
    language: &'static str,
    direction: &'static str,
    kind: &'static str,
) -> TranslationInfo {
    TranslationInfo {
        edition,
        api_identifier,
        resource_name,
        name,
        author,
        language,
        direction,
        kind,
    }
}

use TranslationEdition::*;

/// Catalog of editions, indexed like [`TranslationEdition::ALL`].
pub static CATALOG: [TranslationInfo; 9] = [
    info(EnglishSaheehInternational, "en.sahih", "en_sahih", "Saheeh International", "Saheeh International", "English", "ltr", "translation"),
    info(EnglishYusufAli, "en.yusufali", "en_yusufali", "Abdullah Yusuf Ali", "Abdullah Yusuf Ali", "English", "ltr", "translation"),
    info(EnglishPickthall, "en.pickthall", "en_pickthall", "Mohammed Marmaduke Pickthall", "Mohammed Marmaduke William Pickthall", "English", "ltr", "translation"),
    info(EnglishClearQuran, "en.itani", "en_itani", "Clear Quran - Talal Itani", "Talal Itani", "English", "ltr", "translation"),
    info(EnglishMaududi, "en.maududi", "en_maududi", "Abul Ala Maududi", "Abul Ala Maududi", "English", "ltr", "translation"),
    info(EnglishTransliteration, "en.transliteration", "en_transliteration", "English Transliteration", "English Transliteration", "English", "ltr", "transliteration"),
    info(UrduJalandhry, "ur.jalandhry", "ur_jalandhry", "Fateh Muhammad Jalandhry", "Fateh Muhammad Jalandhry", "Urdu", "rtl", "translation"),
    info(UrduJunagarhi, "ur.junagarhi", "ur_junagarhi", "Muhammad Junagarhi", "Muhammad Junagarhi", "Urdu", "rtl", "translation"),
    info(UrduMaududi, "ur.maududi", "ur_maududi", "Abul A'ala Maududi", "Abul A'ala Maududi", "Urdu", "rtl", "translation"),
];

/// Catalog entries whose language contains `language`, ignoring case.
pub fn by_language(language: &str) -> Vec<TranslationInfo> {
    let language = language.trim().to_lowercase();
    if language.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|info| info.language.to_lowercase().contains(&language))
        .copied()
        .collect()
}

/// A translated verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedVerse {
    pub chapter: u16,
    pub verse: u16,
    pub text: String,
    pub edition: TranslationEdition,
}

impl Located for TranslatedVerse {
    fn position(&self) -> VersePosition {
        VersePosition::new(self.chapter, self.verse)
    }
}

/// One record of a translation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    #[serde(alias = "Surah")]
    pub surah: u16,
    #[serde(alias = "Ayah")]
    pub ayah: u16,
    #[serde(alias = "Text", default)]
    pub text: Option<String>,
}

impl TranslationEntry {
    pub fn new<S: Into<String>>(surah: u16, ayah: u16, text: S) -> Self {
        TranslationEntry {
            surah,
            ayah,
            text: Some(text.into()),
        }
    }

    pub fn into_verse(self, edition: TranslationEdition) -> TranslatedVerse {
        TranslatedVerse {
            chapter: self.surah,
            verse: self.ayah,
            text: self.text.unwrap_or_default(),
            edition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_editions() {
        for (index, edition) in TranslationEdition::ALL.iter().enumerate() {
            assert_eq!(edition.index(), index);
            assert_eq!(edition.info().edition, *edition);
        }
    }

    #[test]
    fn test_edition_codes() {
        assert_eq!(TranslationEdition::EnglishTransliteration as u16, 10);
        assert_eq!(TranslationEdition::UrduMaududi as u16, 103);
        assert_eq!(TranslationEdition::EnglishClearQuran.to_string(), "en.itani");
    }

    #[test]
    fn test_by_language() {
        assert_eq!(by_language("english").len(), 6);
        assert_eq!(by_language(" URDU ").len(), 3);
        assert!(by_language("").is_empty());
        assert!(by_language("French").is_empty());
    }

    #[test]
    fn test_entry_into_verse() {
        let verse = TranslationEntry::new(1, 1, "In the name of Allah")
            .into_verse(TranslationEdition::EnglishSaheehInternational);
        assert_eq!(verse.chapter, 1);
        assert_eq!(verse.edition, TranslationEdition::EnglishSaheehInternational);
    }
}
