//! Translation lookups and search.

use crate::corpus::translation::{self, CATALOG, TranslatedVerse, TranslationEdition, TranslationInfo};
use crate::corpus::store::TranslationStore;
use crate::error::{MushafError, Result};
use crate::search::engine::{SearchScope, TranslationSearcher};
use crate::search::result::TranslationMatch;

use super::Mushaf;

impl Mushaf {
    /// The loaded store of `edition`, or an error when it has no data.
    fn loaded_translation(&self, edition: TranslationEdition) -> Result<&TranslationStore> {
        let store = self.translation_store(edition);
        if store.is_empty() {
            return Err(MushafError::translation_unavailable(edition));
        }
        Ok(store)
    }

    /// One translated verse.
    pub fn translation(&self, chapter: u16, verse: u16, edition: TranslationEdition) -> Result<TranslatedVerse> {
        Self::require_chapter(chapter)?;
        self.loaded_translation(edition)?
            .get(chapter, verse)
            .cloned()
            .ok_or_else(|| MushafError::verse_not_found(chapter, verse))
    }

    /// Every translated verse of a chapter.
    pub fn translations(&self, chapter: u16, edition: TranslationEdition) -> Result<Vec<TranslatedVerse>> {
        Self::require_chapter(chapter)?;
        Ok(self.loaded_translation(edition)?.chapter(chapter).to_vec())
    }

    /// Translated verses `start..=end` of a chapter.
    pub fn translation_range(
        &self,
        chapter: u16,
        start: u16,
        end: u16,
        edition: TranslationEdition,
    ) -> Result<Vec<TranslatedVerse>> {
        Self::require_chapter(chapter)?;
        if start == 0 || end < start {
            return Err(MushafError::invalid_argument(format!(
                "invalid verse range {start}-{end}"
            )));
        }
        Ok(self
            .loaded_translation(edition)?
            .chapter(chapter)
            .iter()
            .filter(|verse| (start..=end).contains(&verse.verse))
            .cloned()
            .collect())
    }

    /// The full edition catalog, loaded or not.
    pub fn available_translations(&self) -> Vec<TranslationInfo> {
        CATALOG.to_vec()
    }

    /// Catalog entries whose language contains `language`, ignoring case.
    pub fn translations_for_language(&self, language: &str) -> Vec<TranslationInfo> {
        translation::by_language(language)
    }

    /// Whether data for `edition` is loaded.
    pub fn is_translation_available(&self, edition: TranslationEdition) -> bool {
        !self.translation_store(edition).is_empty()
    }

    /// Case-insensitive search of one edition's text.
    pub fn search_translation<'t, T>(
        &self,
        term: T,
        scope: SearchScope,
        edition: TranslationEdition,
    ) -> Result<Vec<TranslationMatch>>
    where
        T: Into<Option<&'t str>>,
    {
        let term = term.into();
        if term.is_none_or(|term| term.trim().is_empty()) {
            return Ok(Vec::new());
        }
        if let SearchScope::Chapter(chapter) = scope {
            Self::require_chapter(chapter)?;
        }
        let store = self.loaded_translation(edition)?;
        TranslationSearcher::new(store, edition)
            .parallel(self.config.parallel_search)
            .search(term, scope)
    }
}
