//! The library entry point.
//!
//! A [`Mushaf`] answers every lookup: the static metadata tables directly,
//! verse text and translations through stores that are loaded from a
//! [`TextSource`] the first time they are needed. A store that fails to load
//! is logged and left empty, so metadata keeps working without text.

mod navigation;
mod random;
mod statistics;
mod structure;
mod translations;

use std::sync::{LazyLock, OnceLock};

use log::{info, warn};

use crate::analysis::normalizer::ArabicText;
use crate::corpus::config::MushafConfig;
use crate::corpus::source::{DirectorySource, TextSource};
use crate::corpus::store::{TextStore, TranslationStore};
use crate::corpus::translation::TranslationEdition;
use crate::corpus::verse::Verse;
use crate::corpus::Script;
use crate::error::{MushafError, Result};
use crate::metadata::chapter::{self, CHAPTERS, Chapter, RevelationType};
use crate::metadata::ChapterName;
use crate::metadata::part;
use crate::metadata::{OPENING_FORMULA_SIMPLE, OPENING_FORMULA_UTHMANI};
use crate::reference::VerseReference;
use crate::search::engine::{SearchEngine, SearchScope};
use crate::search::highlight::highlight_match;
use crate::search::result::MatchRecord;

static GLOBAL: LazyLock<Mushaf> = LazyLock::new(|| Mushaf::new(MushafConfig::from_env()));

/// Read-only access to the corpus text and its metadata.
///
/// Every list returned is a fresh `Vec` owned by the caller.
///
/// ```
/// use mushaf::Mushaf;
/// use mushaf::corpus::MushafConfig;
///
/// let mushaf = Mushaf::new(MushafConfig::default());
/// assert_eq!(mushaf.chapter(1).unwrap().english_name, "Al-Fatiha");
/// assert!(mushaf.chapter(115).is_err());
/// ```
#[derive(Debug)]
pub struct Mushaf {
    config: MushafConfig,
    source: Option<Box<dyn TextSource>>,
    texts: [OnceLock<TextStore>; Script::ALL.len()],
    translations: [OnceLock<TranslationStore>; TranslationEdition::ALL.len()],
}

impl Mushaf {
    /// Create an instance reading text from `config.data_dir`, if set.
    pub fn new(config: MushafConfig) -> Self {
        let source = config
            .data_dir
            .as_ref()
            .map(|dir| Box::new(DirectorySource::new(dir)) as Box<dyn TextSource>);
        Self::build(config, source)
    }

    /// Create an instance reading text from `source`.
    pub fn with_source<S: TextSource + 'static>(source: S, config: MushafConfig) -> Self {
        Self::build(config, Some(Box::new(source)))
    }

    fn build(config: MushafConfig, source: Option<Box<dyn TextSource>>) -> Self {
        Mushaf {
            config,
            source,
            texts: std::array::from_fn(|_| OnceLock::new()),
            translations: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// The process-wide instance, configured from the environment
    /// (see [`MushafConfig::from_env`]).
    pub fn global() -> &'static Mushaf {
        &GLOBAL
    }

    pub fn config(&self) -> &MushafConfig {
        &self.config
    }

    /// Text store of `script`, loaded on first use.
    pub(crate) fn text(&self, script: Script) -> &TextStore {
        self.texts[script.index()].get_or_init(|| self.load_text(script))
    }

    /// Translation store of `edition`, loaded on first use.
    pub(crate) fn translation_store(&self, edition: TranslationEdition) -> &TranslationStore {
        self.translations[edition.index()].get_or_init(|| self.load_translation(edition))
    }

    fn load_text(&self, script: Script) -> TextStore {
        let Some(source) = self.source.as_ref() else {
            info!("No text source configured, {script} text is unavailable");
            return TextStore::default();
        };

        match source.load_verses(script) {
            Ok(entries) => {
                let store = TextStore::from_entries(entries);
                info!("Loaded {} verses of {script} text", store.len());
                store
            }
            Err(e) => {
                warn!("Failed to load {script} text: {e}");
                TextStore::default()
            }
        }
    }

    fn load_translation(&self, edition: TranslationEdition) -> TranslationStore {
        let Some(source) = self.source.as_ref() else {
            return TranslationStore::default();
        };

        match source.load_translation(edition) {
            Ok(entries) => {
                let store = TranslationStore::from_records(
                    entries.into_iter().map(|entry| entry.into_verse(edition)),
                );
                info!("Loaded {} verses of translation {edition}", store.len());
                store
            }
            Err(e) => {
                warn!("Failed to load translation {edition}: {e}");
                TranslationStore::default()
            }
        }
    }

    fn require_chapter(number: u16) -> Result<&'static Chapter> {
        chapter::by_number(number).ok_or_else(|| MushafError::chapter_not_found(number))
    }

    // Chapters

    /// Chapter by number (1-114).
    pub fn chapter(&self, number: u16) -> Result<Chapter> {
        Self::require_chapter(number).copied()
    }

    /// Chapter by name constant. Never fails.
    pub fn chapter_named(&self, name: ChapterName) -> Chapter {
        *name.chapter()
    }

    /// Chapter by number, or `None` outside 1-114.
    pub fn chapter_opt(&self, number: u16) -> Option<Chapter> {
        chapter::by_number(number).copied()
    }

    /// Chapter by transliterated name, ignoring case (e.g. "al-baqarah").
    pub fn chapter_by_name(&self, name: &str) -> Result<Chapter> {
        if name.trim().is_empty() {
            return Err(MushafError::invalid_argument("chapter name cannot be blank"));
        }
        chapter::by_english_name(name)
            .copied()
            .ok_or_else(|| MushafError::chapter_name_not_found(name.trim()))
    }

    /// Chapter by transliterated name, or `None`.
    pub fn chapter_by_name_opt(&self, name: &str) -> Option<Chapter> {
        chapter::by_english_name(name).copied()
    }

    /// Chapter by Arabic name (e.g. "البقرة").
    pub fn chapter_by_arabic_name(&self, name: &str) -> Result<Chapter> {
        if name.trim().is_empty() {
            return Err(MushafError::invalid_argument("chapter name cannot be blank"));
        }
        chapter::by_arabic_name(name)
            .copied()
            .ok_or_else(|| MushafError::chapter_name_not_found(name.trim()))
    }

    /// All 114 chapters in order.
    pub fn chapters(&self) -> Vec<Chapter> {
        CHAPTERS.to_vec()
    }

    pub fn meccan_chapters(&self) -> Vec<Chapter> {
        self.chapters_of_type(RevelationType::Meccan)
    }

    pub fn medinan_chapters(&self) -> Vec<Chapter> {
        self.chapters_of_type(RevelationType::Medinan)
    }

    fn chapters_of_type(&self, revelation_type: RevelationType) -> Vec<Chapter> {
        CHAPTERS
            .iter()
            .filter(|chapter| chapter.revelation_type == revelation_type)
            .copied()
            .collect()
    }

    /// All chapters sorted by revelation order.
    pub fn chapters_by_revelation_order(&self) -> Vec<Chapter> {
        let mut chapters = self.chapters();
        chapters.sort_by_key(|chapter| chapter.revelation_order);
        chapters
    }

    /// Chapters with at least one verse in part `part` (1-30).
    pub fn chapters_in_part(&self, part: u16) -> Result<Vec<Chapter>> {
        if part::by_number(part).is_none() {
            return Err(MushafError::part_not_found(part));
        }
        Ok(CHAPTERS
            .iter()
            .filter(|chapter| chapter.spans_part(part))
            .copied()
            .collect())
    }

    pub fn is_valid_chapter(&self, number: u16) -> bool {
        chapter::by_number(number).is_some()
    }

    /// Whether a chapter carries this transliterated name.
    pub fn is_valid_chapter_name(&self, name: &str) -> bool {
        chapter::by_english_name(name).is_some()
    }

    /// `(number, transliterated name, Arabic name)` for chapters `start..=end`.
    pub fn chapter_names(&self, start: u16, end: u16) -> Vec<(u16, &'static str, &'static str)> {
        CHAPTERS
            .iter()
            .filter(|chapter| (start..=end).contains(&chapter.number))
            .map(|chapter| (chapter.number, chapter.english_name, chapter.arabic_name))
            .collect()
    }

    /// Number of verses in a chapter.
    pub fn verse_count(&self, number: u16) -> Result<u16> {
        Ok(Self::require_chapter(number)?.verse_count)
    }

    // Verses

    /// A single verse. Missing text reads as a missing verse.
    pub fn verse(&self, chapter: u16, verse: u16, script: Script) -> Result<Verse> {
        Self::require_chapter(chapter)?;
        self.text(script)
            .get(chapter, verse)
            .cloned()
            .ok_or_else(|| MushafError::verse_not_found(chapter, verse))
    }

    /// Every verse of a chapter; empty when no text is loaded.
    pub fn verses(&self, chapter: u16, script: Script) -> Result<Vec<Verse>> {
        Self::require_chapter(chapter)?;
        Ok(self.text(script).chapter(chapter).to_vec())
    }

    /// Verses `start..=end` of a chapter that are present in the text.
    pub fn verse_range(&self, chapter: u16, start: u16, end: u16, script: Script) -> Result<Vec<Verse>> {
        Self::require_chapter(chapter)?;
        if start == 0 || end < start {
            return Err(MushafError::invalid_argument(format!(
                "invalid verse range {start}-{end}"
            )));
        }
        Ok(self
            .text(script)
            .chapter(chapter)
            .iter()
            .filter(|verse| (start..=end).contains(&verse.verse))
            .cloned()
            .collect())
    }

    /// Parse a reference such as "2:255" or "2:1-5".
    pub fn parse_reference(&self, reference: &str) -> Result<VerseReference> {
        VerseReference::parse(reference)
    }

    /// The verse a reference starts at.
    pub fn verse_by_reference(&self, reference: &str, script: Script) -> Result<Verse> {
        let reference = VerseReference::parse(reference)?;
        self.verse(reference.chapter, reference.verse, script)
    }

    /// Every verse a reference covers. A single-verse reference must exist.
    pub fn verses_by_reference(&self, reference: &str, script: Script) -> Result<Vec<Verse>> {
        let reference = VerseReference::parse(reference)?;
        match reference.end_verse {
            Some(end) => self.verse_range(reference.chapter, reference.verse, end, script),
            None => Ok(vec![self.verse(reference.chapter, reference.verse, script)?]),
        }
    }

    /// Whether any text of `script` is loaded.
    pub fn is_text_available(&self, script: Script) -> bool {
        !self.text(script).is_empty()
    }

    /// The opening formula in the given script.
    pub fn opening_formula(&self, script: Script) -> &'static str {
        match script {
            Script::Simple => OPENING_FORMULA_SIMPLE,
            Script::Uthmani => OPENING_FORMULA_UTHMANI,
        }
    }

    // Search

    /// Search the verse text, ignoring marks, Alef forms and case.
    ///
    /// A blank or missing term gives no results and no error. A chapter scope
    /// outside 1-114 is [`MushafError::ChapterNotFound`].
    pub fn search<'t, T>(&self, term: T, scope: SearchScope, script: Script) -> Result<Vec<MatchRecord>>
    where
        T: Into<Option<&'t str>>,
    {
        let term = term.into();
        if term.normalize_for_search().is_none_or(|term| term.is_empty()) {
            return Ok(Vec::new());
        }
        if let SearchScope::Chapter(chapter) = scope {
            Self::require_chapter(chapter)?;
        }
        SearchEngine::new(self.text(script))
            .parallel(self.config.parallel_search)
            .search(term, scope)
    }

    /// Wrap the first match of `term` in `text`; see [`highlight_match`].
    pub fn highlight<F>(&self, text: &str, term: &str, wrapper: Option<F>) -> String
    where
        F: Fn(&str) -> String,
    {
        highlight_match(text, term, wrapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::source::MemorySource;
    use crate::corpus::verse::VerseEntry;

    fn mushaf() -> Mushaf {
        let source = MemorySource::new().with_verses(
            Script::Simple,
            vec![
                VerseEntry::new(1, 1, "بسم الله الرحمن الرحيم").with_layout(1, 1, 1),
                VerseEntry::new(1, 2, "الحمد لله رب العالمين").with_layout(1, 1, 1),
                VerseEntry::new(112, 2, "الله الصمد").with_layout(30, 604, 240),
            ],
        );
        Mushaf::with_source(source, MushafConfig::default())
    }

    #[test]
    fn test_chapter_lookups() {
        let mushaf = mushaf();
        assert_eq!(mushaf.chapter(2).unwrap().english_name, "Al-Baqarah");
        assert_eq!(mushaf.chapter_by_name(" al-baqarah ").unwrap().number, 2);
        assert_eq!(mushaf.chapter_by_arabic_name("البقرة").unwrap().number, 2);
        assert!(mushaf.chapter_opt(0).is_none());
        assert_eq!(mushaf.chapter_named(ChapterName::AlKahf).verse_count, 110);
        assert!(mushaf.chapter_by_name_opt("Nowhere").is_none());
        assert!(matches!(
            mushaf.chapter_by_name("Nowhere"),
            Err(MushafError::ChapterNameNotFound { .. })
        ));
        assert!(matches!(
            mushaf.chapter_by_name("  "),
            Err(MushafError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_chapter_lists() {
        let mushaf = mushaf();
        assert_eq!(mushaf.chapters().len(), 114);
        assert_eq!(
            mushaf.meccan_chapters().len() + mushaf.medinan_chapters().len(),
            114
        );
        assert_eq!(mushaf.chapters_by_revelation_order()[0].number, 96);
        assert_eq!(mushaf.chapter_names(1, 2), vec![(1, "Al-Fatiha", "الفاتحة"), (2, "Al-Baqarah", "البقرة")]);
        assert!(mushaf.chapter_names(5, 1).is_empty());
        assert_eq!(mushaf.verse_count(1).unwrap(), 7);
    }

    #[test]
    fn test_chapters_in_part() {
        let mushaf = mushaf();
        let first: Vec<u16> = mushaf.chapters_in_part(1).unwrap().iter().map(|c| c.number).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(mushaf.chapters_in_part(30).unwrap().len(), 37);
        assert!(matches!(
            mushaf.chapters_in_part(31),
            Err(MushafError::PartNotFound { number: 31 })
        ));
    }

    #[test]
    fn test_verse_lookups() {
        let mushaf = mushaf();
        assert_eq!(mushaf.verse(1, 2, Script::Simple).unwrap().text, "الحمد لله رب العالمين");
        assert!(matches!(
            mushaf.verse(1, 3, Script::Simple),
            Err(MushafError::VerseNotFound { chapter: 1, verse: 3 })
        ));
        assert!(matches!(
            mushaf.verse(115, 1, Script::Simple),
            Err(MushafError::ChapterNotFound { number: 115 })
        ));
        assert_eq!(mushaf.verses(1, Script::Simple).unwrap().len(), 2);
        assert!(mushaf.verses(2, Script::Simple).unwrap().is_empty());
    }

    #[test]
    fn test_missing_script_degrades_to_empty() {
        let mushaf = mushaf();
        assert!(mushaf.is_text_available(Script::Simple));
        assert!(!mushaf.is_text_available(Script::Uthmani));
        assert!(mushaf.verses(1, Script::Uthmani).unwrap().is_empty());
        assert!(mushaf.search("الله", SearchScope::Corpus, Script::Uthmani).unwrap().is_empty());
    }

    #[test]
    fn test_search_and_highlight() {
        let mushaf = mushaf();
        let results = mushaf.search("الله", SearchScope::Corpus, Script::Simple).unwrap();
        assert_eq!(results.iter().map(|r| (r.chapter, r.verse)).collect::<Vec<_>>(), vec![(1, 1), (112, 2)]);
        assert!(mushaf.search(None, SearchScope::Chapter(999), Script::Simple).unwrap().is_empty());
        assert!(mushaf.search("الله", SearchScope::Chapter(999), Script::Simple).is_err());
        let named = mushaf.search("الله", ChapterName::AlIkhlas.into(), Script::Simple).unwrap();
        assert_eq!(named.len(), 1);

        let wrapped = mushaf.highlight(&results[1].text, "الصمد", Some(|m: &str| format!("[{m}]")));
        assert_eq!(wrapped, "الله [الصمد]");
    }

    #[test]
    fn test_opening_formula() {
        let mushaf = Mushaf::new(MushafConfig::default());
        assert_eq!(mushaf.opening_formula(Script::Simple), "بسم الله الرحمن الرحيم");
        assert!(mushaf.opening_formula(Script::Uthmani).starts_with("بِسْمِ"));
        assert!(!mushaf.is_text_available(Script::Simple));
    }
}
