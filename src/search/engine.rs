//! Diacritics-insensitive verse search.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::matcher::find_ignore_case;
use crate::analysis::normalize_for_search;
use crate::corpus::store::{ChapterTable, Located, TextStore, TranslationStore};
use crate::corpus::translation::TranslationEdition;
use crate::error::{MushafError, Result};
use crate::metadata::chapter;
use crate::metadata::ChapterName;
use crate::metadata::TOTAL_CHAPTERS;

use super::result::{MatchRecord, TranslationMatch};

/// Where to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchScope {
    /// Every chapter.
    #[default]
    Corpus,
    /// A single chapter, by number.
    Chapter(u16),
}

impl From<Option<u16>> for SearchScope {
    fn from(chapter: Option<u16>) -> Self {
        chapter.map_or(SearchScope::Corpus, SearchScope::Chapter)
    }
}

impl From<ChapterName> for SearchScope {
    fn from(name: ChapterName) -> Self {
        SearchScope::Chapter(name.number())
    }
}

impl SearchScope {
    /// Chapter numbers covered by the scope, checking the chapter exists.
    fn chapters(self) -> Result<std::ops::RangeInclusive<u16>> {
        match self {
            SearchScope::Corpus => Ok(1..=TOTAL_CHAPTERS),
            SearchScope::Chapter(number) if chapter::by_number(number).is_some() => {
                Ok(number..=number)
            }
            SearchScope::Chapter(number) => Err(MushafError::chapter_not_found(number)),
        }
    }
}

fn chapter_name(number: u16) -> String {
    chapter::by_number(number)
        .map(|chapter| chapter.english_name.to_string())
        .unwrap_or_default()
}

/// Visit the chapters of `scope` and collect `matcher`'s hits in corpus order.
fn scan<T, R, F>(table: &ChapterTable<T>, scope: SearchScope, parallel: bool, matcher: F) -> Result<Vec<R>>
where
    T: Located + Sync,
    R: Send,
    F: Fn(u16, &T) -> Option<R> + Sync,
{
    let chapters = scope.chapters()?;

    let visit = |number: u16| -> Vec<R> {
        table
            .chapter(number)
            .iter()
            .filter_map(|record| matcher(number, record))
            .collect()
    };

    // Collecting into a Vec keeps chapter order, parallel or not.
    let results = if parallel && scope == SearchScope::Corpus {
        chapters
            .into_par_iter()
            .flat_map_iter(visit)
            .collect()
    } else {
        chapters.flat_map(visit).collect()
    };

    Ok(results)
}

/// Searches verse text with marks and Alef forms folded away.
///
/// A verse matches when its normalized text contains the normalized term,
/// ignoring case. Results come back in corpus order, each verse at most once,
/// carrying the stored text rather than the normalized one.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    store: &'a TextStore,
    parallel: bool,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a TextStore) -> Self {
        SearchEngine {
            store,
            parallel: true,
        }
    }

    /// Scan chapters in parallel for whole-corpus searches.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Search for `term` within `scope`.
    ///
    /// A missing or blank term (after normalization) yields no results and
    /// skips scope validation. A chapter scope outside 1-114 is an error,
    /// never an empty result.
    pub fn search<'t, T>(&self, term: T, scope: SearchScope) -> Result<Vec<MatchRecord>>
    where
        T: Into<Option<&'t str>>,
    {
        let Some(term) = term.into() else {
            return Ok(Vec::new());
        };
        let needle: Vec<char> = normalize_for_search(term).chars().collect();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let results = scan(self.store, scope, self.parallel, |number, verse| {
            let haystack: Vec<char> = normalize_for_search(&verse.text).chars().collect();
            find_ignore_case(&haystack, &needle).map(|_| MatchRecord {
                chapter: number,
                verse: verse.verse,
                text: verse.text.clone(),
                chapter_name: chapter_name(number),
                term: term.to_string(),
            })
        })?;

        debug!("Search for '{}' in {:?} matched {} verses", term, scope, results.len());
        Ok(results)
    }
}

/// Searches one translation edition by plain case-insensitive containment.
#[derive(Debug, Clone, Copy)]
pub struct TranslationSearcher<'a> {
    store: &'a TranslationStore,
    edition: TranslationEdition,
    parallel: bool,
}

impl<'a> TranslationSearcher<'a> {
    pub fn new(store: &'a TranslationStore, edition: TranslationEdition) -> Self {
        TranslationSearcher {
            store,
            edition,
            parallel: true,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Search for `term` within `scope`. Blank terms yield no results; the
    /// term is trimmed but otherwise compared as given.
    pub fn search<'t, T>(&self, term: T, scope: SearchScope) -> Result<Vec<TranslationMatch>>
    where
        T: Into<Option<&'t str>>,
    {
        let Some(term) = term.into() else {
            return Ok(Vec::new());
        };
        let needle: Vec<char> = term.trim().chars().collect();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let edition = self.edition;
        let results = scan(self.store, scope, self.parallel, |number, verse| {
            let haystack: Vec<char> = verse.text.chars().collect();
            find_ignore_case(&haystack, &needle).map(|_| TranslationMatch {
                chapter: number,
                verse: verse.verse,
                text: verse.text.clone(),
                chapter_name: chapter_name(number),
                term: term.to_string(),
                edition,
            })
        })?;

        debug!(
            "Translation search for '{}' in {} ({:?}) matched {} verses",
            term,
            edition,
            scope,
            results.len()
        );
        Ok(results)
    }
}
