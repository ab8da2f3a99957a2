//! Loading verse text and translations: directories, memory sources,
//! graceful degradation and once-only initialization.

mod common;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use mushaf::Mushaf;
use mushaf::corpus::{
    MemorySource, MushafConfig, Script, TextSource, TranslationEdition, TranslationEntry,
    VerseEntry,
};
use mushaf::error::{MushafError, Result};
use mushaf::search::SearchScope;
use tempfile::TempDir;

#[test]
fn test_directory_loads_both_scripts() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    assert!(mushaf.is_text_available(Script::Simple));
    assert!(mushaf.is_text_available(Script::Uthmani));

    let verses = mushaf.verses(1, Script::Uthmani)?;
    assert_eq!(verses.len(), 7);
    assert_eq!(verses[0].text, common::FATIHA_UTHMANI[0]);

    // written in reverse, served in order
    let ikhlas: Vec<u16> = mushaf.verses(112, Script::Simple)?.iter().map(|v| v.verse).collect();
    assert_eq!(ikhlas, vec![1, 2, 3, 4]);

    // PascalCase record
    let sajdah = mushaf.verse(32, 15, Script::Simple)?;
    assert_eq!(sajdah.page, 416);
    assert_eq!(sajdah.hizb_quarter, 167);
    assert_eq!(sajdah.part, 21);

    Ok(())
}

#[test]
fn test_prostration_flags_follow_table() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    for script in Script::ALL {
        assert!(mushaf.verse(32, 15, script)?.has_prostration);
        assert!(!mushaf.verse(1, 1, script)?.has_prostration);
        let flagged = mushaf
            .verses(112, script)?
            .iter()
            .filter(|verse| verse.has_prostration)
            .count();
        assert_eq!(flagged, 0);
    }

    Ok(())
}

#[test]
fn test_missing_directory_keeps_metadata() {
    common::init_logger();
    let dir = TempDir::new().unwrap();
    let mushaf = Mushaf::new(MushafConfig::new().data_dir(dir.path().join("absent")));

    assert!(!mushaf.is_text_available(Script::Uthmani));
    assert_eq!(mushaf.chapter(2).unwrap().verse_count, 286);
    assert!(mushaf.verses(2, Script::Uthmani).unwrap().is_empty());
    assert!(matches!(
        mushaf.verse(2, 255, Script::Uthmani),
        Err(MushafError::VerseNotFound { chapter: 2, verse: 255 })
    ));
    assert!(mushaf.random_verse(Script::Uthmani).is_none());
    assert_eq!(mushaf.total_word_count(Script::Uthmani), 0);
}

#[test]
fn test_malformed_file_degrades_to_empty() {
    common::init_logger();
    let dir = common::data_dir();
    fs::write(dir.path().join("quran_uthmani.json"), "[{\"surah\": 1,").unwrap();

    let mushaf = Mushaf::new(MushafConfig::new().data_dir(dir.path()));
    assert!(!mushaf.is_text_available(Script::Uthmani));
    assert!(mushaf.is_text_available(Script::Simple));
}

#[test]
fn test_no_data_dir_is_metadata_only() {
    let mushaf = Mushaf::new(MushafConfig::default());
    assert!(!mushaf.is_text_available(Script::Simple));
    assert_eq!(mushaf.chapters().len(), 114);
    assert!(!mushaf.is_translation_available(TranslationEdition::EnglishSaheehInternational));
}

#[test]
fn test_directory_translation() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();
    let edition = TranslationEdition::EnglishSaheehInternational;

    assert!(mushaf.is_translation_available(edition));
    assert!(!mushaf.is_translation_available(TranslationEdition::EnglishYusufAli));
    assert_eq!(mushaf.translations(1, edition)?.len(), 7);
    assert_eq!(mushaf.translation(1, 6, edition)?.text, common::SAHIH_FATIHA[5]);

    let results = mushaf.search_translation("path", SearchScope::Corpus, edition)?;
    assert_eq!(results.iter().map(|r| r.verse).collect::<Vec<_>>(), vec![6, 7]);

    Ok(())
}

/// Counts how often each script is loaded.
#[derive(Debug)]
struct CountingSource {
    inner: MemorySource,
    loads: Arc<AtomicUsize>,
}

impl TextSource for CountingSource {
    fn load_verses(&self, script: Script) -> Result<Vec<VerseEntry>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));
        self.inner.load_verses(script)
    }

    fn load_translation(&self, edition: TranslationEdition) -> Result<Vec<TranslationEntry>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_translation(edition)
    }
}

#[test]
fn test_concurrent_first_access_loads_once() {
    let loads = Arc::new(AtomicUsize::new(0));
    let entries = common::FATIHA_SIMPLE
        .iter()
        .enumerate()
        .map(|(index, text)| VerseEntry::new(1, index as u16 + 1, *text))
        .collect();
    let source = CountingSource {
        inner: MemorySource::new().with_verses(Script::Simple, entries),
        loads: Arc::clone(&loads),
    };
    let mushaf = Arc::new(Mushaf::with_source(source, MushafConfig::default()));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let mushaf = Arc::clone(&mushaf);
            thread::spawn(move || {
                mushaf
                    .search("الرحيم", SearchScope::Corpus, Script::Simple)
                    .unwrap()
                    .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    // a second script is a separate store
    assert!(!mushaf.is_text_available(Script::Uthmani));
    assert_eq!(loads.load(Ordering::SeqCst), 2);
    assert!(!mushaf.is_text_available(Script::Uthmani));
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_invalid_scope_rejected_before_loading() {
    let loads = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        inner: MemorySource::new()
            .with_verses(Script::Simple, vec![VerseEntry::new(1, 1, common::FATIHA_SIMPLE[0])]),
        loads: Arc::clone(&loads),
    };
    let mushaf = Mushaf::with_source(source, MushafConfig::default());

    let err = mushaf
        .search("الله", SearchScope::Chapter(999), Script::Simple)
        .unwrap_err();
    assert!(matches!(err, MushafError::ChapterNotFound { number: 999 }));
    assert!(mushaf
        .search_translation("mercy", SearchScope::Chapter(0), TranslationEdition::EnglishSaheehInternational)
        .is_err());
    assert_eq!(loads.load(Ordering::SeqCst), 0);

    assert_eq!(mushaf.search("الله", SearchScope::Chapter(1), Script::Simple).unwrap().len(), 1);
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_lists_are_independent_copies() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    let mut first = mushaf.verses(1, Script::Simple)?;
    first[0].text.push_str(" changed");
    first.truncate(1);

    let second = mushaf.verses(1, Script::Simple)?;
    assert_eq!(second.len(), 7);
    assert_eq!(second[0].text, common::FATIHA_SIMPLE[0]);

    let mut results = mushaf.search("الله", SearchScope::Corpus, Script::Simple)?;
    results.clear();
    assert_eq!(mushaf.search("الله", SearchScope::Corpus, Script::Simple)?.len(), 3);

    let mut chapters = mushaf.chapters();
    chapters.reverse();
    assert_eq!(mushaf.chapters()[0].number, 1);

    Ok(())
}

#[test]
fn test_global_instance_is_shared() {
    let first = Mushaf::global();
    let second = Mushaf::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.chapter(1).unwrap().arabic_name, "الفاتحة");
}
