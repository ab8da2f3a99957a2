//! Where verse text comes from.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{MushafError, Result};

use super::Script;
use super::translation::{TranslationEdition, TranslationEntry};
use super::verse::VerseEntry;

/// A provider of raw verse records.
///
/// Implementations are read once per script or edition; the returned records
/// may be in any order.
pub trait TextSource: Send + Sync + std::fmt::Debug {
    /// Load the verse records of one script variant.
    fn load_verses(&self, script: Script) -> Result<Vec<VerseEntry>>;

    /// Load the records of one translation edition.
    fn load_translation(&self, edition: TranslationEdition) -> Result<Vec<TranslationEntry>>;
}

/// Reads JSON files from a data directory.
///
/// Verse text lives in `quran_simple.json` and `quran_uthmani.json`,
/// translations in `<resource_name>.json` (for example `en_sahih.json`).
/// Every file is a JSON array of records.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirectorySource {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, resource_name: &str) -> PathBuf {
        self.root.join(format!("{resource_name}.json"))
    }

    fn read_records<T: DeserializeOwned>(&self, resource_name: &str) -> Result<Vec<T>> {
        let path = self.file_path(resource_name);
        debug!("Reading {}", path.display());

        let file = File::open(&path)?;
        let records: Vec<T> = serde_json::from_reader(BufReader::new(file))?;

        debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl TextSource for DirectorySource {
    fn load_verses(&self, script: Script) -> Result<Vec<VerseEntry>> {
        self.read_records(script.resource_name())
    }

    fn load_translation(&self, edition: TranslationEdition) -> Result<Vec<TranslationEntry>> {
        self.read_records(edition.info().resource_name)
    }
}

/// Serves records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    verses: HashMap<Script, Vec<VerseEntry>>,
    translations: HashMap<TranslationEdition, Vec<TranslationEntry>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verse records of a script, replacing earlier ones.
    pub fn with_verses(mut self, script: Script, entries: Vec<VerseEntry>) -> Self {
        self.verses.insert(script, entries);
        self
    }

    /// Set the records of a translation edition, replacing earlier ones.
    pub fn with_translation(
        mut self,
        edition: TranslationEdition,
        entries: Vec<TranslationEntry>,
    ) -> Self {
        self.translations.insert(edition, entries);
        self
    }
}

impl TextSource for MemorySource {
    fn load_verses(&self, script: Script) -> Result<Vec<VerseEntry>> {
        self.verses
            .get(&script)
            .cloned()
            .ok_or_else(|| MushafError::text_unavailable(script))
    }

    fn load_translation(&self, edition: TranslationEdition) -> Result<Vec<TranslationEntry>> {
        self.translations
            .get(&edition)
            .cloned()
            .ok_or_else(|| MushafError::translation_unavailable(edition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_reads_verses() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("quran_simple.json"),
            r#"[{"surah":112,"ayah":2,"text":"الله الصمد","juz":30,"page":604,"hizbQuarter":240}]"#,
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let entries = source.load_verses(Script::Simple).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text.as_deref(), Some("الله الصمد"));
        assert_eq!(entries[0].page, 604);
    }

    #[test]
    fn test_directory_source_reads_translation() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("en_sahih.json"),
            r#"[{"Surah":1,"Ayah":1,"Text":"In the name of Allah"}]"#,
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let entries = source
            .load_translation(TranslationEdition::EnglishSaheehInternational)
            .unwrap();
        assert_eq!(entries[0].ayah, 1);
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.load_verses(Script::Uthmani),
            Err(MushafError::Io(_))
        ));
    }

    #[test]
    fn test_directory_source_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("quran_uthmani.json"), "{not json").unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.load_verses(Script::Uthmani),
            Err(MushafError::Json(_))
        ));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with_verses(Script::Simple, vec![VerseEntry::new(1, 1, "بسم الله الرحمن الرحيم")]);

        assert_eq!(source.load_verses(Script::Simple).unwrap().len(), 1);
        assert!(matches!(
            source.load_verses(Script::Uthmani),
            Err(MushafError::TextUnavailable { script: Script::Uthmani })
        ));
        assert!(matches!(
            source.load_translation(TranslationEdition::UrduJalandhry),
            Err(MushafError::TranslationUnavailable { .. })
        ));
    }
}
