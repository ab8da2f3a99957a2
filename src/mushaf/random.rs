//! Random and date-seeded verse selection.

use chrono::{Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::corpus::Script;
use crate::corpus::verse::Verse;
use crate::error::Result;

use super::Mushaf;

/// Seed for a date: `yyyymmdd` as a number.
fn day_seed(date: NaiveDate) -> u64 {
    let seed = date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64;
    seed.unsigned_abs()
}

impl Mushaf {
    /// A uniformly chosen verse, or `None` when no text is loaded.
    pub fn random_verse(&self, script: Script) -> Option<Verse> {
        let store = self.text(script);
        if store.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..store.len());
        store.iter().nth(index).cloned()
    }

    /// A uniformly chosen verse of one chapter.
    pub fn random_verse_in(&self, chapter: u16, script: Script) -> Result<Option<Verse>> {
        Self::require_chapter(chapter)?;
        let verses = self.text(script).chapter(chapter);
        if verses.is_empty() {
            return Ok(None);
        }
        let index = rand::rng().random_range(0..verses.len());
        Ok(verses.get(index).cloned())
    }

    /// The verse for a given day. The same date always yields the same verse
    /// for the same text.
    pub fn verse_of_the_day(&self, date: NaiveDate, script: Script) -> Option<Verse> {
        let store = self.text(script);
        if store.is_empty() {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(day_seed(date));
        let index = rng.random_range(0..store.len());
        store.iter().nth(index).cloned()
    }

    /// The verse for the current UTC date.
    pub fn verse_of_today(&self, script: Script) -> Option<Verse> {
        self.verse_of_the_day(Utc::now().date_naive(), script)
    }
}
