//! Pages, hizb quarters and manzils.

use crate::corpus::Script;
use crate::corpus::verse::Verse;
use crate::error::{MushafError, Result};
use crate::metadata::manzil::{self, MANZILS};
use crate::metadata::{Manzil, TOTAL_HIZB_QUARTERS, TOTAL_MANZILS, TOTAL_PAGES, VersePosition};

use super::Mushaf;

fn check_range(scope: &'static str, value: u16, max: u16) -> Result<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(MushafError::out_of_range(scope, value, max))
    }
}

impl Mushaf {
    /// Verses printed on a page (1-604) of the standard print.
    ///
    /// Page numbers come with the text, so this is empty when no text is
    /// loaded.
    pub fn verses_on_page(&self, page: u16, script: Script) -> Result<Vec<Verse>> {
        check_range("Page", page, TOTAL_PAGES)?;
        Ok(self.verses_where(script, |verse| verse.page == page))
    }

    /// Page of a verse, or `None` when the verse or its page is unknown.
    pub fn page_number(&self, chapter: u16, verse: u16, script: Script) -> Option<u16> {
        self.text(script)
            .get(chapter, verse)
            .map(|verse| verse.page)
            .filter(|page| *page > 0)
    }

    /// Verses in a hizb quarter (1-240).
    pub fn verses_in_hizb_quarter(&self, quarter: u16, script: Script) -> Result<Vec<Verse>> {
        check_range("Hizb quarter", quarter, TOTAL_HIZB_QUARTERS)?;
        Ok(self.verses_where(script, |verse| verse.hizb_quarter == quarter))
    }

    /// Hizb quarter of a verse, or `None` when unknown.
    pub fn hizb_quarter(&self, chapter: u16, verse: u16, script: Script) -> Option<u16> {
        self.text(script)
            .get(chapter, verse)
            .map(|verse| verse.hizb_quarter)
            .filter(|quarter| *quarter > 0)
    }

    /// Manzil by number (1-7).
    pub fn manzil(&self, number: u16) -> Result<Manzil> {
        manzil::by_number(number)
            .copied()
            .ok_or_else(|| MushafError::out_of_range("Manzil", number, TOTAL_MANZILS))
    }

    pub fn manzil_opt(&self, number: u16) -> Option<Manzil> {
        manzil::by_number(number).copied()
    }

    pub fn manzils(&self) -> Vec<Manzil> {
        MANZILS.to_vec()
    }

    /// Manzil containing a verse, or `None` for a position outside the corpus.
    pub fn manzil_number(&self, chapter: u16, verse: u16) -> Option<u16> {
        manzil::containing(VersePosition::new(chapter, verse)).map(|manzil| manzil.number)
    }

    /// Verses of a manzil, in order.
    pub fn verses_in_manzil(&self, number: u16, script: Script) -> Result<Vec<Verse>> {
        let manzil = self.manzil(number)?;
        let store = self.text(script);

        Ok((manzil.start.chapter..=manzil.end.chapter)
            .flat_map(|chapter| store.chapter(chapter))
            .filter(|verse| manzil.contains(verse.position()))
            .cloned()
            .collect())
    }

    pub fn is_valid_manzil(&self, number: u16) -> bool {
        manzil::by_number(number).is_some()
    }

    fn verses_where<P>(&self, script: Script, predicate: P) -> Vec<Verse>
    where
        P: Fn(&Verse) -> bool,
    {
        self.text(script)
            .iter()
            .filter(|verse| predicate(verse))
            .cloned()
            .collect()
    }
}
