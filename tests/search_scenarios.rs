//! End-to-end search and highlight scenarios over the fixture corpus.

mod common;

use mushaf::analysis::{normalize_for_search, strip_diacritics};
use mushaf::corpus::{MushafConfig, Script};
use mushaf::error::{MushafError, Result};
use mushaf::search::{HighlightConfig, Highlighter, SearchScope, highlight_match};
use mushaf::Mushaf;

fn positions(results: &[mushaf::search::MatchRecord]) -> Vec<(u16, u16)> {
    results.iter().map(|r| (r.chapter, r.verse)).collect()
}

#[test]
fn test_results_in_corpus_order() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    // the marked text spells the article with alef wasla
    for (script, term) in [(Script::Simple, "ال"), (Script::Uthmani, "ٱل")] {
        let results = mushaf.search(term, SearchScope::Corpus, script)?;
        assert!(results.len() > 5);
        assert!(results.windows(2).all(|w| w[0].position() < w[1].position()));
    }

    Ok(())
}

#[test]
fn test_search_simple_script() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    let results = mushaf.search("الله", SearchScope::Corpus, Script::Simple)?;
    assert_eq!(positions(&results), vec![(1, 1), (112, 1), (112, 2)]);
    assert_eq!(results[1].chapter_name, "Al-Ikhlas");
    assert_eq!(results[1].text, common::IKHLAS_SIMPLE[0]);

    Ok(())
}

#[test]
fn test_search_marked_script_returns_original_text() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    let results = mushaf.search("نعبد", SearchScope::Corpus, Script::Uthmani)?;
    assert_eq!(positions(&results), vec![(1, 5)]);
    assert_eq!(results[0].text, common::FATIHA_UTHMANI[4]);
    assert_eq!(results[0].term, "نعبد");

    let results = mushaf.search("سجدا", SearchScope::Corpus, Script::Uthmani)?;
    assert_eq!(positions(&results), vec![(32, 15)]);

    Ok(())
}

#[test]
fn test_alef_forms_are_interchangeable() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    for term in ["إياك", "اياك", "أياك", "إِيَّاكَ"] {
        for script in Script::ALL {
            let results = mushaf.search(term, SearchScope::Chapter(1), script)?;
            assert_eq!(positions(&results), vec![(1, 5)], "{term} in {script}");
        }
    }

    let results = mushaf.search("احد", SearchScope::Chapter(112), Script::Uthmani)?;
    assert_eq!(positions(&results), vec![(112, 1), (112, 4)]);

    Ok(())
}

#[test]
fn test_alef_wasla_is_a_distinct_letter() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();

    let plain = mushaf.search("الله", SearchScope::Corpus, Script::Uthmani)?;
    assert!(plain.is_empty());

    let wasla = mushaf.search("ٱلله", SearchScope::Corpus, Script::Uthmani)?;
    assert_eq!(positions(&wasla), vec![(1, 1), (112, 1), (112, 2)]);

    Ok(())
}

#[test]
fn test_blank_term_versus_unknown_chapter() {
    let (_dir, mushaf) = common::mushaf();

    for term in ["", "   ", "\u{064E}\u{0651}"] {
        let results = mushaf.search(term, SearchScope::Corpus, Script::Simple).unwrap();
        assert!(results.is_empty());
        let results = mushaf.search(term, SearchScope::Chapter(500), Script::Simple).unwrap();
        assert!(results.is_empty());
    }
    assert!(mushaf.search(None, SearchScope::Corpus, Script::Simple).unwrap().is_empty());

    for chapter in [0, 115, 500] {
        let err = mushaf
            .search("الله", SearchScope::Chapter(chapter), Script::Simple)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, MushafError::ChapterNotFound { .. }));
    }

    // valid chapter, nothing matches
    let results = mushaf.search("الله", SearchScope::Chapter(2), Script::Simple).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_sequential_search_agrees() -> Result<()> {
    let dir = common::data_dir();
    let parallel = Mushaf::new(MushafConfig::new().data_dir(dir.path()));
    let sequential = Mushaf::new(MushafConfig::new().data_dir(dir.path()).parallel_search(false));

    for term in ["ال", "رحيم", "عليهم", "لم"] {
        assert_eq!(
            parallel.search(term, SearchScope::Corpus, Script::Uthmani)?,
            sequential.search(term, SearchScope::Corpus, Script::Uthmani)?
        );
    }

    Ok(())
}

#[test]
fn test_highlight_search_hits() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();
    let bold = |matched: &str| format!("<b>{matched}</b>");

    let results = mushaf.search("نعبد", SearchScope::Chapter(1), Script::Uthmani)?;
    let highlighted = mushaf.highlight(&results[0].text, &results[0].term, Some(bold));
    let (before, rest) = highlighted.split_once("<b>").unwrap();
    let (wrapped, _) = rest.split_once("</b>").unwrap();
    assert_eq!(normalize_for_search(before), "اياك");
    assert_eq!(strip_diacritics(wrapped), "نعبد");
    assert_eq!(
        highlighted.replace("<b>", "").replace("</b>", ""),
        common::FATIHA_UTHMANI[4]
    );

    let highlighted = highlight_match("بسم الله", "الله", Some(bold));
    assert_eq!(highlighted, "بسم <b>الله</b>");

    assert_eq!(highlight_match("hello world", "xyz", Some(bold)), "hello world");

    Ok(())
}

#[test]
fn test_highlighter_over_results() -> Result<()> {
    let (_dir, mushaf) = common::mushaf();
    let highlighter = Highlighter::new(HighlightConfig::new().tag("span").css_class("match"));

    let results = mushaf.search("عليهم", SearchScope::Corpus, Script::Simple)?;
    assert_eq!(results.len(), 1);

    let highlighted = highlighter.highlight_record(&results[0]);
    // only the first occurrence is wrapped
    assert_eq!(highlighted.matches("<span class=\"match\">عليهم</span>").count(), 1);
    assert_eq!(highlighted.matches("عليهم").count(), 2);

    Ok(())
}
