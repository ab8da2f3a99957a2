//! Wrapping matched terms in the original, marked text.
//!
//! Matching happens on normalized text, but callers display the stored text
//! with its marks. The highlighter finds the match on the folded string and
//! maps its boundaries back through an [`IndexMap`](crate::analysis::IndexMap)
//! so the wrapped span is a slice of the original.

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::find_ignore_case;
use crate::analysis::{normalize_for_search, strip_diacritics_with_map, unify_alef_forms};

use super::result::MatchRecord;

/// Wrap the first match of `term` in `text` with `wrapper`.
///
/// The match is located the way search locates it (marks ignored, Alef
/// forms folded, case ignored). The span handed to `wrapper` starts at the
/// first matched letter and ends after the last matched letter; marks that
/// follow the last letter stay outside.
///
/// Returns `text` unchanged when it or the term is empty, when there is no
/// wrapper, when nothing matches, or when the match cannot be mapped back.
///
/// ```
/// use mushaf::search::highlight::highlight_match;
///
/// let wrapped = highlight_match("بسم الله", "الله", Some(|m: &str| format!("<b>{m}</b>")));
/// assert_eq!(wrapped, "بسم <b>الله</b>");
/// ```
pub fn highlight_match<F>(text: &str, term: &str, wrapper: Option<F>) -> String
where
    F: Fn(&str) -> String,
{
    let Some(wrapper) = wrapper else {
        return text.to_string();
    };

    match locate(text, term) {
        Some((start, end)) => {
            let mut highlighted = String::with_capacity(text.len() + 16);
            highlighted.push_str(&text[..start]);
            highlighted.push_str(&wrapper(&text[start..end]));
            highlighted.push_str(&text[end..]);
            highlighted
        }
        None => text.to_string(),
    }
}

/// Byte range in `text` of the first match of `term`.
fn locate(text: &str, term: &str) -> Option<(usize, usize)> {
    if text.is_empty() {
        return None;
    }
    let needle: Vec<char> = normalize_for_search(term).chars().collect();
    if needle.is_empty() {
        return None;
    }

    // Untrimmed, so char positions line up with the map.
    let (stripped, map) = strip_diacritics_with_map(text);
    let folded: Vec<char> = unify_alef_forms(&stripped).chars().collect();
    if folded.len() != map.len() {
        return None;
    }

    let first = find_ignore_case(&folded, &needle)?;
    let last = first + needle.len() - 1;

    let start = map.original_offset(first)?;
    let last_offset = map.original_offset(last)?;
    let end = last_offset + text[last_offset..].chars().next()?.len_utf8();

    Some((start, end))
}

/// Configuration for markup highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// HTML tag to wrap matches with (e.g., "mark", "em", "strong").
    pub tag: String,
    /// CSS class to add to the tag.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the CSS class.
    pub fn css_class<S: Into<String>>(mut self, css_class: S) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Build the opening tag.
    pub fn opening_tag(&self) -> String {
        match self.css_class {
            Some(ref css_class) => format!("<{} class=\"{}\">", self.tag, css_class),
            None => format!("<{}>", self.tag),
        }
    }

    /// Build the closing tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Wraps matches in markup built from a [`HighlightConfig`].
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight the first match of `term` in `text`.
    pub fn highlight(&self, text: &str, term: &str) -> String {
        let opening = self.config.opening_tag();
        let closing = self.config.closing_tag();
        highlight_match(
            text,
            term,
            Some(|matched: &str| format!("{opening}{matched}{closing}")),
        )
    }

    /// Highlight a search hit's term in its own text.
    pub fn highlight_record(&self, record: &MatchRecord) -> String {
        self.highlight(&record.text, &record.term)
    }
}
