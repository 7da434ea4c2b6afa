//! Local relevance re-filter.
//!
//! The upstream query already asks for an exact phrase, but its relevance
//! ranking is looser than we want: results can come back that never mention
//! the term in the fields we forward. The matcher here keeps a result only
//! if the search term occurs as a whole word, case-insensitively, in at
//! least one of the checked fields.

use regex::Regex;

/// Whole-word, case-insensitive matcher for a search term.
pub struct RelevanceMatcher {
    re: Regex,
}

impl RelevanceMatcher {
    /// Compiles a matcher for `term`. The term is escaped before being
    /// wrapped in word boundaries, so any free text is accepted.
    #[must_use]
    pub fn new(term: &str) -> Self {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term.trim()));
        Self {
            re: Regex::new(&pattern).expect("valid escaped term regex"),
        }
    }

    /// True if the term occurs as a whole word in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// True if the term occurs as a whole word in any of `fields`.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        fields.into_iter().any(|f| self.is_match(f))
    }
}
