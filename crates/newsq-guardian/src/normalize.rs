//! Projection of raw Guardian search results into [`Article`] records.

use newsq_core::Article;

use crate::types::RawSearchResult;

/// Maximum number of characters kept from the body and trail text.
pub(crate) const PREVIEW_MAX_CHARS: usize = 1000;

/// Converts a raw search result into the normalized [`Article`] shape.
///
/// Publication date, title, and URL are copied verbatim; the trail text
/// becomes `summary` and the body becomes `content_preview`, both truncated
/// to [`PREVIEW_MAX_CHARS`] characters. Truncation is a plain character
/// slice, not word-aware.
pub(crate) fn to_article(result: &RawSearchResult) -> Article {
    Article {
        web_publication_date: result.web_publication_date.clone(),
        web_title: result.web_title.clone(),
        web_url: result.web_url.clone(),
        summary: truncate_chars(&result.fields.trail_text, PREVIEW_MAX_CHARS),
        content_preview: truncate_chars(&result.fields.body, PREVIEW_MAX_CHARS),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultFields;

    fn raw(title: &str, trail: &str, body: &str) -> RawSearchResult {
        RawSearchResult {
            web_publication_date: "2024-04-05T12:34:56Z".to_string(),
            web_title: title.to_string(),
            web_url: "https://www.theguardian.com/x".to_string(),
            fields: ResultFields {
                trail_text: trail.to_string(),
                body: body.to_string(),
            },
        }
    }

    #[test]
    fn copies_identity_fields_verbatim() {
        let article = to_article(&raw("Title", "Trail", "Body"));
        assert_eq!(article.web_publication_date, "2024-04-05T12:34:56Z");
        assert_eq!(article.web_title, "Title");
        assert_eq!(article.web_url, "https://www.theguardian.com/x");
        assert_eq!(article.summary, "Trail");
        assert_eq!(article.content_preview, "Body");
    }

    #[test]
    fn truncates_long_body_to_preview_limit() {
        let body = "x".repeat(2500);
        let article = to_article(&raw("Title", "", &body));
        assert_eq!(article.content_preview.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn truncates_long_trail_text() {
        let trail = "y".repeat(1200);
        let article = to_article(&raw("Title", &trail, ""));
        assert_eq!(article.summary.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let body = "é".repeat(1500);
        let article = to_article(&raw("Title", "", &body));
        assert_eq!(article.content_preview.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn absent_fields_become_empty_strings() {
        let result = RawSearchResult {
            web_publication_date: "2024-04-05T12:34:56Z".to_string(),
            web_title: "Title".to_string(),
            web_url: "https://www.theguardian.com/x".to_string(),
            fields: ResultFields::default(),
        };
        let article = to_article(&result);
        assert_eq!(article.summary, "");
        assert_eq!(article.content_preview, "");
    }
}
