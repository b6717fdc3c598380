//! MediaWiki search request construction.

use url::Url;

use super::WikiError;

/// Parameters sent with every search, besides the search term itself.
///
/// Requests a generator search returning page id, title, short description,
/// intro extract and canonical URL as JSON.
pub const FIXED_PARAMS: &[(&str, &str)] = &[
    ("action", "query"),
    ("generator", "search"),
    ("prop", "info|description|extracts"),
    ("exlimit", "10"),
    ("exintro", "true"),
    ("inprop", "url"),
    ("format", "json"),
    ("origin", "*"),
];

/// Name of the search term parameter.
pub const SEARCH_PARAM: &str = "gsrsearch";

/// CirrusSearch rejects full-text queries longer than this.
const MAX_TERM_CHARS: usize = 300;

/// API endpoint for a language edition.
pub fn endpoint_for(language: &str) -> String {
    format!("https://{language}.wikipedia.org/w/api.php")
}

/// A single generator search against the MediaWiki action API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Normalized search term.
    pub term: String,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// Validate the search term.
    pub fn validate(&self) -> Result<(), WikiError> {
        if self.term.trim().is_empty() {
            return Err(WikiError::InvalidQuery("query cannot be empty".to_string()));
        }

        let chars = self.term.chars().count();
        if chars > MAX_TERM_CHARS {
            return Err(WikiError::InvalidQuery(format!("query too long: {chars} chars (max {MAX_TERM_CHARS})")));
        }

        Ok(())
    }

    /// Build the full request URL. The term is percent-encoded exactly once.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, WikiError> {
        let mut url = Url::parse(endpoint).map_err(|e| WikiError::InvalidUrl(format!("{endpoint}: {e}")))?;

        url.query_pairs_mut()
            .clear()
            .extend_pairs(FIXED_PARAMS)
            .append_pair(SEARCH_PARAM, &self.term);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_endpoint_for_language() {
        assert_eq!(endpoint_for("en"), "https://en.wikipedia.org/w/api.php");
        assert_eq!(endpoint_for("de"), "https://de.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_url_carries_fixed_params() {
        let url = SearchRequest::new("cat").to_url(&endpoint_for("en")).unwrap();

        assert_eq!(url.host_str(), Some("en.wikipedia.org"));
        assert_eq!(url.path(), "/w/api.php");
        for (name, value) in FIXED_PARAMS {
            assert_eq!(param(&url, name).as_deref(), Some(*value), "param {name}");
        }
        assert_eq!(param(&url, SEARCH_PARAM).as_deref(), Some("cat"));
    }

    #[test]
    fn test_term_encoded_once() {
        let url = SearchRequest::new("c++ & rust").to_url(&endpoint_for("en")).unwrap();

        assert_eq!(param(&url, SEARCH_PARAM).as_deref(), Some("c++ & rust"));
        let raw = url.query().unwrap();
        assert!(raw.contains("gsrsearch=c%2B%2B+%26+rust"), "raw query was {raw}");
    }

    #[test]
    fn test_existing_query_replaced() {
        let url = SearchRequest::new("cat").to_url("http://127.0.0.1:9/w/api.php?stale=1").unwrap();
        assert!(param(&url, "stale").is_none());
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = SearchRequest::new("cat").to_url("not a url");
        assert!(matches!(result, Err(WikiError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate() {
        assert!(SearchRequest::new("cat").validate().is_ok());
        assert!(matches!(SearchRequest::new("  ").validate(), Err(WikiError::InvalidQuery(_))));
        assert!(matches!(SearchRequest::new("a".repeat(301)).validate(), Err(WikiError::InvalidQuery(_))));
        assert!(SearchRequest::new("é".repeat(300)).validate().is_ok());
    }
}
