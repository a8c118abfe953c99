//! Query string state mirrored from the view selector.

use std::collections::BTreeMap;
use thiserror::Error;

/// Current navigation selection.
pub const TAB_PARAM: &str = "tab";
/// Opened blog post; cleared on every page change.
pub const POST_PARAM: &str = "post";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to parse query string: {0}")]
    Parse(#[source] serde_qs::Error),
    #[error("failed to encode query string: {0}")]
    Encode(#[source] serde_qs::Error),
}

/// Flat `key=value` query parameters, kept in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Parse a `location.search` value, with or without the leading `?`.
    pub fn parse(search: &str) -> Result<Self, QueryError> {
        let raw = search.trim().trim_start_matches('?');
        if raw.is_empty() {
            return Ok(Self::default());
        }
        serde_qs::from_str::<BTreeMap<String, String>>(raw)
            .map(Self)
            .map_err(QueryError::Parse)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn tab(&self) -> Option<&str> {
        self.get(TAB_PARAM).filter(|tab| !tab.is_empty())
    }

    /// Record a page change: `tab` is set and `post` removed, other
    /// parameters are left alone.
    pub fn with_tab(mut self, page_key: &str) -> Self {
        self.0.insert(TAB_PARAM.to_string(), page_key.to_string());
        self.0.remove(POST_PARAM);
        self
    }

    /// Encode back to a `location.search` value (`""` when empty).
    pub fn to_search(&self) -> Result<String, QueryError> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        let encoded = serde_qs::to_string(&self.0).map_err(QueryError::Encode)?;
        Ok(format!("?{}", encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(QueryParams::parse("").unwrap(), QueryParams::default());
        assert_eq!(QueryParams::parse("?").unwrap(), QueryParams::default());
        assert_eq!(QueryParams::default().to_search().unwrap(), "");
    }

    #[test]
    fn test_with_tab_sets_tab_and_drops_post() {
        let params = QueryParams::parse("?post=12&tab=about").unwrap();
        assert_eq!(params.tab(), Some("about"));
        assert_eq!(params.get(POST_PARAM), Some("12"));

        let next = params.with_tab("resume");
        assert_eq!(next.tab(), Some("resume"));
        assert_eq!(next.get(POST_PARAM), None);
        assert_eq!(next.to_search().unwrap(), "?tab=resume");
    }

    #[test]
    fn test_with_tab_keeps_unrelated_params() {
        let next = QueryParams::parse("lang=en&post=3")
            .unwrap()
            .with_tab("portfolio");
        assert_eq!(next.to_search().unwrap(), "?lang=en&tab=portfolio");
    }

    #[test]
    fn test_empty_tab_is_absent() {
        let params = QueryParams::parse("?tab=").unwrap();
        assert_eq!(params.tab(), None);
    }
}
