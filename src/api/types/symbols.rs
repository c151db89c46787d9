//! Symbol-list parameter type shared by quote, news, and watchlist calls.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};

/// Either a single identifier or an ordered list of identifiers.
///
/// Used for ticker symbols, quote fids, and watchlist entries. The list form
/// keeps caller ordering; both forms serialize to the comma-joined query
/// representation via [`SymbolList::to_query_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolList {
    /// One identifier, e.g. `"AAPL"`
    Single(String),
    /// One or more identifiers, e.g. `["AAPL", "MSFT"]`
    Many(Vec<String>),
}

impl SymbolList {
    /// Check the field contract: a single value must be non-empty, a list
    /// must have at least one element.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyValue`] or [`ApiError::EmptyCollection`]
    /// with the supplied field name.
    pub fn validate(&self, field: &'static str) -> ApiResult<()> {
        match self {
            Self::Single(value) if value.is_empty() => Err(ApiError::EmptyValue(field)),
            Self::Many(values) if values.is_empty() => Err(ApiError::EmptyCollection(field)),
            _ => Ok(()),
        }
    }

    /// Comma-joined form used in query strings.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Many(values) => values.join(","),
        }
    }

    /// Number of identifiers carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    /// Whether no identifiers are carried (empty list form only).
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(values) if values.is_empty())
    }
}

impl From<&str> for SymbolList {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for SymbolList {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for SymbolList {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for SymbolList {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SymbolList {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|s| s.to_string()).collect())
    }
}
