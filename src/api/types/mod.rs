//! Type definitions for the TradeKing REST API client.

pub mod history;
pub mod market;
pub mod symbols;

pub use history::{HistoryRange, TransactionType};
pub use market::{Exchange, NewsSearchParams, QuoteParams, TopListType, DEFAULT_NEWS_MAXHITS};
pub use symbols::SymbolList;

use serde::{Deserialize, Serialize};

/// Response encoding negotiated with the API via the endpoint suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Structured JSON responses, parsed into [`ApiResponse::Json`]
    #[default]
    Json,
    /// Raw XML responses, passed through as [`ApiResponse::Xml`]
    Xml,
}

impl ResponseFormat {
    /// Endpoint suffix form of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Parse a caller-supplied format string, falling back to JSON.
    ///
    /// Unknown values log a warning and yield the default, matching the
    /// response-format control contract.
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "xml" => Self::Xml,
            other => {
                tracing::warn!(value = other, "invalid response type supplied, default will be used");
                Self::Json
            }
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized response body.
///
/// JSON-mode calls parse the body into a dynamic value; XML-mode calls pass
/// the body through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed structured response
    Json(serde_json::Value),
    /// Raw markup response
    Xml(String),
}

impl ApiResponse {
    /// Borrow the parsed JSON value, if this is a JSON response.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Xml(_) => None,
        }
    }

    /// Consume into the parsed JSON value, if this is a JSON response.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Xml(_) => None,
        }
    }

    /// Borrow the raw XML body, if this is an XML response.
    pub fn as_xml(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Xml(raw) => Some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_default_is_json() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    }

    #[test]
    fn test_parse_lossy_accepts_known_values() {
        assert_eq!(ResponseFormat::parse_lossy("json"), ResponseFormat::Json);
        assert_eq!(ResponseFormat::parse_lossy("xml"), ResponseFormat::Xml);
    }

    #[test]
    fn test_parse_lossy_falls_back_to_json() {
        assert_eq!(ResponseFormat::parse_lossy("yaml"), ResponseFormat::Json);
        assert_eq!(ResponseFormat::parse_lossy(""), ResponseFormat::Json);
    }

    #[test]
    fn test_api_response_accessors() {
        let json = ApiResponse::Json(serde_json::json!({"ok": true}));
        assert!(json.as_json().is_some());
        assert!(json.as_xml().is_none());

        let xml = ApiResponse::Xml("<response/>".to_string());
        assert_eq!(xml.as_xml(), Some("<response/>"));
        assert!(xml.into_json().is_none());
    }
}
