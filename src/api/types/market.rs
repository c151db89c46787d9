//! Market-data parameter types: top-list vocabularies, exchange codes, and
//! query parameter structs for the news and quote endpoints.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::symbols::SymbolList;

/// Ranked market list selector for `market/toplists/{listType}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopListType {
    /// Largest dollar losers
    #[serde(rename = "toplosers")]
    TopLosers,
    /// Largest percentage losers
    #[serde(rename = "toppctlosers")]
    TopPctLosers,
    /// Highest share volume
    #[serde(rename = "topvolume")]
    TopVolume,
    /// Most actively traded
    #[serde(rename = "topactive")]
    TopActive,
    /// Largest dollar gainers
    #[serde(rename = "topgainers")]
    TopGainers,
    /// Largest percentage gainers
    #[serde(rename = "toppctgainers")]
    TopPctGainers,
}

impl TopListType {
    /// Path-segment form of the list selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLosers => "toplosers",
            Self::TopPctLosers => "toppctlosers",
            Self::TopVolume => "topvolume",
            Self::TopActive => "topactive",
            Self::TopGainers => "topgainers",
            Self::TopPctGainers => "toppctgainers",
        }
    }
}

impl std::fmt::Display for TopListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopListType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toplosers" => Ok(Self::TopLosers),
            "toppctlosers" => Ok(Self::TopPctLosers),
            "topvolume" => Ok(Self::TopVolume),
            "topactive" => Ok(Self::TopActive),
            "topgainers" => Ok(Self::TopGainers),
            "toppctgainers" => Ok(Self::TopPctGainers),
            _ => Err(ApiError::InvalidEnumValue {
                field: "listType",
                value: s.to_string(),
            }),
        }
    }
}

/// Exchange code for top-list queries.
///
/// Parses case-insensitively and always emits the uppercase wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// NYSE American
    A,
    /// New York Stock Exchange
    N,
    /// NASDAQ
    Q,
    /// NASDAQ OMX BX
    U,
    /// NYSE Arca
    V,
}

impl Exchange {
    /// Uppercase wire form of the exchange code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::N => "N",
            Self::Q => "Q",
            Self::U => "U",
            Self::V => "V",
        }
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::N
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalize before membership check, matching the wire contract.
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "N" => Ok(Self::N),
            "Q" => Ok(Self::Q),
            "U" => Ok(Self::U),
            "V" => Ok(Self::V),
            _ => Err(ApiError::InvalidEnumValue {
                field: "exchange",
                value: s.to_string(),
            }),
        }
    }
}

/// Default hit count for `market/news/search` when none is supplied.
pub const DEFAULT_NEWS_MAXHITS: u32 = 10;

/// Query parameters for `market/news/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSearchParams {
    /// Symbols to search news for
    pub symbols: SymbolList,
    /// Maximum number of hits (defaults to [`DEFAULT_NEWS_MAXHITS`])
    pub maxhits: Option<u32>,
    /// Earliest article date
    pub startdate: Option<NaiveDate>,
    /// Latest article date
    pub enddate: Option<NaiveDate>,
}

impl NewsSearchParams {
    /// Create params for the given symbols.
    pub fn new(symbols: impl Into<SymbolList>) -> Self {
        Self {
            symbols: symbols.into(),
            maxhits: None,
            startdate: None,
            enddate: None,
        }
    }

    /// Set the maximum number of hits.
    pub fn with_maxhits(mut self, maxhits: u32) -> Self {
        self.maxhits = Some(maxhits);
        self
    }

    /// Restrict results to a date range.
    pub fn with_date_range(mut self, startdate: NaiveDate, enddate: NaiveDate) -> Self {
        self.startdate = Some(startdate);
        self.enddate = Some(enddate);
        self
    }
}

/// Query parameters for the quote endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteParams {
    /// Symbols to quote
    pub symbols: SymbolList,
    /// Optional field identifiers to restrict the quote payload
    pub fids: Option<SymbolList>,
    /// Route to the streaming host instead of the snapshot endpoint
    pub stream: bool,
}

impl QuoteParams {
    /// Create params for the given symbols.
    pub fn new(symbols: impl Into<SymbolList>) -> Self {
        Self {
            symbols: symbols.into(),
            fids: None,
            stream: false,
        }
    }

    /// Restrict the quote payload to the given fids.
    pub fn with_fids(mut self, fids: impl Into<SymbolList>) -> Self {
        self.fids = Some(fids.into());
        self
    }

    /// Request the streaming variant.
    pub fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_list_type_parse() {
        let list: TopListType = "topgainers".parse().unwrap();
        assert_eq!(list, TopListType::TopGainers);
        assert_eq!(list.as_str(), "topgainers");
    }

    #[test]
    fn test_top_list_type_rejects_unknown() {
        let err = "bogus".parse::<TopListType>().unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidEnumValue { field: "listType", .. }
        ));
    }

    #[test]
    fn test_exchange_parses_case_insensitively() {
        assert_eq!("n".parse::<Exchange>().unwrap(), Exchange::N);
        assert_eq!("q".parse::<Exchange>().unwrap(), Exchange::Q);
        assert_eq!("V".parse::<Exchange>().unwrap(), Exchange::V);
        assert_eq!("n".parse::<Exchange>().unwrap().as_str(), "N");
    }

    #[test]
    fn test_exchange_rejects_unknown() {
        let err = "Z".parse::<Exchange>().unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidEnumValue { field: "exchange", .. }
        ));
    }

    #[test]
    fn test_news_search_params_builder() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let params = NewsSearchParams::new(vec!["AAPL", "MSFT"])
            .with_maxhits(25)
            .with_date_range(start, end);

        assert_eq!(params.symbols.to_query_value(), "AAPL,MSFT");
        assert_eq!(params.maxhits, Some(25));
        assert_eq!(params.startdate, Some(start));
        assert_eq!(params.enddate, Some(end));
    }

    #[test]
    fn test_quote_params_builder() {
        let params = QuoteParams::new("AAPL").with_fids(vec!["ask", "bid"]).streaming();
        assert_eq!(params.symbols.to_query_value(), "AAPL");
        assert_eq!(params.fids.as_ref().unwrap().to_query_value(), "ask,bid");
        assert!(params.stream);
    }
}
