//! Network URL constants for the TradeKing SDK.

/// Default REST API base URL for TradeKing.
pub const DEFAULT_API_URL: &str = "https://api.tradeking.com/v1";
