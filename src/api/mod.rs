//! REST API client module for TradeKing.
//!
//! This module provides a type-safe client for the TradeKing REST API:
//! accounts, balances, orders, history, holdings, market data, news, quotes,
//! watchlists, member profile, and service status.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tradeking_sdk::api::TradekingApiClient;
//! use tradeking_sdk::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new(
//!         "consumer-key",
//!         "consumer-secret",
//!         "oauth-token",
//!         "oauth-token-secret",
//!     );
//!     let client = TradekingApiClient::new(credentials)?;
//!
//!     // Market clock
//!     let clock = client.market_clock().await?;
//!     println!("clock: {:?}", clock.as_json());
//!
//!     // Quotes for a list of symbols
//!     use tradeking_sdk::api::QuoteParams;
//!     let quotes = client
//!         .market_quotes(QuoteParams::new(vec!["AAPL", "MSFT"]))
//!         .await?;
//!     println!("quotes: {:?}", quotes.as_json());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Response Formats
//!
//! Endpoints negotiate encoding through the URL suffix. The default is JSON,
//! parsed into [`ApiResponse::Json`]; switching to XML passes the raw body
//! through as [`ApiResponse::Xml`]:
//!
//! ```rust,ignore
//! use tradeking_sdk::api::ResponseFormat;
//!
//! let mut client = TradekingApiClient::new(credentials)?;
//! client.set_response_format(ResponseFormat::Xml);
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`.
//! Parameter validation failures are raised before any request is issued:
//!
//! ```rust,ignore
//! use tradeking_sdk::api::{ApiError, TopListType, Exchange};
//!
//! match client.account_orders("").await {
//!     Err(ApiError::MissingRequiredField(field)) => println!("missing {}", field),
//!     other => println!("{:?}", other),
//! }
//! ```
//!
//! # Order Submission
//!
//! Orders are submitted as FIXML. The caller supplies the order body; the
//! client wraps it in the namespaced envelope:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let order = json!({
//!     "Order": {
//!         "TmInForce": "0",
//!         "Typ": "1",
//!         "Side": "1",
//!         "Acct": "12345678",
//!         "Instrmt": {"SecTyp": "CS", "Sym": "AAPL"},
//!         "OrdQty": {"Qty": "1"}
//!     }
//! });
//! let response = client.post_account_order("12345678", &order).await?;
//! ```

pub mod client;
pub mod error;
pub mod fixml;
pub(crate) mod query;
pub mod types;

// Re-export main types for convenience
pub use client::{TradekingApiClient, TradekingApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
