//! # TradeKing Rust SDK
//!
//! A Rust SDK for the TradeKing brokerage REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client for accounts, orders, market data, and
//!   watchlists
//! - [`auth`]: OAuth credential configuration
//! - [`transport`]: the signed HTTP transport boundary and its default
//!   OAuth 1.0a implementation
//! - [`network`]: endpoint URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradeking_sdk::prelude::*;
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
//!     let accounts = client.accounts(None).await?;
//!     println!("accounts: {:?}", accounts.as_json());
//!
//!     let quotes = client
//!         .market_quotes(QuoteParams::new(vec!["AAPL", "MSFT"]))
//!         .await?;
//!     println!("quotes: {:?}", quotes.as_json());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Each call is a single request/response unit awaiting the signed
//! transport. The only mutable client state is the response format; it is
//! read when a request is constructed, so changing it concurrently with
//! in-flight requests affects only calls issued afterwards, and cloned
//! clients carry an independent copy of the setting.

/// Credential configuration for authenticated sessions.
pub mod auth;

/// Network URL constants.
pub mod network;

/// Signed HTTP transport boundary and default OAuth implementation.
pub mod transport;

/// REST API client for the resource endpoints.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tradeking_sdk::prelude::*;
/// ```
pub mod prelude {
    // API client exports
    pub use crate::api::{
        ApiError, ApiResponse, ApiResult, Exchange, HistoryRange, NewsSearchParams, QuoteParams,
        ResponseFormat, SymbolList, TopListType, TradekingApiClient, TradekingApiClientBuilder,
        TransactionType,
    };

    // Credential configuration
    pub use crate::auth::Credentials;

    // Network constants
    pub use crate::network::DEFAULT_API_URL;

    // Transport boundary
    pub use crate::transport::{OAuthTransport, SignedTransport, TransportError};
}
