//! TradeKing REST API client implementation.
//!
//! The [`TradekingApiClient`] provides one method per resource endpoint,
//! composing endpoint URL assembly, parameter validation, the signed
//! transport, and response normalization.
//!
//! # Example
//!
//! ```rust,ignore
//! use tradeking_sdk::api::TradekingApiClient;
//! use tradeking_sdk::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("ck", "cs", "token", "token-secret");
//!     let client = TradekingApiClient::new(credentials)?;
//!
//!     // List accounts
//!     let accounts = client.accounts(None).await?;
//!     println!("accounts: {:?}", accounts.as_json());
//!
//!     // Orders for one account
//!     let orders = client.account_orders("12345678").await?;
//!     println!("orders: {:?}", orders.as_json());
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::fixml;
use crate::api::query::QueryBuilder;
use crate::api::types::{
    ApiResponse, Exchange, HistoryRange, NewsSearchParams, QuoteParams, ResponseFormat,
    SymbolList, TopListType, TransactionType, DEFAULT_NEWS_MAXHITS,
};
use crate::auth::Credentials;
use crate::network::DEFAULT_API_URL;
use crate::transport::{OAuthTransport, SignedTransport};

/// Builder for configuring [`TradekingApiClient`].
#[derive(Debug, Clone)]
pub struct TradekingApiClientBuilder {
    credentials: Credentials,
    base_url: String,
    response_format: ResponseFormat,
    transport: Option<Arc<dyn SignedTransport>>,
}

impl TradekingApiClientBuilder {
    /// Create a new builder with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_URL.to_string(),
            response_format: ResponseFormat::default(),
            transport: None,
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the initial response format.
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Supply a custom signed transport instead of the default OAuth one.
    pub fn transport(mut self, transport: Arc<dyn SignedTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] if any of the four
    /// authentication fields is empty; no client value exists in that case.
    pub fn build(self) -> ApiResult<TradekingApiClient> {
        self.credentials.validate()?;

        let transport: Arc<dyn SignedTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(OAuthTransport::new(
                self.credentials.consumer_key.clone(),
                self.credentials.consumer_secret.clone(),
            )?),
        };

        Ok(TradekingApiClient {
            credentials: self.credentials,
            base_url: self.base_url,
            response_format: self.response_format,
            transport,
        })
    }
}

/// Transient request value consumed by the dispatcher.
#[derive(Debug, Clone)]
struct EndpointRequest {
    resource: String,
    query: Option<String>,
    stream: bool,
    method: RequestMethod,
    body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestMethod {
    Get,
    Post,
}

impl EndpointRequest {
    fn get(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            query: None,
            stream: false,
            method: RequestMethod::Get,
            body: None,
        }
    }

    fn post(resource: impl Into<String>, body: String) -> Self {
        Self {
            resource: resource.into(),
            query: None,
            stream: false,
            method: RequestMethod::Post,
            body: Some(body),
        }
    }

    fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

/// TradeKing REST API client.
///
/// One client per authenticated session. Calls are stateless except for the
/// response format, which is read when each request is constructed: requests
/// already in flight keep the format they started with, and clones of the
/// client carry their own copy of the setting.
#[derive(Debug, Clone)]
pub struct TradekingApiClient {
    credentials: Credentials,
    base_url: String,
    response_format: ResponseFormat,
    transport: Arc<dyn SignedTransport>,
}

impl TradekingApiClient {
    /// Create a client with the default base URL and OAuth transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] for an incomplete credential
    /// set, or a transport error if the HTTP client cannot be initialized.
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        TradekingApiClientBuilder::new(credentials).build()
    }

    /// Create a builder for custom configuration.
    pub fn builder(credentials: Credentials) -> TradekingApiClientBuilder {
        TradekingApiClientBuilder::new(credentials)
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current response format.
    pub fn response_type(&self) -> ResponseFormat {
        self.response_format
    }

    /// Set the response format for subsequent calls.
    ///
    /// The setting is not synchronized: it applies to requests constructed
    /// after the call, and clones of the client are unaffected.
    pub fn set_response_format(&mut self, format: ResponseFormat) {
        self.response_format = format;
    }

    /// Set the response format from a caller-supplied string.
    ///
    /// Unknown values log a warning and fall back to JSON.
    pub fn set_response_type(&mut self, value: &str) {
        self.response_format = ResponseFormat::parse_lossy(value);
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Compose `{base}/{resource}.{format}[?query]`, rewriting the host for
    /// streaming variants.
    fn endpoint_url(&self, resource: &str, query: Option<&str>, stream: bool) -> String {
        let mut url = format!(
            "{}/{}.{}",
            self.base_url,
            resource,
            self.response_format.as_str()
        );
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        if stream {
            rewrite_stream_host(&url)
        } else {
            url
        }
    }

    /// Dispatch one request through the signed transport and normalize the
    /// response for the configured format.
    async fn call(&self, request: EndpointRequest) -> ApiResult<ApiResponse> {
        let url = self.endpoint_url(&request.resource, request.query.as_deref(), request.stream);
        tracing::debug!(%url, method = ?request.method, "dispatching request");

        let raw = match request.method {
            RequestMethod::Get => {
                self.transport
                    .get(
                        &url,
                        &self.credentials.oauth_token,
                        &self.credentials.oauth_token_secret,
                    )
                    .await?
            }
            RequestMethod::Post => {
                self.transport
                    .post(
                        &url,
                        &self.credentials.oauth_token,
                        &self.credentials.oauth_token_secret,
                        request.body.as_deref().unwrap_or(""),
                    )
                    .await?
            }
        };

        self.normalize(raw)
    }

    /// Branch on the configured format: parse JSON, pass XML through.
    fn normalize(&self, raw: String) -> ApiResult<ApiResponse> {
        match self.response_format {
            ResponseFormat::Xml => Ok(ApiResponse::Xml(raw)),
            ResponseFormat::Json => serde_json::from_str(&raw)
                .map(ApiResponse::Json)
                .map_err(|e| ApiError::MalformedResponse(e.to_string())),
        }
    }

    fn require_id(id: &str) -> ApiResult<()> {
        if id.is_empty() {
            return Err(ApiError::MissingRequiredField("account id"));
        }
        Ok(())
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Get the account summary list, or a single account when an id is given.
    pub async fn accounts(&self, id: Option<&str>) -> ApiResult<ApiResponse> {
        match id {
            Some(id) if !id.is_empty() => {
                self.call(EndpointRequest::get(format!(
                    "accounts/{}",
                    urlencoding::encode(id)
                )))
                .await
            }
            _ => self.call(EndpointRequest::get("accounts")).await,
        }
    }

    /// Get balances across all accounts.
    pub async fn account_balances(&self) -> ApiResult<ApiResponse> {
        self.call(EndpointRequest::get("accounts/balances")).await
    }

    /// Get open and recent orders for one account.
    pub async fn account_orders(&self, id: &str) -> ApiResult<ApiResponse> {
        Self::require_id(id)?;
        self.call(EndpointRequest::get(format!(
            "accounts/{}/orders",
            urlencoding::encode(id)
        )))
        .await
    }

    /// Submit an order for one account.
    ///
    /// The caller-supplied order body is wrapped in the FIXML envelope and
    /// posted as-is; the payload is opaque to the client.
    pub async fn post_account_order(&self, id: &str, order: &Value) -> ApiResult<ApiResponse> {
        Self::require_id(id)?;
        let body = fixml::envelope(order);
        self.call(EndpointRequest::post(
            format!("accounts/{}/orders", urlencoding::encode(id)),
            body,
        ))
        .await
    }

    /// Get balances for one account.
    pub async fn balance_for_account(&self, id: &str) -> ApiResult<ApiResponse> {
        Self::require_id(id)?;
        self.call(EndpointRequest::get(format!(
            "accounts/{}/balances",
            urlencoding::encode(id)
        )))
        .await
    }

    /// Get transaction history for one account, optionally filtered by date
    /// range and transaction type.
    pub async fn history_for_account(
        &self,
        id: &str,
        range: Option<HistoryRange>,
        transactions: Option<TransactionType>,
    ) -> ApiResult<ApiResponse> {
        Self::require_id(id)?;

        let mut query = QueryBuilder::new();
        query.push_opt("range", range.map(|r| r.as_str().to_string()));
        query.push_opt(
            "transactions",
            transactions.map(|t| t.as_str().to_string()),
        );

        self.call(
            EndpointRequest::get(format!("accounts/{}/history", urlencoding::encode(id)))
                .with_query(query.finish()),
        )
        .await
    }

    /// Get holdings for one account.
    pub async fn holdings_for_account(&self, id: &str) -> ApiResult<ApiResponse> {
        Self::require_id(id)?;
        self.call(EndpointRequest::get(format!(
            "accounts/{}/holdings",
            urlencoding::encode(id)
        )))
        .await
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// Get the market/exchange clock.
    pub async fn market_clock(&self) -> ApiResult<ApiResponse> {
        self.call(EndpointRequest::get("market/clock")).await
    }

    /// Get a ranked market list for one exchange.
    pub async fn market_top_lists(
        &self,
        list_type: TopListType,
        exchange: Exchange,
    ) -> ApiResult<ApiResponse> {
        let mut query = QueryBuilder::new();
        query.push("exchange", exchange.as_str());

        self.call(
            EndpointRequest::get(format!("market/toplists/{}", list_type.as_str()))
                .with_query(query.finish()),
        )
        .await
    }

    /// Search news articles for one or more symbols.
    pub async fn market_news_search(&self, params: NewsSearchParams) -> ApiResult<ApiResponse> {
        params.symbols.validate("symbols")?;

        let mut query = QueryBuilder::new();
        query.push("symbols", &params.symbols.to_query_value());
        query.push_count("maxhits", params.maxhits.unwrap_or(DEFAULT_NEWS_MAXHITS));
        query.push_opt("startdate", params.startdate.map(|d| d.to_string()));
        query.push_opt("enddate", params.enddate.map(|d| d.to_string()));

        self.call(EndpointRequest::get("market/news/search").with_query(query.finish()))
            .await
    }

    /// Get quotes for one or more symbols.
    ///
    /// Streaming requests route to the push host via `market/quotes`;
    /// snapshot requests use `market/ext/quotes`.
    pub async fn market_quotes(&self, params: QuoteParams) -> ApiResult<ApiResponse> {
        params.symbols.validate("symbols")?;
        if let Some(fids) = &params.fids {
            fids.validate("fids")?;
        }

        let mut query = QueryBuilder::new();
        query.push("symbols", &params.symbols.to_query_value());
        query.push_opt("fids", params.fids.as_ref().map(SymbolList::to_query_value));

        let resource = if params.stream {
            "market/quotes"
        } else {
            "market/ext/quotes"
        };

        self.call(
            EndpointRequest::get(resource)
                .with_query(query.finish())
                .streaming(params.stream),
        )
        .await
    }

    /// Get streaming quotes for one or more symbols.
    ///
    /// Forces the stream flag regardless of what the params carry.
    pub async fn stream_market_quotes(&self, mut params: QuoteParams) -> ApiResult<ApiResponse> {
        params.stream = true;
        self.market_quotes(params).await
    }

    // =========================================================================
    // Member / utility endpoints
    // =========================================================================

    /// Get the member profile for the authenticated user.
    pub async fn member_profile(&self) -> ApiResult<ApiResponse> {
        self.call(EndpointRequest::get("member/profile")).await
    }

    /// Get API service status.
    pub async fn utility_status(&self) -> ApiResult<ApiResponse> {
        self.call(EndpointRequest::get("utility/status")).await
    }

    // =========================================================================
    // Watchlist endpoints
    // =========================================================================

    /// Get all watchlists, or the contents of one when a name is given.
    pub async fn watchlists(&self, name: Option<&str>) -> ApiResult<ApiResponse> {
        match name {
            Some(name) if !name.is_empty() => {
                self.call(EndpointRequest::get(format!(
                    "watchlists/{}",
                    urlencoding::encode(name)
                )))
                .await
            }
            _ => self.call(EndpointRequest::get("watchlists")).await,
        }
    }

    /// Create a watchlist with the given name and initial symbols.
    pub async fn new_watchlist(
        &self,
        name: &str,
        symbols: &SymbolList,
    ) -> ApiResult<ApiResponse> {
        if name.is_empty() {
            return Err(ApiError::MissingRequiredField("name"));
        }
        symbols.validate("symbols")?;

        let mut query = QueryBuilder::new();
        query.push("id", name);
        query.push("symbols", &symbols.to_query_value());

        self.call(
            EndpointRequest::post("watchlists", String::new()).with_query(query.finish()),
        )
        .await
    }
}

/// Rewrite the first case-insensitive `api` occurrence in the host authority
/// to `stream`.
///
/// The substitution is scoped to the host segment so resource paths that
/// happen to contain `api` are never touched.
fn rewrite_stream_host(url: &str) -> String {
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, url),
    };
    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, Some(path)),
        None => (rest, None),
    };

    let lowered = host.to_ascii_lowercase();
    let pos = match lowered.find("api") {
        Some(pos) => pos,
        None => return url.to_string(),
    };

    let mut out = String::with_capacity(url.len() + 3);
    if let Some(scheme) = scheme {
        out.push_str(scheme);
        out.push_str("://");
    }
    out.push_str(&host[..pos]);
    out.push_str("stream");
    out.push_str(&host[pos + 3..]);
    if let Some(path) = path {
        out.push('/');
        out.push_str(path);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TradekingApiClient {
        TradekingApiClient::new(Credentials::new("ck", "cs", "tok", "tok-secret")).unwrap()
    }

    #[test]
    fn test_build_rejects_incomplete_credentials() {
        let err = TradekingApiClient::new(Credentials::new("ck", "", "tok", "tok-secret"))
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = TradekingApiClient::builder(Credentials::new("ck", "cs", "t", "ts"))
            .base_url("https://api.example.com/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_endpoint_url_basic() {
        let client = client();
        assert_eq!(
            client.endpoint_url("accounts", None, false),
            "https://api.tradeking.com/v1/accounts.json"
        );
    }

    #[test]
    fn test_endpoint_url_with_query() {
        let client = client();
        assert_eq!(
            client.endpoint_url("market/toplists/topgainers", Some("exchange=N"), false),
            "https://api.tradeking.com/v1/market/toplists/topgainers.json?exchange=N"
        );
    }

    #[test]
    fn test_endpoint_url_respects_format() {
        let mut client = client();
        client.set_response_format(ResponseFormat::Xml);
        assert_eq!(
            client.endpoint_url("accounts", None, false),
            "https://api.tradeking.com/v1/accounts.xml"
        );
    }

    #[test]
    fn test_stream_rewrites_host() {
        let client = client();
        assert_eq!(
            client.endpoint_url("market/quotes", Some("symbols=AAPL"), true),
            "https://stream.tradeking.com/v1/market/quotes.json?symbols=AAPL"
        );
    }

    #[test]
    fn test_stream_rewrite_is_scoped_to_host() {
        // "rapid" in the path contains "api" and must survive the rewrite.
        let rewritten =
            rewrite_stream_host("https://api.tradeking.com/v1/market/rapid.json?q=api");
        assert_eq!(
            rewritten,
            "https://stream.tradeking.com/v1/market/rapid.json?q=api"
        );
    }

    #[test]
    fn test_stream_rewrite_without_api_in_host() {
        let rewritten = rewrite_stream_host("https://example.com/v1/api/quotes.json");
        assert_eq!(rewritten, "https://example.com/v1/api/quotes.json");
    }

    #[test]
    fn test_stream_rewrite_is_case_insensitive() {
        let rewritten = rewrite_stream_host("https://API.tradeking.com/v1/quotes.json");
        assert_eq!(rewritten, "https://stream.tradeking.com/v1/quotes.json");
    }

    #[test]
    fn test_set_response_type_lossy() {
        let mut client = client();
        client.set_response_type("xml");
        assert_eq!(client.response_type(), ResponseFormat::Xml);
        client.set_response_type("yaml");
        assert_eq!(client.response_type(), ResponseFormat::Json);
    }

    #[test]
    fn test_normalize_json_and_xml() {
        let mut client = client();
        let parsed = client.normalize(r#"{"ok": true}"#.to_string()).unwrap();
        assert_eq!(parsed.as_json().unwrap()["ok"], serde_json::json!(true));

        client.set_response_format(ResponseFormat::Xml);
        let raw = client.normalize("<response/>".to_string()).unwrap();
        assert_eq!(raw.as_xml(), Some("<response/>"));
    }

    #[test]
    fn test_normalize_rejects_malformed_json() {
        let client = client();
        let err = client.normalize("not json".to_string()).err().unwrap();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }
}
