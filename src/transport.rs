//! Signed HTTP transport boundary.
//!
//! The client core never constructs signatures itself: it hands a fully-built
//! URL (and, for writes, a body) to a [`SignedTransport`] together with the
//! per-user token pair, and gets back raw response text or a
//! [`TransportError`]. The default [`OAuthTransport`] signs each request with
//! an OAuth 1.0a HMAC-SHA1 `Authorization` header over `reqwest`; tests and
//! alternative signers substitute their own implementation through the
//! client builder.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;
use thiserror::Error;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport-level error surfaced to the caller unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API host
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

/// Authenticated request capability bound to an application identity.
///
/// One call maps to exactly one request; the transport offers no retry,
/// batching, or pooling semantics of its own beyond what its HTTP client
/// provides. Implementations receive the per-user token pair on every call
/// because the token is not part of the transport's own identity.
#[async_trait]
pub trait SignedTransport: Send + Sync + std::fmt::Debug {
    /// Perform a signed GET and return the raw response body.
    async fn get(
        &self,
        url: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<String, TransportError>;

    /// Perform a signed POST with the given body and return the raw
    /// response body.
    async fn post(
        &self,
        url: &str,
        token: &str,
        token_secret: &str,
        body: &str,
    ) -> Result<String, TransportError>;
}

/// Default OAuth 1.0a HMAC-SHA1 signing transport.
#[derive(Clone)]
pub struct OAuthTransport {
    http: reqwest::Client,
    consumer_key: String,
    consumer_secret: String,
}

impl std::fmt::Debug for OAuthTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTransport")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

impl OAuthTransport {
    /// Create a transport bound to the application consumer key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        })
    }

    /// Build the `Authorization: OAuth …` header value for one request.
    fn authorization_header(
        &self,
        method: &str,
        url: &str,
        token: &str,
        token_secret: &str,
    ) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
            .to_string();
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        let oauth_params = [
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce.as_str()),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", token),
            ("oauth_version", "1.0"),
        ];

        let base = signature_base_string(method, url, &oauth_params);
        let signature = hmac_sha1_signature(&base, &self.consumer_secret, token_secret);

        format!(
            "OAuth oauth_consumer_key=\"{}\", oauth_nonce=\"{}\", oauth_signature=\"{}\", \
             oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"{}\", oauth_token=\"{}\", \
             oauth_version=\"1.0\"",
            percent_encode(&self.consumer_key),
            nonce,
            percent_encode(&signature),
            timestamp,
            percent_encode(token),
        )
    }

    async fn read_body(response: reqwest::Response) -> Result<String, TransportError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl SignedTransport for OAuthTransport {
    async fn get(
        &self,
        url: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<String, TransportError> {
        tracing::debug!(%url, "dispatching signed GET");
        let authorization = self.authorization_header("GET", url, token, token_secret);
        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await?;
        Self::read_body(response).await
    }

    async fn post(
        &self,
        url: &str,
        token: &str,
        token_secret: &str,
        body: &str,
    ) -> Result<String, TransportError> {
        tracing::debug!(%url, body_len = body.len(), "dispatching signed POST");
        let authorization = self.authorization_header("POST", url, token, token_secret);
        let mut request = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization);
        if !body.is_empty() {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/xml")
                .body(body.to_string());
        }
        let response = request.send().await?;
        Self::read_body(response).await
    }
}

/// RFC 3986 percent-encoding as required for signature material.
fn percent_encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Normalize request parameters into the OAuth signature base string.
///
/// Query parameters are decoded, re-encoded, merged with the protocol
/// parameters, sorted, and joined per the signing rules. Non-form request
/// bodies are excluded by the protocol.
fn signature_base_string(method: &str, url: &str, oauth_params: &[(&str, &str)]) -> String {
    let (base_uri, query) = match url.split_once('?') {
        Some((uri, query)) => (uri, Some(query)),
        None => (url, None),
    };

    let mut params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .collect();

    if let Some(query) = query {
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.push((
                percent_encode(&decode_component(name)),
                percent_encode(&decode_component(value)),
            ));
        }
    }

    params.sort();

    let normalized = params
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method,
        percent_encode(base_uri),
        percent_encode(&normalized)
    )
}

/// Sign the base string with the joined secret key.
fn hmac_sha1_signature(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference request from the OAuth Core 1.0 signing example.
    const EXAMPLE_URL: &str = "http://photos.example.net/photos?file=vacation.jpg&size=original";
    const EXAMPLE_OAUTH_PARAMS: [(&str, &str); 6] = [
        ("oauth_consumer_key", "dpf43f3p2l4k3l03"),
        ("oauth_nonce", "kllo9940pd9333jh"),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", "1191242096"),
        ("oauth_token", "nnch734d00sl2jdk"),
        ("oauth_version", "1.0"),
    ];

    #[test]
    fn test_signature_base_string_matches_reference() {
        let base = signature_base_string("GET", EXAMPLE_URL, &EXAMPLE_OAUTH_PARAMS);
        assert_eq!(
            base,
            "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26\
             oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26\
             oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26\
             oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal"
        );
    }

    #[test]
    fn test_hmac_sha1_signature_matches_reference() {
        let base = signature_base_string("GET", EXAMPLE_URL, &EXAMPLE_OAUTH_PARAMS);
        let signature = hmac_sha1_signature(&base, "kd94hf93k423kf44", "pfkkdhi9sl3r4s00");
        assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
    }

    #[test]
    fn test_base_string_without_query() {
        let base = signature_base_string("GET", "https://api.example.com/v1/accounts.json", &[]);
        assert_eq!(base, "GET&https%3A%2F%2Fapi.example.com%2Fv1%2Faccounts.json&");
    }

    #[test]
    fn test_query_values_are_reencoded_for_signing() {
        let base = signature_base_string(
            "GET",
            "https://api.example.com/v1/market/ext/quotes.json?symbols=AAPL,MSFT",
            &[],
        );
        // Literal commas in the transmitted query must be encoded in the
        // signature material.
        assert!(base.ends_with("&symbols%3DAAPL%252CMSFT"));
    }

    #[test]
    fn test_authorization_header_shape() {
        let transport = OAuthTransport::new("ck", "cs").unwrap();
        let header = transport.authorization_header(
            "GET",
            "https://api.example.com/v1/accounts.json",
            "tok",
            "tok-secret",
        );
        assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_token=\"tok\""));
        assert!(header.contains("oauth_version=\"1.0\""));
        assert!(header.contains("oauth_signature=\""));
    }
}
