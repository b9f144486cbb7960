//! REST client for the dealer/review backend and the sentiment analyzer.
//!
//! Wraps the two external HTTP services behind [`DealerService`] using
//! [`reqwest`]. Every operation is exactly one request; failures are
//! reported, never retried.

use async_trait::async_trait;
use dealership_core::dealer::{DealerService, ExternalServiceError, SENTIMENT_KEY};
use dealership_core::types::DbId;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

/// HTTP client for the dealer backend and the sentiment analyzer.
#[derive(Clone)]
pub struct DealerApi {
    client: reqwest::Client,
    backend_url: String,
    sentiment_url: String,
}

/// Response returned by the analyzer's `/analyze/{text}` endpoint.
#[derive(Debug, Deserialize)]
struct SentimentResponse {
    sentiment: String,
}

/// Errors from the outbound REST layer.
#[derive(Debug, thiserror::Error)]
pub enum DealerApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote service returned a non-2xx status code.
    #[error("Dealer service error ({status}): {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from dealer service: {0}")]
    Decode(String),

    /// A configured base URL cannot be used to build request URLs.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl From<DealerApiError> for ExternalServiceError {
    fn from(err: DealerApiError) -> Self {
        ExternalServiceError(err.to_string())
    }
}

impl DealerApi {
    /// Create a client for the given service base URLs.
    ///
    /// * `backend_url` - Dealer/review backend, e.g. `http://host:3030`.
    /// * `sentiment_url` - Sentiment analyzer, e.g. `http://host:5050`.
    pub fn new(backend_url: String, sentiment_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url, sentiment_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        backend_url: String,
        sentiment_url: String,
    ) -> Self {
        Self {
            client,
            backend_url,
            sentiment_url,
        }
    }

    /// Store a review. Sends `POST /insert_review` with the payload as-is.
    pub async fn insert_review(&self, review: &Value) -> Result<(), DealerApiError> {
        let url = endpoint(&self.backend_url, &["insert_review"])?;
        let response = self.client.post(url).json(review).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// All reviews of one dealer. Sends `GET /fetchReviews/dealer/{id}`.
    pub async fn fetch_reviews(&self, dealer_id: DbId) -> Result<Vec<Value>, DealerApiError> {
        let id = dealer_id.to_string();
        let url = endpoint(&self.backend_url, &["fetchReviews", "dealer", &id])?;
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }

    /// All dealers, or only those in `state`.
    ///
    /// Sends `GET /fetchDealers` or `GET /fetchDealers/{state}`.
    pub async fn fetch_dealers(&self, state: Option<&str>) -> Result<Vec<Value>, DealerApiError> {
        let url = match state {
            Some(state) => endpoint(&self.backend_url, &["fetchDealers", state])?,
            None => endpoint(&self.backend_url, &["fetchDealers"])?,
        };
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }

    /// One dealer. Sends `GET /fetchDealer/{id}`; the body is returned untouched.
    pub async fn fetch_dealer(&self, dealer_id: DbId) -> Result<Value, DealerApiError> {
        let id = dealer_id.to_string();
        let url = endpoint(&self.backend_url, &["fetchDealer", &id])?;
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }

    /// Sentiment label for `text`. Sends `GET /analyze/{text}` to the analyzer.
    pub async fn analyze(&self, text: &str) -> Result<String, DealerApiError> {
        let url = endpoint(&self.sentiment_url, &["analyze", text])?;
        let response = self.client.get(url).send().await?;
        let body: Value = parse_response(response).await?;
        serde_json::from_value::<SentimentResponse>(body)
            .map(|r| r.sentiment)
            .map_err(|e| DealerApiError::Decode(format!("missing '{SENTIMENT_KEY}': {e}")))
    }
}

#[async_trait]
impl DealerService for DealerApi {
    async fn post_review(&self, review: &Value) -> Result<(), ExternalServiceError> {
        self.insert_review(review).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to post review");
            e.into()
        })
    }

    async fn dealer_reviews(&self, dealer_id: DbId) -> Result<Vec<Value>, ExternalServiceError> {
        self.fetch_reviews(dealer_id).await.map_err(|e| {
            tracing::warn!(error = %e, dealer_id, "Failed to fetch dealer reviews");
            e.into()
        })
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<String, ExternalServiceError> {
        self.analyze(text).await.map_err(|e| {
            tracing::warn!(error = %e, "Sentiment analysis failed");
            e.into()
        })
    }

    async fn dealers(&self, state: Option<&str>) -> Result<Vec<Value>, ExternalServiceError> {
        self.fetch_dealers(state).await.map_err(|e| {
            tracing::warn!(error = %e, ?state, "Failed to fetch dealers");
            e.into()
        })
    }

    async fn dealer(&self, dealer_id: DbId) -> Result<Value, ExternalServiceError> {
        self.fetch_dealer(dealer_id).await.map_err(|e| {
            tracing::warn!(error = %e, dealer_id, "Failed to fetch dealer");
            e.into()
        })
    }
}

// ---- private helpers ----

/// Append percent-encoded path segments to a base URL.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, DealerApiError> {
    let mut url =
        Url::parse(base).map_err(|e| DealerApiError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| DealerApiError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Return the response unchanged on a 2xx status, otherwise an
/// [`DealerApiError::HttpStatus`] carrying the status and body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DealerApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(DealerApiError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DealerApiError> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| DealerApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let url = endpoint("http://localhost:3030", &["fetchReviews", "dealer", "15"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3030/fetchReviews/dealer/15");

        let url = endpoint("http://host/api/", &["fetchDealers"]).unwrap();
        assert_eq!(url.as_str(), "http://host/api/fetchDealers");
    }

    #[test]
    fn endpoint_encodes_free_text() {
        let url = endpoint("http://localhost:5050", &["analyze", "good/bad service?"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5050/analyze/good%2Fbad%20service%3F"
        );
    }

    #[test]
    fn endpoint_rejects_unusable_base() {
        assert!(matches!(
            endpoint("not a url", &["x"]),
            Err(DealerApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            endpoint("mailto:dealer@example.com", &["x"]),
            Err(DealerApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn api_error_converts_to_external_message() {
        let err = DealerApiError::HttpStatus {
            status: 503,
            body: "down".to_string(),
        };
        let external: ExternalServiceError = err.into();
        assert_eq!(external.0, "Dealer service error (503): down");
    }
}
