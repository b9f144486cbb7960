//! Boundary to the external dealer service.
//!
//! Dealers, their reviews, and sentiment analysis are owned by external REST
//! services. This module defines the trait the rest of the system talks to
//! and the pure orchestration on top of it. Payload shapes are owned by the
//! external side, so they are carried as opaque JSON.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Key holding the free-text body of a review in the external payload.
pub const REVIEW_TEXT_KEY: &str = "review";

/// Key under which the analyzer's label is attached to each review.
pub const SENTIMENT_KEY: &str = "sentiment";

/// Failure reported by the external collaborator, surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ExternalServiceError(pub String);

impl From<ExternalServiceError> for CoreError {
    fn from(err: ExternalServiceError) -> Self {
        CoreError::ExternalService(err.0)
    }
}

/// Operations offered by the external dealer/review/sentiment services.
///
/// Every call is a single blocking request-response; implementations must
/// not retry.
#[async_trait]
pub trait DealerService: Send + Sync {
    /// Store a review with the external review backend.
    async fn post_review(&self, review: &Value) -> Result<(), ExternalServiceError>;

    /// All reviews for one dealer.
    async fn dealer_reviews(&self, dealer_id: DbId) -> Result<Vec<Value>, ExternalServiceError>;

    /// Sentiment label (e.g. `"positive"`) for a piece of review text.
    async fn analyze_sentiment(&self, text: &str) -> Result<String, ExternalServiceError>;

    /// All dealers, optionally restricted to one state.
    async fn dealers(&self, state: Option<&str>) -> Result<Vec<Value>, ExternalServiceError>;

    /// One dealer by id.
    async fn dealer(&self, dealer_id: DbId) -> Result<Value, ExternalServiceError>;
}

/// Fetch a dealer's reviews and attach a sentiment label to each.
///
/// Reviews without a text body are passed through untouched. The first
/// failing analyzer call fails the whole operation.
pub async fn dealer_reviews_with_sentiment(
    service: &dyn DealerService,
    dealer_id: DbId,
) -> Result<Vec<Value>, CoreError> {
    let mut reviews = service.dealer_reviews(dealer_id).await?;

    for review in &mut reviews {
        let Some(object) = review.as_object_mut() else {
            continue;
        };
        let Some(text) = object.get(REVIEW_TEXT_KEY).and_then(Value::as_str) else {
            continue;
        };
        let sentiment = service.analyze_sentiment(text).await?;
        object.insert(SENTIMENT_KEY.to_string(), Value::String(sentiment));
    }

    Ok(reviews)
}


#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::testing::RecordingDealerService;
    use super::*;

    #[tokio::test]
    async fn annotates_each_review_with_sentiment() {
        let service = RecordingDealerService {
            reviews: vec![
                json!({ "id": 1, "review": "great service" }),
                json!({ "id": 2, "review": "it was fine" }),
            ],
            ..Default::default()
        };

        let reviews = dealer_reviews_with_sentiment(&service, 15).await.unwrap();

        assert_eq!(reviews[0]["sentiment"], "positive");
        assert_eq!(reviews[1]["sentiment"], "neutral");
        assert_eq!(service.analyzed.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reviews_without_text_are_passed_through() {
        let service = RecordingDealerService {
            reviews: vec![json!({ "id": 1 }), json!("not an object")],
            ..Default::default()
        };

        let reviews = dealer_reviews_with_sentiment(&service, 15).await.unwrap();

        assert_eq!(reviews[0], json!({ "id": 1 }));
        assert_eq!(reviews[1], json!("not an object"));
        assert!(service.analyzed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn analyzer_failure_fails_the_request() {
        let service = RecordingDealerService {
            reviews: vec![json!({ "review": "great" })],
            fail_with: Some("analyzer down".to_string()),
            ..Default::default()
        };

        let err = dealer_reviews_with_sentiment(&service, 15).await.unwrap_err();
        assert_matches!(err, CoreError::ExternalService(msg) if msg == "analyzer down");
    }
}
