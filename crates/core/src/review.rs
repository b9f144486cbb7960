//! Review submission gateway.
//!
//! Forwards a caller-supplied review to the external review backend on
//! behalf of an authenticated caller. Submitting requires a [`ReviewPermit`],
//! which only an authenticated [`CallerIdentity`] can obtain, so anonymous
//! callers are turned away before the payload is even read. The gateway keeps
//! no local state, so a failed post leaves nothing behind.

use serde_json::Value;

use crate::dealer::DealerService;
use crate::error::CoreError;
use crate::types::DbId;

/// Who is calling, as established by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerIdentity {
    Anonymous,
    Authenticated { user_id: DbId, role: String },
}

impl CallerIdentity {
    /// The one authorization check for review submission.
    pub fn authorize_review(&self) -> Result<ReviewPermit, CoreError> {
        match self {
            CallerIdentity::Authenticated { user_id, .. } => Ok(ReviewPermit { user_id: *user_id }),
            CallerIdentity::Anonymous => Err(CoreError::Forbidden("Unauthorized".to_string())),
        }
    }
}

/// Proof that the caller may submit a review.
#[derive(Debug)]
pub struct ReviewPermit {
    user_id: DbId,
}

impl ReviewPermit {
    pub fn user_id(&self) -> DbId {
        self.user_id
    }
}

/// Submit a review through the external service.
///
/// Single attempt: an external failure is returned as
/// [`CoreError::ExternalService`] immediately, with no retry.
pub async fn submit_review(
    service: &dyn DealerService,
    _permit: &ReviewPermit,
    review: &Value,
) -> Result<(), CoreError> {
    service.post_review(review).await?;
    Ok(())
}
