//! Review-decision endpoints: approve and reject.
//!
//! Both return the updated submission, but callers discard it and reload
//! the full list instead; there is no optimistic local patching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;

use crate::net::error::CommandError;
use crate::net::types::Submission;
#[cfg(feature = "hydrate")]
use crate::net::types::{Envelope, RejectRequest};

/// Fallback note stored when a reviewer rejects without writing a reason.
pub const DEFAULT_REJECT_REASON: &str = "Tidak ada keterangan";

/// The reviewer's reason, or the fallback note when it is blank.
pub fn reject_reason_or_default(reason: &str) -> &str {
    if reason.trim().is_empty() {
        DEFAULT_REJECT_REASON
    } else {
        reason
    }
}

/// Approve a pending submission via
/// `POST /api/process/submissions/:id/approve`.
///
/// # Errors
///
/// [`CommandError::Server`] with the backend message when one is supplied,
/// [`CommandError::ApproveFailed`] otherwise.
pub async fn approve_submission(id: u64) -> Result<Submission, CommandError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/api/process/submissions/{id}/approve",
            crate::net::api_base_url()
        );
        let resp = crate::net::authorized(gloo_net::http::Request::post(&url))
            .json(&serde_json::json!({}))
            .map_err(|_| CommandError::ApproveFailed)?
            .send()
            .await
            .map_err(|_| CommandError::ApproveFailed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => CommandError::Server(message),
                None => CommandError::ApproveFailed,
            });
        }
        let envelope: Envelope<Submission> =
            resp.json().await.map_err(|_| CommandError::ApproveFailed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(CommandError::ApproveFailed)
    }
}

/// Reject a pending submission with a reason via
/// `POST /api/process/submissions/:id/reject`.
///
/// # Errors
///
/// Same contract as [`approve_submission`], with
/// [`CommandError::RejectFailed`] as the fallback.
pub async fn reject_submission(id: u64, reason: &str) -> Result<Submission, CommandError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/api/process/submissions/{id}/reject",
            crate::net::api_base_url()
        );
        let body = RejectRequest {
            reason: reason.to_owned(),
        };
        let resp = crate::net::authorized(gloo_net::http::Request::post(&url))
            .json(&body)
            .map_err(|_| CommandError::RejectFailed)?
            .send()
            .await
            .map_err(|_| CommandError::RejectFailed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => CommandError::Server(message),
                None => CommandError::RejectFailed,
            });
        }
        let envelope: Envelope<Submission> =
            resp.json().await.map_err(|_| CommandError::RejectFailed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, reason);
        Err(CommandError::RejectFailed)
    }
}
