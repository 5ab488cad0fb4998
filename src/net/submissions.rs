//! Submission query/command endpoints: list, get, create.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use crate::net::error::{FetchError, ValidationError};
use crate::net::types::Submission;
#[cfg(feature = "hydrate")]
use crate::net::error::CommandError;
#[cfg(feature = "hydrate")]
use crate::net::types::Envelope;

/// Fetch the full submission list via `GET /api/submissions`. Scoping to
/// the student's own rows happens client-side for display; the backend
/// enforces it for real.
///
/// # Errors
///
/// [`FetchError::Server`] with the backend message when one is supplied,
/// [`FetchError::Failed`] otherwise.
pub async fn fetch_submissions() -> Result<Vec<Submission>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/submissions", crate::net::api_base_url());
        let resp = crate::net::authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|_| FetchError::Failed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => FetchError::Server(message),
                None => FetchError::Failed,
            });
        }
        let envelope: Envelope<Vec<Submission>> =
            resp.json().await.map_err(|_| FetchError::Failed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Failed)
    }
}

/// Fetch a single submission via `GET /api/submissions/:id`.
///
/// # Errors
///
/// Same contract as [`fetch_submissions`].
pub async fn fetch_submission(id: u64) -> Result<Submission, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/submissions/{id}", crate::net::api_base_url());
        let resp = crate::net::authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|_| FetchError::Failed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => FetchError::Server(message),
                None => FetchError::Failed,
            });
        }
        let envelope: Envelope<Submission> = resp.json().await.map_err(|_| FetchError::Failed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(FetchError::Failed)
    }
}

/// Client-side precondition for [`create_submission`]: the PDF file is
/// required. Checked before any request is issued.
///
/// # Errors
///
/// [`ValidationError::MissingFile`] when no file is selected.
pub fn validate_new_submission(has_file: bool) -> Result<(), ValidationError> {
    if has_file {
        Ok(())
    } else {
        Err(ValidationError::MissingFile)
    }
}

/// Create a submission via multipart `POST /api/submissions` with `title`,
/// optional `description`, and the PDF `file`.
///
/// # Errors
///
/// [`CommandError::Server`] with the backend message when one is supplied,
/// [`CommandError::CreateFailed`] otherwise.
#[cfg(feature = "hydrate")]
pub async fn create_submission(
    title: &str,
    description: &str,
    file: &web_sys::File,
) -> Result<Submission, CommandError> {
    let form = web_sys::FormData::new().map_err(|_| CommandError::CreateFailed)?;
    form.append_with_str("title", title)
        .map_err(|_| CommandError::CreateFailed)?;
    if !description.trim().is_empty() {
        form.append_with_str("description", description)
            .map_err(|_| CommandError::CreateFailed)?;
    }
    // The browser sets the multipart content type (with boundary) itself.
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| CommandError::CreateFailed)?;

    let url = format!("{}/api/submissions", crate::net::api_base_url());
    let resp = crate::net::authorized(gloo_net::http::Request::post(&url))
        .body(form)
        .map_err(|_| CommandError::CreateFailed)?
        .send()
        .await
        .map_err(|_| CommandError::CreateFailed)?;
    if !resp.ok() {
        return Err(match crate::net::response_message(resp).await {
            Some(message) => CommandError::Server(message),
            None => CommandError::CreateFailed,
        });
    }
    let envelope: Envelope<Submission> =
        resp.json().await.map_err(|_| CommandError::CreateFailed)?;
    Ok(envelope.data)
}
