//! REST API client for the FinalEase backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from [`token`] attached to every authenticated request.
//! Server-side (SSR): stubs returning the generic failure for each
//! operation, since these endpoints are only meaningful in the browser.
//!
//! All successful responses arrive wrapped in a `{ "data": … }` envelope
//! ([`types::Envelope`]); error responses may carry a user-displayable
//! `message` field which takes precedence over the generic fallback.

pub mod auth;
pub mod error;
pub mod process;
pub mod submissions;
pub mod token;
pub mod types;

/// Base URL of the backend, fixed at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("FINALEASE_API_BASE_URL").unwrap_or("http://localhost:3000")
}

/// Attach the current bearer token to a request, if one is set.
#[cfg(feature = "hydrate")]
pub(crate) fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::bearer() {
        Some(value) => req.header("Authorization", &value),
        None => req,
    }
}

/// Extract the backend-supplied `message` from an error response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn response_message(resp: gloo_net::http::Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    resp.json::<ErrorBody>().await.ok().and_then(|body| body.message)
}
