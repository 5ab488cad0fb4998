//! Credential-exchange endpoints: login and register.
//!
//! These do not attach the credential header (they are how the credential
//! is obtained). Installing the resulting session is the caller's job, via
//! [`crate::state::auth::handle_auth_success`].

#![allow(clippy::unused_async)]

use crate::net::error::AuthError;
use crate::net::types::AuthResponse;
#[cfg(feature = "hydrate")]
use crate::net::types::{Envelope, LoginRequest, RegisterRequest};
use crate::net::types::Role;

/// Exchange email/password for a `(user, token)` pair via
/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`AuthError::Server`] with the backend message when the backend
/// rejects the credentials and supplies one, [`AuthError::LoginFailed`]
/// otherwise (unreachable backend, malformed response).
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/auth/login", crate::net::api_base_url());
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|_| AuthError::LoginFailed)?
            .send()
            .await
            .map_err(|_| AuthError::LoginFailed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => AuthError::Server(message),
                None => AuthError::LoginFailed,
            });
        }
        let envelope: Envelope<AuthResponse> =
            resp.json().await.map_err(|_| AuthError::LoginFailed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::LoginFailed)
    }
}

/// Register a new account via `POST /api/auth/register`. `role` is
/// server-assigned when `None`.
///
/// # Errors
///
/// Same contract as [`login`], with [`AuthError::RegisterFailed`] as the
/// fallback.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    role: Option<Role>,
) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/auth/register", crate::net::api_base_url());
        let body = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role,
        };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|_| AuthError::RegisterFailed)?
            .send()
            .await
            .map_err(|_| AuthError::RegisterFailed)?;
        if !resp.ok() {
            return Err(match crate::net::response_message(resp).await {
                Some(message) => AuthError::Server(message),
                None => AuthError::RegisterFailed,
            });
        }
        let envelope: Envelope<AuthResponse> =
            resp.json().await.map_err(|_| AuthError::RegisterFailed)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, role);
        Err(AuthError::RegisterFailed)
    }
}
