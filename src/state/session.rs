//! Durable session store backed by `localStorage`.
//!
//! One namespaced record holds `{user, token}` as a JSON blob, written
//! atomically on login/register and removed on logout. Restoring never
//! fails: an absent or malformed record yields the empty session.
//!
//! The encode/decode format logic is separate from the storage I/O so it
//! runs under test on the native target; only the raw reads/writes need a
//! browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "finalease_auth";

/// Persisted shape: both fields together, never one without the other.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user: User,
    token: String,
}

fn encode(user: &User, token: &str) -> Option<String> {
    serde_json::to_string(&StoredSession {
        user: user.clone(),
        token: token.to_owned(),
    })
    .ok()
}

fn decode(raw: &str) -> Option<(User, String)> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .map(|stored| (stored.user, stored.token))
}

/// Restore the persisted session, or the empty state when there is none or
/// the record does not round-trip. `loading` is false either way.
pub fn restore() -> AuthState {
    match read_raw() {
        Some(raw) => match decode(&raw) {
            Some((user, token)) => AuthState::authenticated(user, token),
            None => {
                #[cfg(feature = "hydrate")]
                log::warn!("discarding malformed persisted session");
                AuthState::empty()
            }
        },
        None => AuthState::empty(),
    }
}

/// Write the session record. Both fields are encoded into one blob, so a
/// partial write cannot happen.
pub fn persist(user: &User, token: &str) {
    if let Some(raw) = encode(user, token) {
        write_raw(&raw);
    }
}

/// Remove the session record.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

fn read_raw() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                return Some(raw);
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn write_raw(raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
    }
}
