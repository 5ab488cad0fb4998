//! Shared transport credential.
//!
//! Holds the bearer token attached to every authenticated request. The
//! holder always reflects the current session: `login`/`register` set it
//! before persisting, `logout` clears it first, so no request is ever sent
//! with a stale token.

use std::cell::RefCell;

thread_local! {
    static AUTH_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Replace (or clear) the transport credential.
pub fn set_auth_token(token: Option<&str>) {
    AUTH_TOKEN.with(|slot| *slot.borrow_mut() = token.map(str::to_owned));
}

/// The currently installed token, if any.
pub fn auth_token() -> Option<String> {
    AUTH_TOKEN.with(|slot| slot.borrow().clone())
}

/// The current token as an `Authorization` header value.
pub fn bearer() -> Option<String> {
    auth_token().map(|token| format!("Bearer {token}"))
}
