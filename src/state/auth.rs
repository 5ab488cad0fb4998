//! Authentication state and the route-authorization decision machine.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::token;
use crate::net::types::{AuthResponse, Role, User};
use crate::state::session;

/// The client's record of the currently authenticated identity.
///
/// `user` and `token` are always both present or both absent. `loading` is
/// true only from process start until the initial session restore
/// completes; it is the only transient value.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// No session, restore finished.
    pub fn empty() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    /// A fully populated session.
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }
}

/// Outcome of evaluating the guards for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Initial restore still running; render a placeholder, never redirect.
    Loading,
    /// No session; send to the login page.
    RedirectLogin,
    /// Session exists but the role is not allowed; send to the landing route.
    RedirectHome,
    /// Render the guarded content.
    Allow,
}

/// Decide whether a navigation attempt may render.
///
/// The authentication check always precedes the role check: a missing
/// session redirects to login even when a role set is given. `None` for
/// `allowed_roles` means any authenticated session is enough.
pub fn decide(state: &AuthState, allowed_roles: Option<&[Role]>) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &state.user else {
        return RouteDecision::RedirectLogin;
    };
    match allowed_roles {
        Some(roles) if !roles.contains(&user.role) => RouteDecision::RedirectHome,
        _ => RouteDecision::Allow,
    }
}

/// Where the landing route `/` sends a visitor: the dashboard matching the
/// session's role, or the login page when there is no session.
pub fn landing_route(user: Option<&User>) -> &'static str {
    match user {
        Some(user) => user.role.dashboard_route(),
        None => "/login",
    }
}

/// Install a successful credential exchange into the session.
///
/// Ordering is part of the contract: the transport header is updated
/// first, then the record is persisted, then the in-memory state changes.
/// A request issued right after the caller resumes therefore always
/// carries the new token.
pub fn handle_auth_success(state: &mut AuthState, resp: AuthResponse) {
    token::set_auth_token(Some(&resp.token));
    session::persist(&resp.user, &resp.token);
    state.user = Some(resp.user);
    state.token = Some(resp.token);
    state.loading = false;
}

/// Tear the session down: transport header, persisted record, and
/// in-memory state, in that order. Never fails.
pub fn handle_logout(state: &mut AuthState) {
    token::set_auth_token(None);
    session::clear();
    *state = AuthState::empty();
}
