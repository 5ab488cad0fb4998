//! Route guard components.
//!
//! Two guards compose by nesting, authentication outermost: `RequireAuth`
//! admits any session, `RequireRole` additionally checks membership in an
//! allowed-role set. Both render a neutral placeholder while the initial
//! session restore is running, so a reload never flashes a redirect to the
//! login page. The decision logic itself lives in
//! [`crate::state::auth::decide`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthState, RouteDecision, decide};

/// Requires any authenticated session; redirects to `/login` otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(None, children)
}

/// Requires an authenticated session whose role is in `allowed`. Sessions
/// with the wrong role are sent back to the landing route, which fans out
/// to the dashboard they do belong on.
#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    guarded(Some(allowed), children)
}

fn guarded(allowed: Option<&'static [Role]>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| decide(&auth.get(), allowed));

    Effect::new(move || {
        let target = match decision.get() {
            RouteDecision::RedirectLogin => "/login",
            RouteDecision::RedirectHome => "/",
            RouteDecision::Loading | RouteDecision::Allow => return,
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    move || match decision.get() {
        RouteDecision::Allow => children().into_any(),
        RouteDecision::Loading => view! { <div class="main-area">"Loading..."</div> }.into_any(),
        RouteDecision::RedirectLogin | RouteDecision::RedirectHome => ().into_any(),
    }
}
