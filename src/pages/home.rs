//! Landing route: fan out to the dashboard matching the session's role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, landing_route};

/// `/` renders nothing of its own: authenticated users are sent to the
/// dashboard for their role, everyone else to the login page. No decision
/// is made until the initial restore completes.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        navigate(
            landing_route(state.user.as_ref()),
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    view! { <div class="main-area">"Loading..."</div> }
}
