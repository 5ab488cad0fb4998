//! Root application component with routing, guards, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAuth, RequireRole};
use crate::components::layout::Layout;
use crate::net::token;
use crate::net::types::Role;
use crate::pages::{
    dashboard_dosen::DashboardDosen, dashboard_mahasiswa::DashboardMahasiswa, home::HomePage,
    login::LoginPage, not_found::NotFoundPage,
};
use crate::state::auth::AuthState;
use crate::state::session;

const MAHASISWA_ONLY: &[Role] = &[Role::Mahasiswa];
const DOSEN_ONLY: &[Role] = &[Role::Dosen];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, restores the persisted session once
/// on mount, and sets up client-side routing. Guards hold their redirect
/// decision until the restore flips `loading` to false, so a reload never
/// bounces a logged-in user to the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // One-shot restore of the persisted session. The credential header is
    // synchronized before the state update becomes visible.
    Effect::new(move || {
        let restored = session::restore();
        token::set_auth_token(restored.token.as_deref());
        auth.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/finalease.css"/>
        <Title text="FinalEase"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("mahasiswa"), StaticSegment("dashboard"))
                        view=MahasiswaDashboardRoute
                    />
                    <Route
                        path=(StaticSegment("dosen"), StaticSegment("dashboard"))
                        view=DosenDashboardRoute
                    />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Student dashboard behind the authentication guard and the Mahasiswa
/// role guard, composed in that order.
#[component]
fn MahasiswaDashboardRoute() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole allowed=MAHASISWA_ONLY>
                <DashboardMahasiswa/>
            </RequireRole>
        </RequireAuth>
    }
}

/// Reviewer dashboard behind the authentication guard and the Dosen
/// role guard.
#[component]
fn DosenDashboardRoute() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole allowed=DOSEN_ONLY>
                <DashboardDosen/>
            </RequireRole>
        </RequireAuth>
    }
}
