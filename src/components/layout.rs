//! Application shell: sidebar with role-aware navigation and logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::auth::{AuthState, handle_logout};

/// Avatar initials: first letter of up to two name parts, uppercased.
/// Falls back to the product initials when the name is empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "FE".to_owned()
    } else {
        letters.to_uppercase()
    }
}

/// Shell around every page. Authenticated users get the sidebar with the
/// dashboard link for their role and the logout button; everyone else gets
/// the bare main area (the login page renders without chrome).
#[component]
pub fn Layout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Clearing the session is enough; the guard on the current page
    // redirects to /login once the state updates.
    let on_logout = move |_| auth.update(handle_logout);

    move || {
        let state = auth.get();
        match state.user {
            None => view! { <div class="layout-main-only">{children()}</div> }.into_any(),
            Some(user) => {
                let (dashboard_href, dashboard_icon, dashboard_label) = match user.role {
                    Role::Mahasiswa => ("/mahasiswa/dashboard", "🎓", "Dashboard Mahasiswa"),
                    Role::Dosen => ("/dosen/dashboard", "📋", "Dashboard Dosen"),
                };

                view! {
                    <div class="layout app-root">
                        <aside class="sidebar">
                            <div class="sidebar-logo">
                                <img src="/Logo.png" alt="FinalEase Logo" class="sidebar-logo-image"/>
                                <div class="sidebar-title">
                                    <span class="sidebar-title-main">"FinalEase"</span>
                                    <span class="sidebar-title-sub">"Submission workflow"</span>
                                    <span class="badge-role">
                                        <span class="dot"></span>
                                        {user.role.label()}
                                    </span>
                                </div>
                            </div>

                            <div>
                                <div class="sidebar-section-label">"Dashboard"</div>
                                <nav class="sidebar-menu">
                                    <A href=dashboard_href attr:class="sidebar-link">
                                        <span class="icon">{dashboard_icon}</span>
                                        <span>{dashboard_label}</span>
                                    </A>
                                </nav>
                            </div>

                            <div class="sidebar-footer">
                                <div>"Signed in as"</div>
                                <div class="sidebar-footer-name">{user.name.clone()}</div>
                                <div class="text-muted text-sm">{user.email.clone()}</div>
                                <button type="button" class="btn btn-ghost" on:click=on_logout>
                                    <span>"Log out"</span>
                                </button>
                            </div>
                        </aside>

                        <main class="main-area">{children()}</main>
                    </div>
                }
                .into_any()
            }
        }
    }
}
