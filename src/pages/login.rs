//! Login page: credential form, role-hint toggle, and demo shortcuts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthState, handle_auth_success};

/// Login page. The role toggle and demo buttons only pre-fill the form;
/// the actual destination after login follows the role the backend
/// returns, so a mismatched hint cannot land anyone on the wrong
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let role_hint = RwSignal::new(Role::Mahasiswa);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result =
                crate::net::auth::login(&email.get_untracked(), &password.get_untracked()).await;
            match result {
                Ok(resp) => {
                    let target = resp.user.role.dashboard_route();
                    auth.update(|state| handle_auth_success(state, resp));
                    navigate(
                        target,
                        NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        },
                    );
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let use_demo = move |role: Role| {
        let account = match role {
            Role::Mahasiswa => "mahasiswa@lasti.com",
            Role::Dosen => "dosen@lasti.com",
        };
        email.set(account.to_owned());
        password.set("password123".to_owned());
        role_hint.set(role);
    };

    let role_button_class = move |role: Role| {
        if role_hint.get() == role {
            "login-role-button active"
        } else {
            "login-role-button"
        }
    };

    view! {
        <div class="login-wrapper">
            <div class="login-card">
                <div class="login-header">
                    <div>
                        <div class="login-title">"FinalEase"</div>
                        <div class="login-subtitle">
                            "Portal pengajuan dan approval submission mahasiswa & dosen."
                        </div>
                    </div>
                    <div class="login-role-toggle">
                        <button
                            type="button"
                            class=move || role_button_class(Role::Mahasiswa)
                            on:click=move |_| role_hint.set(Role::Mahasiswa)
                        >
                            "Mahasiswa"
                        </button>
                        <button
                            type="button"
                            class=move || role_button_class(Role::Dosen)
                            on:click=move |_| role_hint.set(Role::Dosen)
                        >
                            "Dosen"
                        </button>
                    </div>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="alert alert-error">{message}</div> })
                }}

                <form on:submit=on_submit class="form-grid">
                    <div class="form-field">
                        <label class="form-label">"Email"</label>
                        <input
                            class="form-input"
                            type="email"
                            placeholder="nama@kampus.ac.id"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Password"</label>
                        <input
                            class="form-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-help">
                        "Gunakan akun demo cepat:"
                        <div class="tag-row">
                            <button type="button" class="tag" on:click=move |_| use_demo(Role::Mahasiswa)>
                                "Mahasiswa demo"
                            </button>
                            <button type="button" class="tag" on:click=move |_| use_demo(Role::Dosen)>
                                "Dosen demo"
                            </button>
                        </div>
                    </div>

                    <button class="btn btn-primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Masuk..." } else { "Masuk ke dashboard" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
