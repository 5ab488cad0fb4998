//! Student dashboard: own-submission metrics, upload form, and list.

use leptos::prelude::*;

use crate::components::layout::initials;
use crate::components::submission_form::SubmissionForm;
use crate::components::submission_table::SubmissionTable;
use crate::state::auth::AuthState;
use crate::state::submissions::{scoped_to_user, status_counts};

/// Mahasiswa dashboard. Everything shown here is scoped to the session's
/// own submissions; metrics are recomputed from each list snapshot.
#[component]
pub fn DashboardMahasiswa() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Submission list snapshot: fetched on mount, reloaded in full after
    // every successful create.
    let submissions = LocalResource::new(|| crate::net::submissions::fetch_submissions());

    let on_created = {
        let submissions = submissions.clone();
        Callback::new(move |()| submissions.refetch())
    };

    let metrics = {
        let submissions = submissions.clone();
        move || {
            let user_id = auth.get().user.as_ref().map_or(0, |user| user.id);
            let counts = submissions
                .get()
                .and_then(Result::ok)
                .map(|list| status_counts(&scoped_to_user(&list, user_id)))
                .unwrap_or_default();
            view! {
                <div class="metric-row">
                    <div class="metric-card">
                        <div class="metric-label">"Total submission"</div>
                        <div class="metric-value">{counts.total}</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-label">"Pending"</div>
                        <div class="metric-value">{counts.pending}</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-label">"Approved"</div>
                        <div class="metric-value">{counts.approved}</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-label">"Rejected"</div>
                        <div class="metric-value">{counts.rejected}</div>
                    </div>
                </div>
            }
        }
    };

    view! {
        <div class="topbar">
            <div>
                <h1 class="topbar-title">"Dashboard Mahasiswa"</h1>
                <p class="text-muted text-sm">
                    "Kelola dan pantau status upload submission tugas atau dokumen kamu."
                </p>
            </div>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="topbar-user">
                                <div class="avatar-circle">{initials(&user.name)}</div>
                                <div>
                                    <div class="topbar-user-name">{user.name.clone()}</div>
                                    <div class="text-muted topbar-user-email">{user.email.clone()}</div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>

        <div class="grid grid-2">
            <div class="card">
                <div class="card-header">
                    <div>
                        <div class="card-title">"Ringkasan submission"</div>
                        <div class="card-subtitle">
                            "Status terkini pengajuan kamu di sistem FinalEase."
                        </div>
                    </div>
                </div>
                {metrics}
                <div class="metric-pill-row">
                    <span class="metric-pill">"Gunakan PDF yang rapi dan final"</span>
                    <span class="metric-pill">"Tuliskan judul yang jelas"</span>
                </div>
            </div>

            <div class="card-soft">
                <div class="card-header">
                    <div>
                        <div class="card-title">"Upload submission baru"</div>
                        <div class="card-subtitle">
                            "Upload file PDF baru untuk dikirim ke dosen pembimbing."
                        </div>
                    </div>
                </div>
                <SubmissionForm on_created=on_created/>
            </div>
        </div>

        <div class="card-soft">
            <Suspense fallback=move || view! { <div>"Memuat data..."</div> }>
                {
                    let submissions = submissions.clone();
                    move || {
                        submissions
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let user_id =
                                        auth.get().user.as_ref().map_or(0, |user| user.id);
                                    let mine = scoped_to_user(&list, user_id);
                                    view! { <SubmissionTable submissions=mine/> }.into_any()
                                }
                                Err(err) => {
                                    view! { <div class="alert alert-error">{err.to_string()}</div> }
                                        .into_any()
                                }
                            })
                    }
                }
            </Suspense>
        </div>
    }
}
