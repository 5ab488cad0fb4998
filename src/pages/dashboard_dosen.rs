//! Reviewer dashboard: full queue, decision actions, reject modal.

use leptos::prelude::*;

use crate::components::layout::initials;
use crate::components::submission_table::SubmissionTable;
use crate::net::process::{approve_submission, reject_reason_or_default, reject_submission};
use crate::net::types::SubmissionStatus;
use crate::state::auth::AuthState;
use crate::state::submissions::{StatusFilter, latest_pending, status_counts};
use crate::util::file_url::format_timestamp;

/// Dosen dashboard: the unrestricted submission list with approve/reject
/// actions. Every decision reloads the list in full (no optimistic local
/// update), and a shared `submitting` flag disables the
/// action controls while a command is in flight.
#[component]
pub fn DashboardDosen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let submissions = LocalResource::new(|| crate::net::submissions::fetch_submissions());

    // Reviewers land on the pending queue by default.
    let filter = RwSignal::new(StatusFilter::Only(SubmissionStatus::Pending));
    let modal_reject_id = RwSignal::new(None::<u64>);
    let modal_reason = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let on_approve = {
        let submissions = submissions.clone();
        Callback::new(move |id: u64| {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            action_error.set(None);
            let submissions = submissions.clone();
            leptos::task::spawn_local(async move {
                match approve_submission(id).await {
                    Ok(_) => submissions.refetch(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_open_reject = Callback::new(move |id: u64| {
        modal_reject_id.set(Some(id));
        modal_reason.set(String::new());
    });

    let on_confirm_reject = {
        let submissions = submissions.clone();
        Callback::new(move |()| {
            let Some(id) = modal_reject_id.get_untracked() else {
                return;
            };
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            action_error.set(None);
            let submissions = submissions.clone();
            leptos::task::spawn_local(async move {
                let reason = modal_reason.get_untracked();
                let reason = reject_reason_or_default(&reason).to_owned();
                match reject_submission(id, &reason).await {
                    Ok(_) => {
                        modal_reject_id.set(None);
                        modal_reason.set(String::new());
                        submissions.refetch();
                    }
                    Err(err) => action_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let metrics = {
        let submissions = submissions.clone();
        move || {
            let counts = submissions
                .get()
                .and_then(Result::ok)
                .map(|list| status_counts(&list))
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

    let latest = {
        let submissions = submissions.clone();
        move || {
            let items = submissions
                .get()
                .and_then(Result::ok)
                .map(|list| latest_pending(&list, 3))
                .unwrap_or_default();
            if items.is_empty() {
                view! { <div class="empty-state">"Belum ada submission pending."</div> }
                    .into_any()
            } else {
                view! {
                    <ul class="pending-list">
                        {items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="pending-list-item">
                                        <div class="pending-list-row">
                                            <div>
                                                <div>{format!("#{} \u{2022} {}", item.id, item.title)}</div>
                                                <div class="text-muted text-sm">
                                                    {format!("User #{}", item.user_id)}
                                                </div>
                                            </div>
                                            <div class="text-muted text-sm">
                                                {format_timestamp(&item.created_at)}
                                            </div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="topbar">
            <div>
                <h1 class="topbar-title">"Dashboard Dosen"</h1>
                <p class="text-muted text-sm">
                    "Review dan berikan keputusan untuk submission mahasiswa."
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
                            "Gambaran umum antrian dan keputusan yang sudah dibuat."
                        </div>
                    </div>
                </div>
                {metrics}
                <div class="metric-pill-row">
                    <span class="metric-pill">"Fokus pada submission Pending"</span>
                    <span class="metric-pill">"Berikan alasan jelas saat reject"</span>
                </div>
            </div>

            <div class="card-soft">
                <div class="card-header">
                    <div>
                        <div class="card-title">"Pending terbaru"</div>
                        <div class="card-subtitle">
                            "Tiga submission terbaru yang belum diproses."
                        </div>
                    </div>
                </div>
                {latest}
            </div>
        </div>

        <div class="card-soft">
            {move || {
                action_error
                    .get()
                    .map(|message| view! { <div class="alert alert-error">{message}</div> })
            }}
            <Suspense fallback=move || view! { <div>"Memuat data..."</div> }>
                {
                    let submissions = submissions.clone();
                    move || {
                        submissions
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <SubmissionTable
                                            submissions=list
                                            show_owner=true
                                            filter=filter
                                            on_approve=on_approve
                                            on_reject=on_open_reject
                                            busy=submitting
                                        />
                                    }
                                        .into_any()
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

        <Show when=move || modal_reject_id.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="card-header">
                        <div>
                            <div class="card-title">"Alasan reject"</div>
                            <div class="card-subtitle">
                                "Berikan catatan singkat agar mahasiswa tahu apa yang perlu diperbaiki."
                            </div>
                        </div>
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Keterangan"</label>
                        <textarea
                            class="form-textarea"
                            placeholder="Contoh: Bab 2 belum cukup kuat, tolong perbaiki tinjauan pustaka."
                            prop:value=move || modal_reason.get()
                            on:input=move |ev| modal_reason.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            disabled=move || submitting.get()
                            on:click=move |_| modal_reject_id.set(None)
                        >
                            "Batal"
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger"
                            disabled=move || submitting.get()
                            on:click=move |_| on_confirm_reject.run(())
                        >
                            {move || if submitting.get() { "Memproses..." } else { "Konfirmasi reject" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
