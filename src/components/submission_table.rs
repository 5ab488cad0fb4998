//! Reusable submission list table with status filtering.
//!
//! Both dashboards render this: the student view (own rows, reject-reason
//! column) and the reviewer view (owner column, filter buttons, action
//! column). Filtering narrows the snapshot the page already loaded; it
//! never triggers a refetch.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::api_base_url;
use crate::net::types::{Submission, SubmissionStatus};
use crate::state::submissions::StatusFilter;
use crate::util::file_url::{format_timestamp, resolve_file_url};

const FILTER_OPTIONS: [StatusFilter; 4] = [
    StatusFilter::All,
    StatusFilter::Only(SubmissionStatus::Pending),
    StatusFilter::Only(SubmissionStatus::Approved),
    StatusFilter::Only(SubmissionStatus::Rejected),
];

/// Submission list table.
///
/// `filter`, `on_approve`/`on_reject`, and `busy` are all optional: the
/// student dashboard passes none of them, the reviewer dashboard passes
/// all of them. The action column only appears when both callbacks are
/// given, and `busy` disables the action buttons while a command is in
/// flight.
#[component]
pub fn SubmissionTable(
    submissions: Vec<Submission>,
    #[prop(optional)] show_owner: bool,
    #[prop(optional)] filter: Option<RwSignal<StatusFilter>>,
    #[prop(optional)] on_approve: Option<Callback<u64>>,
    #[prop(optional)] on_reject: Option<Callback<u64>>,
    #[prop(optional)] busy: Option<RwSignal<bool>>,
) -> impl IntoView {
    let actions = match (on_approve, on_reject) {
        (Some(approve), Some(reject)) => Some((approve, reject)),
        _ => None,
    };
    let colspan = if show_owner { "8" } else { "7" };

    view! {
        <div class="filter-row">
            <div class="card-title filter-title">"Daftar submission"</div>
            {filter.map(|filter| {
                view! {
                    <div class="filter-group">
                        {FILTER_OPTIONS
                            .into_iter()
                            .map(|option| {
                                let class = move || {
                                    if filter.get() == option {
                                        "badge-filter active"
                                    } else {
                                        "badge-filter"
                                    }
                                };
                                view! {
                                    <button type="button" class=class on:click=move |_| filter.set(option)>
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
        </div>

        <div class="table-wrapper">
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        {show_owner.then(|| view! { <th>"Pemilik"</th> })}
                        <th>"Judul"</th>
                        {show_owner.then(|| view! { <th>"Deskripsi"</th> })}
                        <th>"Status"</th>
                        {(!show_owner).then(|| view! { <th>"Alasan Reject"</th> })}
                        <th>"File"</th>
                        <th>"Dibuat"</th>
                        {actions.map(|_| view! { <th class="actions-col">"Aksi"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = match filter {
                            Some(filter) => filter.get().apply(&submissions),
                            None => submissions.clone(),
                        };
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan=colspan>
                                        <div class="empty-state">
                                            "Belum ada submission sesuai filter yang dipilih."
                                        </div>
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|submission| submission_row(submission, show_owner, actions, busy))
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn submission_row(
    submission: Submission,
    show_owner: bool,
    actions: Option<(Callback<u64>, Callback<u64>)>,
    busy: Option<RwSignal<bool>>,
) -> impl IntoView {
    let id = submission.id;
    let status = submission.status;
    let file_url = resolve_file_url(&submission.file_storage_path, api_base_url());
    let created = format_timestamp(&submission.created_at);
    let owner_label = format!("User #{}", submission.user_id);
    let description_label = submission.description.unwrap_or_else(|| "-".to_owned());
    let reason_label = match (status, submission.reject_reason) {
        (SubmissionStatus::Rejected, Some(reason)) => reason,
        _ => "-".to_owned(),
    };
    let disabled = move || busy.is_some_and(|busy| busy.get());

    view! {
        <tr>
            <td>{format!("#{id}")}</td>
            {show_owner.then(|| view! { <td>{owner_label.clone()}</td> })}
            <td>{submission.title.clone()}</td>
            {show_owner.then(|| view! { <td class="text-muted text-sm">{description_label.clone()}</td> })}
            <td><StatusBadge status=status/></td>
            {(!show_owner).then(|| view! { <td class="text-muted text-sm">{reason_label.clone()}</td> })}
            <td>
                <a href=file_url target="_blank" rel="noreferrer" class="pill">"Lihat PDF"</a>
            </td>
            <td class="text-muted text-sm">{created}</td>
            {actions.map(|(approve, reject)| {
                view! {
                    <td>
                        {if status == SubmissionStatus::Pending {
                            view! {
                                <div class="action-row">
                                    <button
                                        class="btn btn-primary"
                                        type="button"
                                        disabled=disabled
                                        on:click=move |_| approve.run(id)
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        class="btn btn-danger"
                                        type="button"
                                        disabled=disabled
                                        on:click=move |_| reject.run(id)
                                    >
                                        "Reject"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <span class="text-muted text-sm">"Tidak ada aksi"</span> }
                                .into_any()
                        }}
                    </td>
                }
            })}
        </tr>
    }
}
