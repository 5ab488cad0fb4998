//! Colored status badge for submission rows.

use leptos::prelude::*;

use crate::net::types::SubmissionStatus;

/// Dot + label badge for a submission status.
#[component]
pub fn StatusBadge(status: SubmissionStatus) -> impl IntoView {
    let dot_class = match status {
        SubmissionStatus::Pending => "status-dot status-pending",
        SubmissionStatus::Approved => "status-dot status-approved",
        SubmissionStatus::Rejected => "status-dot status-rejected",
    };

    view! {
        <span class="status-badge">
            <span class=dot_class></span>
            <span class="badge-status-label">{status.label()}</span>
        </span>
    }
}
