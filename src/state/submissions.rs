//! Pure derived views over a submission list snapshot.
//!
//! Everything here is a synchronous function of the current snapshot,
//! recomputed on every list change. There is no incremental maintenance
//! and no caching: after any command the list is reloaded in full.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use crate::net::types::{Submission, SubmissionStatus};

/// Aggregate counts over one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Count the snapshot by status.
pub fn status_counts(items: &[Submission]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: items.len(),
        ..StatusCounts::default()
    };
    for item in items {
        match item.status {
            SubmissionStatus::Pending => counts.pending += 1,
            SubmissionStatus::Approved => counts.approved += 1,
            SubmissionStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// The student-dashboard scope: only the rows owned by `user_id`.
pub fn scoped_to_user(items: &[Submission], user_id: u64) -> Vec<Submission> {
    items
        .iter()
        .filter(|item| item.user_id == user_id)
        .cloned()
        .collect()
}

/// The `n` most recent pending submissions, newest first.
///
/// ISO-8601 timestamps compare lexicographically; the sort is stable, so
/// ties keep their original order.
pub fn latest_pending(items: &[Submission], n: usize) -> Vec<Submission> {
    let mut pending: Vec<Submission> = items
        .iter()
        .filter(|item| item.status == SubmissionStatus::Pending)
        .cloned()
        .collect();
    pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    pending.truncate(n);
    pending
}

/// Status filter for the submission table. Filtering narrows the already
/// loaded snapshot; it never refetches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// The identity filter: the snapshot unchanged, in order.
    #[default]
    All,
    /// Exact status match.
    Only(SubmissionStatus),
}

impl StatusFilter {
    /// The rows this filter keeps, in snapshot order.
    pub fn apply(self, items: &[Submission]) -> Vec<Submission> {
        match self {
            Self::All => items.to_vec(),
            Self::Only(status) => items
                .iter()
                .filter(|item| item.status == status)
                .cloned()
                .collect(),
        }
    }

    /// Filter-button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Semua",
            Self::Only(status) => status.label(),
        }
    }
}
