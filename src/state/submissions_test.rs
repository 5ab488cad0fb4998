use super::*;

fn submission(id: u64, user_id: u64, status: SubmissionStatus, created_at: &str) -> Submission {
    Submission {
        id,
        user_id,
        title: format!("Pengajuan TA #{id}"),
        description: None,
        file_original_name: "berkas.pdf".to_owned(),
        file_storage_path: "uploads/berkas.pdf".to_owned(),
        file_mime_type: "application/pdf".to_owned(),
        file_size_bytes: 1024,
        status,
        reject_reason: None,
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
    }
}

// =============================================================
// Status counts
// =============================================================

#[test]
fn counts_over_empty_snapshot_are_zero() {
    assert_eq!(status_counts(&[]), StatusCounts::default());
}

#[test]
fn counts_partition_the_snapshot_by_status() {
    let list = [
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 7, SubmissionStatus::Approved, "2024-05-02T10:00:00.000Z"),
        submission(3, 9, SubmissionStatus::Pending, "2024-05-03T10:00:00.000Z"),
        submission(4, 9, SubmissionStatus::Rejected, "2024-05-04T10:00:00.000Z"),
    ];
    let counts = status_counts(&list);
    assert_eq!(counts.total, 4);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.rejected, 1);
}

// =============================================================
// Student scoping
// =============================================================

#[test]
fn scoped_view_keeps_only_the_sessions_own_rows() {
    let list = [
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 9, SubmissionStatus::Pending, "2024-05-02T10:00:00.000Z"),
        submission(3, 7, SubmissionStatus::Approved, "2024-05-03T10:00:00.000Z"),
    ];
    let mine = scoped_to_user(&list, 7);
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|s| s.user_id == 7));

    // Counts over the scoped view reflect only those rows.
    let counts = status_counts(&mine);
    assert_eq!(counts.total, 2);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.rejected, 0);
}

#[test]
fn scoping_preserves_snapshot_order() {
    let list = [
        submission(3, 7, SubmissionStatus::Pending, "2024-05-03T10:00:00.000Z"),
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 9, SubmissionStatus::Pending, "2024-05-02T10:00:00.000Z"),
    ];
    let mine = scoped_to_user(&list, 7);
    let ids: Vec<u64> = mine.iter().map(|s| s.id).collect();
    assert_eq!(ids, [3, 1]);
}

// =============================================================
// Recency projection
// =============================================================

#[test]
fn latest_pending_sorts_newest_first_and_truncates() {
    let list = [
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 7, SubmissionStatus::Pending, "2024-05-04T10:00:00.000Z"),
        submission(3, 7, SubmissionStatus::Pending, "2024-05-02T10:00:00.000Z"),
        submission(4, 7, SubmissionStatus::Pending, "2024-05-03T10:00:00.000Z"),
    ];
    let latest = latest_pending(&list, 3);
    let ids: Vec<u64> = latest.iter().map(|s| s.id).collect();
    assert_eq!(ids, [2, 4, 3]);
}

#[test]
fn latest_pending_ignores_decided_submissions() {
    let list = [
        submission(1, 7, SubmissionStatus::Approved, "2024-05-09T10:00:00.000Z"),
        submission(2, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(3, 7, SubmissionStatus::Rejected, "2024-05-08T10:00:00.000Z"),
    ];
    let latest = latest_pending(&list, 3);
    let ids: Vec<u64> = latest.iter().map(|s| s.id).collect();
    assert_eq!(ids, [2]);
}

#[test]
fn latest_pending_breaks_ties_by_original_order() {
    let same_instant = "2024-05-01T10:00:00.000Z";
    let list = [
        submission(10, 7, SubmissionStatus::Pending, same_instant),
        submission(11, 7, SubmissionStatus::Pending, same_instant),
        submission(12, 7, SubmissionStatus::Pending, same_instant),
    ];
    let latest = latest_pending(&list, 3);
    let ids: Vec<u64> = latest.iter().map(|s| s.id).collect();
    assert_eq!(ids, [10, 11, 12]);
}

// =============================================================
// Status filter
// =============================================================

#[test]
fn filter_all_is_the_identity_including_order() {
    let list = vec![
        submission(2, 7, SubmissionStatus::Approved, "2024-05-02T10:00:00.000Z"),
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
    ];
    assert_eq!(StatusFilter::All.apply(&list), list);
}

#[test]
fn filter_keeps_exact_status_matches_only() {
    let list = [
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 7, SubmissionStatus::Approved, "2024-05-02T10:00:00.000Z"),
        submission(3, 7, SubmissionStatus::Pending, "2024-05-03T10:00:00.000Z"),
    ];
    let pending = StatusFilter::Only(SubmissionStatus::Pending).apply(&list);
    let ids: Vec<u64> = pending.iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let list = [
        submission(1, 7, SubmissionStatus::Pending, "2024-05-01T10:00:00.000Z"),
        submission(2, 7, SubmissionStatus::Rejected, "2024-05-02T10:00:00.000Z"),
    ];
    for filter in [
        StatusFilter::All,
        StatusFilter::Only(SubmissionStatus::Pending),
        StatusFilter::Only(SubmissionStatus::Approved),
        StatusFilter::Only(SubmissionStatus::Rejected),
    ] {
        let once = filter.apply(&list);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn default_filter_is_the_identity() {
    assert_eq!(StatusFilter::default(), StatusFilter::All);
}

#[test]
fn filter_labels_match_the_ui() {
    assert_eq!(StatusFilter::All.label(), "Semua");
    assert_eq!(
        StatusFilter::Only(SubmissionStatus::Pending).label(),
        "Pending"
    );
}
