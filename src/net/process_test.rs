use super::*;

// =============================================================
// Reject reason fallback
// =============================================================

#[test]
fn written_reason_is_sent_verbatim() {
    assert_eq!(reject_reason_or_default("incomplete"), "incomplete");
    assert_eq!(
        reject_reason_or_default("Bab 2 belum cukup kuat"),
        "Bab 2 belum cukup kuat"
    );
}

#[test]
fn blank_reason_falls_back_to_the_default_note() {
    assert_eq!(reject_reason_or_default(""), DEFAULT_REJECT_REASON);
    assert_eq!(reject_reason_or_default("   "), DEFAULT_REJECT_REASON);
    assert_eq!(reject_reason_or_default("\n\t"), DEFAULT_REJECT_REASON);
}
