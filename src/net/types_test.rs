use super::*;

// =============================================================
// Role: closed set
// =============================================================

#[test]
fn role_serializes_screaming() {
    assert_eq!(serde_json::to_string(&Role::Mahasiswa).unwrap(), r#""MAHASISWA""#);
    assert_eq!(serde_json::to_string(&Role::Dosen).unwrap(), r#""DOSEN""#);
}

#[test]
fn role_round_trips() {
    for role in [Role::Mahasiswa, Role::Dosen] {
        let raw = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn unknown_role_string_fails_to_deserialize() {
    assert!(serde_json::from_str::<Role>(r#""ADMIN""#).is_err());
    assert!(serde_json::from_str::<Role>(r#""mahasiswa""#).is_err());
}

#[test]
fn role_dashboard_routes() {
    assert_eq!(Role::Mahasiswa.dashboard_route(), "/mahasiswa/dashboard");
    assert_eq!(Role::Dosen.dashboard_route(), "/dosen/dashboard");
}

// =============================================================
// Envelope unwrapping
// =============================================================

#[test]
fn auth_response_unwraps_from_the_data_envelope() {
    let raw = r#"{
        "data": {
            "user": {"id": 7, "name": "Budi", "email": "budi@kampus.ac.id", "role": "MAHASISWA"},
            "token": "tok-abc123"
        }
    }"#;
    let envelope: Envelope<AuthResponse> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.data.user.id, 7);
    assert_eq!(envelope.data.user.role, Role::Mahasiswa);
    assert_eq!(envelope.data.token, "tok-abc123");
}

#[test]
fn submission_list_unwraps_from_the_data_envelope() {
    let raw = r#"{
        "data": [{
            "id": 12,
            "userId": 7,
            "title": "Pengajuan TA",
            "fileOriginalName": "ta.pdf",
            "fileStoragePath": "uploads/ta.pdf",
            "fileMimeType": "application/pdf",
            "fileSizeBytes": 2048,
            "status": "PENDING",
            "createdAt": "2024-05-01T10:30:00.000Z",
            "updatedAt": "2024-05-01T10:30:00.000Z"
        }]
    }"#;
    let envelope: Envelope<Vec<Submission>> = serde_json::from_str(raw).unwrap();
    let submission = &envelope.data[0];
    assert_eq!(submission.id, 12);
    assert_eq!(submission.user_id, 7);
    assert_eq!(submission.status, SubmissionStatus::Pending);
    // Optional fields were absent upstream.
    assert!(submission.description.is_none());
    assert!(submission.reject_reason.is_none());
}

#[test]
fn rejected_submission_carries_its_reason() {
    let raw = r#"{
        "id": 12,
        "userId": 7,
        "title": "Pengajuan TA",
        "description": "Bab 1-3",
        "fileOriginalName": "ta.pdf",
        "fileStoragePath": "uploads/ta.pdf",
        "fileMimeType": "application/pdf",
        "fileSizeBytes": 2048,
        "status": "REJECTED",
        "rejectReason": "incomplete",
        "createdAt": "2024-05-01T10:30:00.000Z",
        "updatedAt": "2024-05-02T09:00:00.000Z"
    }"#;
    let submission: Submission = serde_json::from_str(raw).unwrap();
    assert_eq!(submission.status, SubmissionStatus::Rejected);
    assert_eq!(submission.reject_reason.as_deref(), Some("incomplete"));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_carries_both_credentials() {
    let body = LoginRequest {
        email: "budi@kampus.ac.id".to_owned(),
        password: "password123".to_owned(),
    };
    let raw = serde_json::to_value(&body).unwrap();
    assert_eq!(raw["email"], "budi@kampus.ac.id");
    assert_eq!(raw["password"], "password123");
}

#[test]
fn register_request_omits_an_absent_role() {
    let body = RegisterRequest {
        name: "Budi".to_owned(),
        email: "budi@kampus.ac.id".to_owned(),
        password: "password123".to_owned(),
        role: None,
    };
    let raw = serde_json::to_value(&body).unwrap();
    assert!(raw.get("role").is_none());

    let body = RegisterRequest { role: Some(Role::Dosen), ..body };
    let raw = serde_json::to_value(&body).unwrap();
    assert_eq!(raw["role"], "DOSEN");
}

#[test]
fn reject_request_carries_the_reason_verbatim() {
    let body = RejectRequest {
        reason: "incomplete".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"reason":"incomplete"}"#
    );
}
