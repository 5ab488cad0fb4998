//! Wire types shared by the API client and the application state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User roles, a closed set. Guards match on this exhaustively; an unknown
/// role string from the backend fails deserialization instead of silently
/// falling through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Mahasiswa,
    Dosen,
}

impl Role {
    /// Dashboard route for this role.
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Self::Mahasiswa => "/mahasiswa/dashboard",
            Self::Dosen => "/dosen/dashboard",
        }
    }

    /// Human-readable role name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mahasiswa => "Mahasiswa",
            Self::Dosen => "Dosen",
        }
    }
}

/// An authenticated account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Result of a successful credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Review status of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Badge/filter label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A student submission. `reject_reason` is meaningful only when `status`
/// is [`SubmissionStatus::Rejected`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_original_name: String,
    pub file_storage_path: String,
    pub file_mime_type: String,
    pub file_size_bytes: u64,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub reject_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Envelope wrapping every successful response body.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/register`. `role` is omitted from the
/// payload when absent and assigned server-side.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Request body for `POST /api/process/submissions/:id/reject`.
#[derive(Debug, Serialize)]
pub struct RejectRequest {
    pub reason: String,
}
