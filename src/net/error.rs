//! Error taxonomy for the API client.
//!
//! Every variant's `Display` output is the user-facing message: either the
//! backend-supplied `message` (the `Server` variants) or a generic fallback
//! per operation. Pages render these inline; nothing propagates further up.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Credential exchange failed: rejected credentials or unreachable backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Server(String),
    #[error("Login gagal")]
    LoginFailed,
    #[error("Registrasi gagal")]
    RegisterFailed,
}

/// A read-only query (list/get) failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Server(String),
    #[error("Gagal memuat submission")]
    Failed,
}

/// A state-changing command (create/approve/reject) failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    Server(String),
    #[error("Gagal membuat submission")]
    CreateFailed,
    #[error("Gagal approve submission")]
    ApproveFailed,
    #[error("Gagal reject submission")]
    RejectFailed,
}

/// Client-side validation failed before any request was sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("File PDF wajib diisi")]
    MissingFile,
}
