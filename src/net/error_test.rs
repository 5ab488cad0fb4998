use super::*;

// Display output is the user-facing message, so the fallbacks are part of
// the contract.

#[test]
fn server_message_takes_precedence_in_display() {
    let err = AuthError::Server("Email atau password salah".to_owned());
    assert_eq!(err.to_string(), "Email atau password salah");
    let err = CommandError::Server("Submission sudah diproses".to_owned());
    assert_eq!(err.to_string(), "Submission sudah diproses");
}

#[test]
fn auth_fallback_messages() {
    assert_eq!(AuthError::LoginFailed.to_string(), "Login gagal");
    assert_eq!(AuthError::RegisterFailed.to_string(), "Registrasi gagal");
}

#[test]
fn fetch_fallback_message() {
    assert_eq!(FetchError::Failed.to_string(), "Gagal memuat submission");
}

#[test]
fn command_fallback_messages() {
    assert_eq!(
        CommandError::CreateFailed.to_string(),
        "Gagal membuat submission"
    );
    assert_eq!(
        CommandError::ApproveFailed.to_string(),
        "Gagal approve submission"
    );
    assert_eq!(
        CommandError::RejectFailed.to_string(),
        "Gagal reject submission"
    );
}

#[test]
fn validation_message_names_the_missing_file() {
    assert_eq!(ValidationError::MissingFile.to_string(), "File PDF wajib diisi");
}
