//! File-link resolution and timestamp formatting for the submission table.

#[cfg(test)]
#[path = "file_url_test.rs"]
mod file_url_test;

use std::fmt::Write;

/// Resolve a stored file path into a browser-openable URL.
///
/// Absolute URLs and known local-upload paths pass through verbatim;
/// anything else is joined to the configured base URL. Links into cloud
/// object storage (Cloudinary) are wrapped in the Google Docs preview
/// viewer, which renders PDFs the storage domain serves as downloads.
pub fn resolve_file_url(storage_path: &str, api_base_url: &str) -> String {
    let raw = if storage_path.starts_with("http") || storage_path.starts_with("/uploads") {
        storage_path.to_owned()
    } else {
        format!("{}/{}", api_base_url.trim_end_matches('/'), storage_path)
    };

    if storage_path.contains("cloudinary.com") {
        format!(
            "https://docs.google.com/viewer?url={}&embedded=true",
            encode_uri_component(&raw)
        )
    } else {
        raw
    }
}

/// Percent-encode a query-parameter value, matching `encodeURIComponent`
/// (RFC 3986 unreserved plus `!`, `*`, `'`, `(`, `)`).
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Render an ISO-8601 wire timestamp as `YYYY-MM-DD HH:MM` for table rows.
/// Strings that do not look like timestamps pass through unchanged.
pub fn format_timestamp(iso: &str) -> String {
    if iso.len() >= 16 && iso.is_ascii() && iso.as_bytes()[10] == b'T' {
        format!("{} {}", &iso[..10], &iso[11..16])
    } else {
        iso.to_owned()
    }
}
