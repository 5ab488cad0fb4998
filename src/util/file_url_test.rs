use super::*;

const BASE: &str = "http://localhost:3000";

// =============================================================
// File link resolution
// =============================================================

#[test]
fn absolute_urls_pass_through_verbatim() {
    assert_eq!(
        resolve_file_url("https://files.example.com/ta.pdf", BASE),
        "https://files.example.com/ta.pdf"
    );
}

#[test]
fn local_upload_paths_pass_through_verbatim() {
    assert_eq!(resolve_file_url("/uploads/ta.pdf", BASE), "/uploads/ta.pdf");
}

#[test]
fn relative_paths_join_the_base_url() {
    assert_eq!(
        resolve_file_url("uploads/ta.pdf", BASE),
        "http://localhost:3000/uploads/ta.pdf"
    );
}

#[test]
fn a_trailing_slash_on_the_base_is_trimmed() {
    assert_eq!(
        resolve_file_url("uploads/ta.pdf", "http://localhost:3000/"),
        "http://localhost:3000/uploads/ta.pdf"
    );
}

#[test]
fn cloudinary_links_are_wrapped_in_the_preview_viewer() {
    let stored = "https://res.cloudinary.com/demo/raw/upload/v1/ta.pdf";
    assert_eq!(
        resolve_file_url(stored, BASE),
        "https://docs.google.com/viewer?url=https%3A%2F%2Fres.cloudinary.com%2Fdemo%2Fraw%2Fupload%2Fv1%2Fta.pdf&embedded=true"
    );
}

#[test]
fn uri_component_encoding_matches_the_browser_builtin() {
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    assert_eq!(encode_uri_component("a b&c=d/e?f"), "a%20b%26c%3Dd%2Fe%3Ff");
}

// =============================================================
// Timestamp formatting
// =============================================================

#[test]
fn iso_timestamps_render_date_and_minutes() {
    assert_eq!(
        format_timestamp("2024-05-01T10:30:00.000Z"),
        "2024-05-01 10:30"
    );
}

#[test]
fn non_timestamp_strings_pass_through() {
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("2024-05-01"), "2024-05-01");
    assert_eq!(format_timestamp("kemarin sore"), "kemarin sore");
}
