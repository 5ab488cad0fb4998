//! Small view-layer helpers with no state of their own.

pub mod file_url;
