//! Application pages, one module per route.

pub mod dashboard_dosen;
pub mod dashboard_mahasiswa;
pub mod home;
pub mod login;
pub mod not_found;
