//! Reusable view components: guards, the application shell, and the
//! submission table/form shared by both dashboards.

pub mod guards;
pub mod layout;
pub mod status_badge;
pub mod submission_form;
pub mod submission_table;
