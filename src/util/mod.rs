//! Browser glue shared by state and pages.

pub mod session_store;
