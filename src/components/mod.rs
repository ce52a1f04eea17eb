//! Reusable UI components shared by the pages.

pub mod error_banner;
pub mod field_input;
