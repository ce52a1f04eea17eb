//! Networking modules for the auth service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three HTTP operations and normalizes their outcomes;
//! `types` defines the wire schema and the opaque session credential.

pub mod api;
pub mod types;
