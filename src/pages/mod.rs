//! Page modules, one per view mode.
//!
//! ARCHITECTURE
//! ============
//! Pages read `SessionState` from context and only emit intents; all
//! transitions happen in `state::session`.

pub mod login;
pub mod signup;
pub mod users;
