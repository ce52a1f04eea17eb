//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` is the pure view/session machine; `controller` runs its effects
//! against the API and the credential store.

pub mod controller;
pub mod session;
