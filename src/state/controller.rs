//! Async driver connecting the session machine to the API and the store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand intents to [`SessionController::dispatch`]. The controller lets
//! the machine decide, performs the resulting effect, and feeds the outcome
//! back, looping until the machine asks for nothing more (a successful login
//! chains straight into the user-list fetch).
//!
//! The only suspension points are the API calls. State is borrowed through
//! [`SessionCell`] strictly between awaits.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use leptos::prelude::*;

use super::session::{Effect, Intent, Resolution, SessionState, Ticket};
use crate::net::api::{ApiFailure, AuthApi};
use crate::net::types::Credential;
use crate::util::session_store::SessionStore;

/// Somewhere the controller can read and mutate [`SessionState`].
///
/// Returns `None` when the state has gone away (e.g. the owning component was
/// disposed while a request was in flight).
pub trait SessionCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<SessionState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionCell for RefCell<SessionState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Clone, Debug)]
pub struct SessionController<A, S> {
    api: A,
    store: S,
}

impl<A: AuthApi, S: SessionStore> SessionController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore a persisted session, fetching the user list if one exists.
    pub async fn start<C: SessionCell>(&self, cell: &C) {
        let has_credential = self.store.get().is_some();
        log::debug!("session: boot, persisted credential present: {has_credential}");
        let effect = cell.with_state(|s| s.boot(has_credential)).flatten();
        self.drive(cell, effect).await;
    }

    /// Apply one intent and run every effect it triggers to completion.
    pub async fn dispatch<C: SessionCell>(&self, cell: &C, intent: Intent) {
        let effect = cell.with_state(|s| s.apply(intent)).flatten();
        self.drive(cell, effect).await;
    }

    async fn drive<C: SessionCell>(&self, cell: &C, mut next: Option<Effect>) {
        while let Some(effect) = next.take() {
            next = self.perform(cell, effect).await;
        }
    }

    async fn perform<C: SessionCell>(&self, cell: &C, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ClearCredential => {
                self.store.clear();
                None
            }
            Effect::Signup { ticket, request } => {
                let outcome = self.api.signup(&request).await;
                self.finish_sign_in(cell, ticket, outcome, ApiFailure::Signup { detail: None })
            }
            Effect::Login { ticket, request } => {
                let outcome = self.api.login(&request).await;
                self.finish_sign_in(cell, ticket, outcome, ApiFailure::Login { detail: None })
            }
            Effect::FetchUsers { ticket } => {
                let credential = self.store.get();
                let resolution = match self.api.fetch_users(credential.as_ref()).await {
                    Ok(users) => {
                        log::debug!("session: loaded {} users", users.len());
                        Resolution::UsersLoaded(users)
                    }
                    Err(failure) => {
                        log::warn!("session: {failure}");
                        Resolution::UsersFailed(failure.to_string())
                    }
                };
                cell.with_state(|s| s.resolve(ticket, resolution)).flatten()
            }
        }
    }

    fn finish_sign_in<C: SessionCell>(
        &self,
        cell: &C,
        ticket: Ticket,
        outcome: Result<Credential, ApiFailure>,
        unpersisted: ApiFailure,
    ) -> Option<Effect> {
        // A credential that cannot be stored counts as a failed sign-in.
        let outcome = outcome.and_then(|credential| {
            if !cell.with_state(|s| s.is_current(ticket)).unwrap_or(false) {
                return Ok(None);
            }
            match self.store.set(&credential) {
                Ok(()) => Ok(Some(credential)),
                Err(e) => {
                    log::warn!("session: {e}, credential not persisted");
                    Err(unpersisted)
                }
            }
        });
        match outcome {
            // A stale sign-in must not leave a credential behind.
            Ok(None) => {
                log::debug!("session: discarding credential from a superseded sign-in");
                None
            }
            Ok(Some(_)) => {
                log::info!("session: signed in");
                cell.with_state(|s| s.resolve(ticket, Resolution::SignedIn)).flatten()
            }
            Err(failure) => {
                log::info!("session: sign-in rejected: {failure}");
                cell.with_state(|s| s.resolve(ticket, Resolution::Rejected(failure.to_string()))).flatten()
            }
        }
    }
}
