//! Persistent slot for the session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only reader/writer; everything else receives the
//! credential as an explicit argument. The browser store keeps the raw token
//! string under one `localStorage` key so it survives full page reloads.
//!
//! ERROR HANDLING
//! ==============
//! Reads are best-effort: unavailable storage behaves like an empty slot.
//! Writes report failure, because a sign-in whose credential was not
//! persisted must not enter the user list.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::types::Credential;

/// Errors produced when persisting the credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// No `localStorage` (no browser, or storage disabled by the user agent).
    #[error("session storage unavailable")]
    Unavailable,

    /// The write was refused, typically because storage is full.
    #[error("session storage write rejected")]
    WriteRejected,
}

/// Get/set/clear contract over a single durable credential slot.
pub trait SessionStore {
    fn get(&self) -> Option<Credential>;

    /// Persist `credential`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionStoreError`] if the slot could not be written.
    fn set(&self, credential: &Credential) -> Result<(), SessionStoreError>;

    fn clear(&self);
}

/// Credential slot backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self { key: config.token_storage_key.clone() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Credential> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            if raw.is_empty() {
                return None;
            }
            Some(Credential::new(raw))
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, credential: &Credential) -> Result<(), SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(SessionStoreError::Unavailable)?;
            storage
                .set_item(&self.key, credential.as_str())
                .map_err(|_| SessionStoreError::WriteRejected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credential;
            Err(SessionStoreError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-memory slot. Clones share the slot, so a clone handed to a fresh
/// controller behaves like the same browser profile after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Credential> {
        self.slot.borrow().as_deref().map(Credential::new)
    }

    fn set(&self, credential: &Credential) -> Result<(), SessionStoreError> {
        *self.slot.borrow_mut() = Some(credential.as_str().to_owned());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
