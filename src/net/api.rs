//! REST client for the remote auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to its generic failure so the state
//! machine and controller stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, rejected statuses, and malformed bodies all collapse
//! into [`ApiFailure`]. Signup and login keep the service's `message` when it
//! sent one; the protected list never passes detail through.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credential, LoginRequest, SignupRequest, UserRecord};
#[cfg(any(test, feature = "csr"))]
use super::types::{ErrorBody, TokenResponse};
use crate::config::ClientConfig;

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";

#[cfg(any(test, feature = "csr"))]
const SIGNUP_PATH: &str = "/api/signup";
#[cfg(any(test, feature = "csr"))]
const LOGIN_PATH: &str = "/api/login";
#[cfg(any(test, feature = "csr"))]
const USERS_PATH: &str = "/api/users";

/// A failed auth-service operation. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    #[error("{}", detail_or(.detail, SIGNUP_FAILED))]
    Signup { detail: Option<String> },

    #[error("{}", detail_or(.detail, LOGIN_FAILED))]
    Login { detail: Option<String> },

    #[error("Failed to fetch users")]
    FetchUsers,
}

fn detail_or<'a>(detail: &'a Option<String>, fallback: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(fallback)
}

/// The three operations the client needs from the auth service.
///
/// Each call is attempted exactly once; there are no retries or timeouts.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Register a new account and return its session credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure::Signup`] on any failure.
    async fn signup(&self, request: &SignupRequest) -> Result<Credential, ApiFailure>;

    /// Exchange email and password for a session credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure::Login`] on any failure.
    async fn login(&self, request: &LoginRequest) -> Result<Credential, ApiFailure>;

    /// Fetch the protected user list. A missing credential fails without
    /// sending a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure::FetchUsers`] on any failure.
    async fn fetch_users(&self, credential: Option<&Credential>) -> Result<Vec<UserRecord>, ApiFailure>;
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Best-effort `message` extraction from an error response body.
#[cfg(any(test, feature = "csr"))]
fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.is_empty())
}

/// `Authorization` value for `credential`, or `None` if the token holds
/// characters a header cannot carry (control bytes, anything past Latin-1).
fn authorization_header(credential: &Credential) -> Option<String> {
    let value = credential.bearer();
    let valid = value.chars().all(|c| u32::from(c) <= 0xFF && (c == '\t' || !c.is_control()));
    valid.then_some(value)
}

#[cfg(any(test, feature = "csr"))]
fn parse_token(body: &str) -> Option<Credential> {
    let parsed: TokenResponse = serde_json::from_str(body).ok()?;
    if parsed.token.is_empty() {
        return None;
    }
    Some(Credential::new(parsed.token))
}

/// `gloo-net` backed [`AuthApi`].
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
impl HttpAuthApi {
    /// POST a JSON body and decode `{token}`. `Err` carries the optional
    /// service message.
    async fn post_for_token<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Credential, Option<String>> {
        let url = endpoint(&self.base_url, path);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::warn!("api: encode {path} failed: {e}");
                None
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("api: {path} request failed: {e}");
                None
            })?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::info!("api: {path} rejected with status {status}");
            return Err(extract_message(&text));
        }
        parse_token(&text).ok_or_else(|| {
            log::warn!("api: {path} returned {status} without a token");
            None
        })
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<Credential, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            self.post_for_token(SIGNUP_PATH, request)
                .await
                .map_err(|detail| ApiFailure::Signup { detail })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiFailure::Signup { detail: None })
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<Credential, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            self.post_for_token(LOGIN_PATH, request)
                .await
                .map_err(|detail| ApiFailure::Login { detail })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiFailure::Login { detail: None })
        }
    }

    async fn fetch_users(&self, credential: Option<&Credential>) -> Result<Vec<UserRecord>, ApiFailure> {
        let Some(credential) = credential else {
            log::debug!("api: fetch users skipped, no credential");
            return Err(ApiFailure::FetchUsers);
        };
        let Some(authorization) = authorization_header(credential) else {
            log::warn!("api: stored credential is not a valid header value");
            return Err(ApiFailure::FetchUsers);
        };
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.base_url, USERS_PATH);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &authorization)
                .send()
                .await
                .map_err(|e| {
                    log::warn!("api: users request failed: {e}");
                    ApiFailure::FetchUsers
                })?;
            if !resp.ok() {
                log::info!("api: users rejected with status {}", resp.status());
                return Err(ApiFailure::FetchUsers);
            }
            resp.json::<Vec<UserRecord>>().await.map_err(|e| {
                log::warn!("api: users body malformed: {e}");
                ApiFailure::FetchUsers
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = authorization;
            Err(ApiFailure::FetchUsers)
        }
    }
}
