//! Wire DTOs for the auth service boundary.
//!
//! DESIGN
//! ======
//! Request bodies serialize exactly as the service expects; response types
//! accept the loosest shape the service is known to send (numeric or string
//! user IDs, null names, optional error messages).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque session token issued by the service on signup or login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header of protected requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in console logs via `{:?}` otherwise.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Body of `POST /api/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of signup and login.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

/// Error body the service may attach to a non-2xx response.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// User identifier; the service emits integers but strings are tolerated.
///
/// Numbers outside `i64` (or with a fractional part) are kept verbatim as
/// text, and a null or missing id decodes as empty text. IDs are display-only,
/// so none of these fail the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl Default for UserId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::default()),
            Value::Number(n) => Ok(n.as_i64().map_or_else(|| Self::Text(n.to_string()), Self::Number)),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(D::Error::custom(format!("expected number or string id, got {other}"))),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of the protected `GET /api/users` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: UserId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
}

/// Null text fields decode as empty rather than failing the list.
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
