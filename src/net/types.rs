//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Decoding is tolerant where the backend is loose: ids may arrive as JSON
//! numbers or strings, and roles outside the known set are kept verbatim
//! instead of failing the whole envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Principal role as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Tournament administrator; bypasses academy ownership checks.
    Admin,
    /// Academy account scoped to a single academy.
    Academia,
    /// Any other role string, kept uppercase.
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Academia => "ACADEMIA",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ADMIN" => Self::Admin,
            "ACADEMIA" => Self::Academia,
            _ => Self::Other(normalized),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// An authenticated principal as returned inside the auth envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "username")]
    pub display_name: String,
    pub role: Role,
    /// Academy the principal is scoped to; absent for admins.
    #[serde(default, alias = "academiaId", deserialize_with = "deserialize_optional_id")]
    pub owned_resource_id: Option<String>,
}

/// Success body of `/api/auth/me` and `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEnvelope {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: UserIdentity,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<String>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(raw) if raw.trim().is_empty() => Ok(None),
        serde_json::Value::String(raw) => Ok(Some(raw)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(E::custom("expected string or number id")),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value::<D::Error>(value)?.ok_or_else(|| D::Error::custom("missing user id"))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value::<D::Error>(value)
}
