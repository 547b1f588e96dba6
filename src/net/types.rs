//! Serde models for the profile and OTP collaborator contracts.
//!
//! The backend wraps every body in a `{ "response": ... }` envelope and uses
//! distinguished `user` / `admin` fields depending on which profile endpoint
//! was called. Role permissions arrive either as plain strings or as
//! `{ "name": ... }` objects; both shapes are accepted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated account returned by the profile endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Role attached to a user, carrying its permission list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionEntry>,
}

/// One entry of a role's permission list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionEntry {
    /// Bare capability name, e.g. `"view-role"`.
    Name(String),
    /// Object form, e.g. `{ "name": "view-role", ... }`.
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl PermissionEntry {
    /// The capability name this entry contributes, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Object { name } => name.as_deref(),
        }
    }
}

/// Envelope around the profile endpoints' payload.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub response: ProfileBody,
}

/// Body of a profile response: `user` from the app endpoint, `admin` from the
/// admin endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileBody {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub admin: Option<User>,
}

impl ProfileEnvelope {
    /// The user record regardless of which endpoint variant produced it.
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        self.response.user.or(self.response.admin)
    }
}

/// Request body for the send-OTP endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct SendOtpPayload {
    /// Delivery channel, e.g. `"phone"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Phone number or email the code is sent to.
    pub target: String,
}

/// Envelope around the send-OTP response.
#[derive(Clone, Debug, Deserialize)]
pub struct SendOtpEnvelope {
    pub response: SendOtpBody,
}

/// Body of a send-OTP response.
#[derive(Clone, Debug, Deserialize)]
pub struct SendOtpBody {
    /// Server-issued secret echoed back during verification.
    pub secret_code: String,
}

/// Request body for the verify-OTP endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyOtpPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
    pub otp: String,
    pub secret_code: String,
}

/// Envelope around the verify-OTP response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenEnvelope {
    pub response: TokenBody,
}

/// Tokens issued on successful OTP verification.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenBody {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}
