//! REST API helpers for the profile and OTP endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! credential attached as a bearer token. Outside the browser the helpers
//! are stubs, since these endpoints are only meaningful there.
//!
//! ERROR HANDLING
//! ==============
//! The profile fetch returns `Option` so a failure degrades to "not logged
//! in" (the auth gate then routes to login) instead of crashing hydration.
//! The OTP calls return `Result` with a display string for the form to show.

#![allow(clippy::unused_async)]

use super::types::{SendOtpBody, SendOtpPayload, TokenBody, User, VerifyOtpPayload};

#[cfg(feature = "hydrate")]
use crate::storage::{KeyValueStore, LocalStore, keys};

/// Fetch the current user from the profile endpoint matching the stored
/// `admin` flag. Returns `None` when unauthenticated, on any failure, or on
/// the server.
pub async fn fetch_profile(admin: bool) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        use super::endpoints;
        use super::types::ProfileEnvelope;

        let endpoint = if admin {
            endpoints::ADMIN_PROFILE
        } else {
            endpoints::USER_PROFILE
        };
        let url = format!("{}{endpoint}", crate::config::api_base_url());

        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = LocalStore.get(keys::ACCESS_TOKEN) {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }

        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProfileEnvelope>().await.ok()?.into_user()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = admin;
        None
    }
}

/// Request an OTP for `payload.target`.
///
/// # Errors
///
/// Returns a display string when the request fails or the server rejects it.
pub async fn send_otp(payload: &SendOtpPayload, admin: bool) -> Result<SendOtpBody, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::endpoints;
        use super::types::SendOtpEnvelope;

        let endpoint = if admin {
            endpoints::ADMIN_SEND_OTP
        } else {
            endpoints::USER_SEND_OTP
        };
        let envelope: SendOtpEnvelope = post_json(endpoint, payload).await?;
        Ok(envelope.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, admin);
        Err("not available on server".to_owned())
    }
}

/// Verify an OTP and obtain tokens.
///
/// # Errors
///
/// Returns a display string when the request fails or the code is rejected.
pub async fn verify_otp(payload: &VerifyOtpPayload, admin: bool) -> Result<TokenBody, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::endpoints;
        use super::types::TokenEnvelope;

        let endpoint = if admin {
            endpoints::ADMIN_VERIFY_OTP
        } else {
            endpoints::USER_VERIFY_OTP
        };
        let envelope: TokenEnvelope = post_json(endpoint, payload).await?;
        Ok(envelope.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, admin);
        Err("not available on server".to_owned())
    }
}

/// POST `body` as JSON to `endpoint` and decode the JSON response.
#[cfg(feature = "hydrate")]
async fn post_json<B, R>(endpoint: &str, body: &B) -> Result<R, String>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let url = format!("{}{endpoint}", crate::config::api_base_url());
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    resp.json::<R>().await.map_err(|e| e.to_string())
}
