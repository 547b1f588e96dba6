//! Build-time configuration.
//!
//! Base URLs come from environment variables captured at compile time, with
//! same-origin fallbacks suitable for a reverse-proxied deployment.

/// Base URL for REST API calls.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("ADMIN_CONSOLE_API_URL").unwrap_or("/api/v1")
}

/// Base URL for the chat WebSocket, if one was configured at build time.
/// When absent the client derives `ws(s)://{host}` from the page location.
#[must_use]
pub fn ws_base_url() -> Option<&'static str> {
    option_env!("ADMIN_CONSOLE_WS_URL")
}
