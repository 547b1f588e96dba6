//! REST endpoint paths, relative to the API base URL.
//!
//! Auth endpoints come in distinguished app and admin variants; the `admin`
//! flag stored with the credential selects which side to call.

/// Send an OTP to an app user.
pub const USER_SEND_OTP: &str = "/app/auth/sent-otp";
/// Verify an app user's OTP and issue tokens.
pub const USER_VERIFY_OTP: &str = "/app/auth/verify-otp";
/// Send an OTP to an admin.
pub const ADMIN_SEND_OTP: &str = "/admin/auth/sent-otp";
/// Verify an admin's OTP and issue tokens.
pub const ADMIN_VERIFY_OTP: &str = "/admin/auth/verify-otp";

/// Current app user's profile.
pub const USER_PROFILE: &str = "/app/auth/user";
/// Current admin's profile.
pub const ADMIN_PROFILE: &str = "/admin/auth/user";
