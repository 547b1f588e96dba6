//! Route pages.

pub mod dashboard;
pub mod live_chat;
pub mod login;
pub mod verify_otp;
