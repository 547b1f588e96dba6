//! Shared UI components.

pub mod lang_switch;
pub mod sidebar;
pub mod spinner;
