//! Route guarding: language-prefix normalization, auth gating, permission
//! gating, and loop-safe redirect execution.
//!
//! DESIGN
//! ======
//! Every navigation event runs one explicit pipeline pass
//! ([`pipeline::evaluate`]) in a fixed order: path normalizer, auth gate,
//! permission gate. Each stage is a pure function over the current facts and
//! the pass yields at most one [`RedirectDecision`], which the
//! [`executor::RedirectExecutor`] applies with a history-replacing
//! navigation. The executor never navigates to the current path, so a
//! redirect that lands on an already-canonical route reaches a fixed point
//! instead of looping.

pub mod auth_gate;
pub mod config;
pub mod executor;
pub mod path;
pub mod permission_gate;
pub mod pipeline;

/// Why a redirect was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// The path lacked a supported language prefix.
    LangPrefix,
    /// An anonymous user tried to reach an app route.
    AuthRequired,
    /// An authenticated user lingered on an auth route.
    LeaveAuthPage,
    /// The route is admin-only or capability-guarded and the user lacks it.
    PermissionDenied,
}

/// An instruction to navigate, produced by one gate per pass and consumed
/// immediately by the executor. Never retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectDecision {
    pub target: String,
    pub reason: RedirectReason,
}
