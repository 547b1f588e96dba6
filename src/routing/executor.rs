//! Redirect executor: the only component allowed to trigger navigation.

#[cfg(test)]
#[path = "executor_test.rs"]
mod executor_test;

use crate::routing::RedirectDecision;

/// Navigation capability supplied by the hosting router.
///
/// Only history-replacing navigation is exposed: redirect hops must not
/// accumulate history entries, or back-navigation would bounce through them.
pub trait Navigator {
    /// Replace the current history entry with `path`.
    fn replace(&self, path: &str);
}

/// Applies redirect decisions while upholding the anti-loop invariant.
#[derive(Clone, Debug)]
pub struct RedirectExecutor<N> {
    navigator: N,
}

impl<N: Navigator> RedirectExecutor<N> {
    /// Wrap a navigation capability.
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Apply `decision` against `current_path`.
    ///
    /// No-ops when there is no decision and when the target equals the
    /// current path; a navigation to the current path would re-trigger the
    /// pipeline and loop.
    pub fn execute(&self, decision: Option<RedirectDecision>, current_path: &str) {
        let Some(decision) = decision else {
            return;
        };
        if decision.target == current_path {
            return;
        }
        self.navigator.replace(&decision.target);
    }
}

impl<F: Fn(&str)> Navigator for F {
    fn replace(&self, path: &str) {
        self(path);
    }
}
