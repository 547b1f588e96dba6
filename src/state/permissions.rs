//! Capability set derived from a user's role.
//!
//! Pure derivation: recomputed whenever the role changes, never mutated in
//! place. An absent or empty role yields the empty set.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use std::collections::HashSet;

use crate::net::types::Role;

/// Capabilities the current user holds, keyed by capability name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    capabilities: HashSet<String>,
}

impl PermissionSet {
    /// Derive the set from an optional role.
    #[must_use]
    pub fn from_role(role: Option<&Role>) -> Self {
        let capabilities = role
            .map(|r| {
                r.permissions
                    .iter()
                    .filter_map(|p| p.name().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();
        Self { capabilities }
    }

    /// Whether the user holds `capability`.
    #[must_use]
    pub fn has(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Whether the user holds no capabilities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
