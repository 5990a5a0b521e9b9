//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Provided to components as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State while the stored token is being exchanged for a user.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    /// Settle the session with the resolved user (or none).
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}
