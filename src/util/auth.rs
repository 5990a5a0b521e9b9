//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and the app root restores the session from the stored bearer token once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;

/// Whether a guarded route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Auth state to start from given whether a token is stored.
pub fn initial_auth_state(has_token: bool) -> AuthState {
    if has_token {
        AuthState::bootstrapping()
    } else {
        AuthState::default()
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Exchange a stored token for the current user.
///
/// A token the backend rejects is cleared so the session falls back to
/// anonymous. Without a token nothing is fetched.
pub fn bootstrap_session(api: ApiClient, auth: RwSignal<AuthState>) {
    auth.set(initial_auth_state(api.is_authenticated()));
    if !api.is_authenticated() {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api.fetch_current_user().await {
            Ok(user) => {
                leptos::logging::log!("session restored for {}", user.username);
                auth.update(|s| s.resolve(Some(user)));
            }
            Err(e) => {
                leptos::logging::warn!("session bootstrap failed: {e}");
                api.logout();
                auth.update(|s| s.resolve(None));
            }
        }
    });
}
