//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reads the token on every request through [`TokenStore`].
//! In the browser the token lives in `localStorage`; tests and SSR use the
//! in-memory store.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// Storage for the single bearer token of the current session.
///
/// A present token means an authenticated session; `None` means anonymous.
pub trait TokenStore: Send + Sync {
    /// Current token, if any. Blank stored values count as no token.
    fn token(&self) -> Option<String>;
    /// Persist `token`, replacing any previous one.
    fn set_token(&self, token: &str);
    /// Forget the stored token.
    fn clear_token(&self);
}

/// Token store backed by `window.localStorage`.
///
/// Storage errors are swallowed: a browser without storage behaves as an
/// anonymous session. Outside `hydrate` builds every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?
                .get_item(crate::config::TOKEN_STORAGE_KEY)
                .ok()
                .flatten()?;
            non_blank(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(crate::config::TOKEN_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(crate::config::TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        let guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        guard.clone().and_then(non_blank)
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
