//! Session persistence. The API hands out an opaque token that is sent back
//! verbatim in the `Authorization` header; it lives in `localStorage` under
//! `token` next to the signed-in email under `email`. Never log either value.

/// Local-storage key holding the session token.
pub const TOKEN_KEY: &str = "token";
/// Local-storage key holding the signed-in email.
pub const EMAIL_KEY: &str = "email";

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed access to the session keys over any [`KeyValueStore`].
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the stored token, treating blank values as absent.
    pub fn token(&self) -> Option<String> {
        self.non_blank(TOKEN_KEY)
    }

    pub fn email(&self) -> Option<String> {
        self.non_blank(EMAIL_KEY)
    }

    pub fn save(&self, token: &str, email: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(EMAIL_KEY, email);
    }

    /// Drops the token only; used when the API rejects it.
    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(EMAIL_KEY);
    }

    fn non_blank(&self, key: &str) -> Option<String> {
        self.store
            .get(key)
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserStorage, session};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, SessionStore};

    /// `window.localStorage`. Every operation is a no-op when storage is
    /// unavailable (private mode, sandboxed iframes).
    pub struct BrowserStorage {
        inner: Option<web_sys::Storage>,
    }

    impl BrowserStorage {
        pub fn new() -> Self {
            let inner = web_sys::window()
                .and_then(|window| window.local_storage().ok())
                .flatten();
            if inner.is_none() {
                tracing::warn!("localStorage is unavailable; sessions will not persist");
            }
            Self { inner }
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = &self.inner {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "failed to write localStorage");
                }
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = &self.inner {
                let _ = storage.remove_item(key);
            }
        }
    }

    /// Session store backed by the browser's local storage.
    pub fn session() -> SessionStore<BrowserStorage> {
        SessionStore::new(BrowserStorage::new())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    pub struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EMAIL_KEY, KeyValueStore, SessionStore, TOKEN_KEY, memory::MemoryStorage};

    #[test]
    fn save_writes_both_keys() {
        let session = SessionStore::new(MemoryStorage::default());
        session.save("abc.def", "ops@roster.dev");

        assert_eq!(session.token().as_deref(), Some("abc.def"));
        assert_eq!(session.email().as_deref(), Some("ops@roster.dev"));
        assert_eq!(session.store.get(TOKEN_KEY).as_deref(), Some("abc.def"));
        assert_eq!(session.store.get(EMAIL_KEY).as_deref(), Some("ops@roster.dev"));
    }

    #[test]
    fn clear_token_keeps_email() {
        let session = SessionStore::new(MemoryStorage::default());
        session.save("abc.def", "ops@roster.dev");
        session.clear_token();

        assert_eq!(session.token(), None);
        assert_eq!(session.email().as_deref(), Some("ops@roster.dev"));
    }

    #[test]
    fn clear_removes_everything() {
        let session = SessionStore::new(MemoryStorage::default());
        session.save("abc.def", "ops@roster.dev");
        session.clear();

        assert_eq!(session.token(), None);
        assert_eq!(session.email(), None);
    }

    #[test]
    fn blank_token_counts_as_signed_out() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "  ");
        let session = SessionStore::new(storage);

        assert_eq!(session.token(), None);
    }
}
