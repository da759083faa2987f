//! Auth session state shared through Leptos context. The provider hydrates
//! from local storage once on mount; after that the signal and the storage
//! are updated together by `set_session` and `clear_session`.

use crate::{app_lib::storage, features::auth::types::Session};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after login. The client already
    /// persisted it.
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    /// Forgets the session in memory and in storage.
    pub fn clear_session(&self) {
        storage::session().clear();
        self.session.set(None);
    }

    pub fn email(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.get().map(|s| s.email).unwrap_or_default())
    }
}

/// Provides auth context seeded from local storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = storage::session();
    let stored = store.token().map(|token| Session {
        token,
        email: store.email().unwrap_or_default(),
    });
    let auth = AuthContext::new(RwSignal::new(stored));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
