use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Redirects to the login screen when no session token is stored.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            // UX-only guard; the API rejects requests without a valid token.
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}
