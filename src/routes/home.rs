//! Landing route: the user list for signed-in operators, the login form
//! otherwise. It re-renders as soon as the session appears or disappears.

use crate::{
    features::auth::state::use_auth,
    routes::{LoginPage, UsersListPage},
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated.get() fallback=|| view! { <LoginPage /> }>
            <UsersListPage />
        </Show>
    }
}
