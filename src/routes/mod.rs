mod health;
mod home;
mod login;
mod not_found;
pub(crate) mod paths;
mod users;

pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use users::UsersListPage;

use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Guarded alias of the user list for direct links.
#[component]
fn GuardedUsersPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <UsersListPage />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/users") view=GuardedUsersPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
