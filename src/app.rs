use crate::{app_lib::build_info, features::auth::state::AuthProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component: session context outside, router inside so every route
/// can read the signed-in state.
#[component]
pub fn App() -> impl IntoView {
    tracing::info!(commit = build_info::git_commit_hash(), "starting roster web");

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
