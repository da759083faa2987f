//! Shared layout wrapper with the header and content container. The header
//! shows the signed-in email and the logout button once a session exists.
//! Navigation is client-side only; the API enforces access control.

use crate::{
    components::{Alert, AlertKind, Button, ButtonVariant},
    features::auth::{client, state::use_auth},
    routes::paths,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let email = auth.email();
    let (logout_error, set_logout_error) = signal::<Option<String>>(None);
    let (logging_out, set_logging_out) = signal(false);

    let on_logout = move |_: MouseEvent| {
        if logging_out.get_untracked() {
            return;
        }
        set_logging_out.set(true);
        set_logout_error.set(None);
        spawn_local(async move {
            match client::logout().await {
                // Guards and the home route react to the cleared session.
                Ok(()) => auth.clear_session(),
                Err(err) => {
                    tracing::warn!(%err, "logout failed");
                    set_logout_error.set(Some("Logout failed. Please try again.".to_string()));
                }
            }
            set_logging_out.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <span class="material-symbols-outlined text-blue-600">"group"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">"Roster"</span>
                    </A>
                    <Show when=move || is_authenticated.get()>
                        <div class="flex items-center gap-4">
                            <span class="hidden sm:inline text-sm text-gray-500 dark:text-gray-400">
                                {move || email.get()}
                            </span>
                            <Button
                                variant=ButtonVariant::Danger
                                small=true
                                disabled=logging_out
                                on_click=on_logout
                            >
                                "Logout"
                            </Button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6 space-y-4">
                    {move || {
                        logout_error
                            .get()
                            .map(|message| {
                                view! {
                                    <Alert
                                        kind=AlertKind::Error
                                        message=message
                                        on_dismiss=move |_| set_logout_error.set(None)
                                    />
                                }
                            })
                    }}
                    {children()}
                </div>
            </main>
        </div>
    }
}
