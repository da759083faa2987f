//! Sign-in screen that doubles as the registration form. It validates the
//! form locally, posts the credentials, and lets the auth client persist the
//! returned token before moving on to the user list.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::{
        client,
        state::use_auth,
        types::{AuthMode, Credentials},
        validation::validate_credentials,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let auth_action = Action::new_local(move |input: &(AuthMode, Credentials)| {
        let (mode, credentials) = input.clone();
        async move { client::authenticate(mode, &credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = auth_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    navigate(paths::HOME, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if let Err(err) = validate_credentials(&email_value, &password_value) {
            set_error.set(Some(err));
            return;
        }

        auth_action.dispatch((
            mode.get_untracked(),
            Credentials {
                email: email_value,
                password: password_value,
            },
        ));
    };

    let toggle_mode = move |_| {
        set_error.set(None);
        set_mode.update(|mode| *mode = mode.toggle());
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {move || mode.get().heading()}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {move || mode.get().subtitle()}
                    </p>
                </div>
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mb-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
                <form on:submit=on_submit novalidate>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="email"
                        >
                            "Email address"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class=INPUT_CLASS
                            autocomplete="email"
                            placeholder="Enter email"
                            prop:value=move || email.get()
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class=INPUT_CLASS
                            placeholder="Password"
                            autocomplete=move || match mode.get() {
                                AuthMode::Login => "current-password",
                                AuthMode::Register => "new-password",
                            }
                            prop:value=move || password.get()
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="grid mb-4">
                        <Button button_type="submit" disabled=auth_action.pending()>
                            {move || {
                                let mode = mode.get();
                                if auth_action.pending().get() {
                                    mode.pending_label()
                                } else {
                                    mode.submit_label()
                                }
                            }}
                        </Button>
                    </div>
                    {move || {
                        auth_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mb-4 text-center"><Spinner /></div> })
                    }}
                    <div class="text-center">
                        <button
                            type="button"
                            class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                            on:click=toggle_mode
                        >
                            {move || mode.get().switch_label()}
                        </button>
                    </div>
                </form>
            </div>
        </AppShell>
    }
}
