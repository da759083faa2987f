//! Alert banners for success and error messages. Messages must be safe to render
//! and should never include tokens or payment secrets.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
            AlertKind::Info => {
                "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
        }
    }
}

/// Renders a styled alert banner, with a close button when `on_dismiss` is set.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=format!("{} flex items-start justify-between gap-3", kind.class()) role="alert">
            <span>{message}</span>
            {on_dismiss
                .map(|dismiss| {
                    view! {
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="opacity-70 hover:opacity-100"
                            on:click=move |_| dismiss.run(())
                        >
                            <span class="material-symbols-outlined text-base">"close"</span>
                        </button>
                    }
                })}
        </div>
    }
}
