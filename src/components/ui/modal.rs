//! Centered dialog with a dimmed backdrop. Callers decide when to render it;
//! closing only notifies `on_close`.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
            role="dialog"
            aria-modal="true"
        >
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700 flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        {title}
                    </h2>
                    <button
                        type="button"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                    >
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>
                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}
