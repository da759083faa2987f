use leptos::prelude::*;

/// Loading indicator; `small` fits inside a button.
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let size = if small {
        "h-4 w-4 border-2"
    } else {
        "h-7 w-7 border-4"
    };

    view! {
        <div
            class=format!(
                "inline-block {size} animate-spin rounded-full border-blue-200 border-t-blue-600 align-middle",
            )
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
