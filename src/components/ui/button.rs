use leptos::{ev::MouseEvent, prelude::*};

/// Color scheme for [`Button`].
#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Warning,
    Success,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "text-white bg-blue-700 hover:bg-blue-800 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            }
            ButtonVariant::Danger => {
                "text-white bg-red-600 hover:bg-red-700 focus:ring-red-300 dark:bg-red-600 dark:hover:bg-red-700 dark:focus:ring-red-900"
            }
            ButtonVariant::Warning => {
                "text-gray-900 bg-amber-400 hover:bg-amber-500 focus:ring-amber-200 dark:focus:ring-amber-900"
            }
            ButtonVariant::Success => {
                "text-white bg-emerald-600 hover:bg-emerald-700 focus:ring-emerald-300 dark:focus:ring-emerald-900"
            }
            ButtonVariant::Secondary => {
                "text-gray-700 bg-white border border-gray-300 hover:bg-gray-50 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] small: bool,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let size = if small {
        "px-3 py-1.5 text-xs"
    } else {
        "px-5 py-2.5 text-sm"
    };
    let class = format!(
        "{} {} focus:ring-4 focus:outline-none font-medium rounded-lg text-center",
        variant.class(),
        size
    );

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
