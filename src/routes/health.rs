use crate::app_lib::{build_info, config::AppConfig};
use crate::components::AppShell;
use leptos::prelude::*;

/// Build and configuration summary for deploy checks. Shows nothing secret:
/// the Stripe key is publishable and only its presence is reported.
#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let config = AppConfig::load();
    let api = if config.api_base_url.is_empty() {
        "same origin".to_string()
    } else {
        config.api_base_url
    };
    let stripe = if config.stripe_publishable_key.is_empty() {
        "missing"
    } else {
        "configured"
    };

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block w-full max-w-[38rem] rounded-lg border border-neutral-200 bg-white dark:border-neutral-300 dark:bg-neutral-600">
                    <div class="border-b-2 border-[#0000002d] px-6 py-3 text-neutral-600 dark:text-neutral-50 font-semibold">
                        "Build Version"
                    </div>
                    <dl class="p-6 grid grid-cols-3 gap-2 text-sm text-black dark:text-neutral-50">
                        <dt class="font-medium">"Commit"</dt>
                        <dd class="col-span-2 font-mono">{commit}</dd>
                        <dt class="font-medium">"API"</dt>
                        <dd class="col-span-2 font-mono break-all">{api}</dd>
                        <dt class="font-medium">"Stripe key"</dt>
                        <dd class="col-span-2">{stripe}</dd>
                        <dt class="font-medium">"Page size"</dt>
                        <dd class="col-span-2">{config.page_size}</dd>
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
