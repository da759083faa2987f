//! User list screen: one page of users at a time, with row actions for edit,
//! delete and payment. Page changes refetch; mutations patch the rows on
//! screen instead of reloading the page.

use super::{
    checkout::CheckoutModal,
    editor::{EditorTarget, UserEditor},
};
use crate::{
    app_lib::config::AppConfig,
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner},
    features::users::{
        client,
        collection::{UserChange, apply_change, fetch_banner},
        pagination::PageInfo,
        types::{User, UserId},
    },
};
use leptos::{prelude::*, task::spawn_local};

const HEADER_CELL: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
const CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

/// Renders the users table and fetches the current page.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let page_size = AppConfig::load().page_size;
    let page = RwSignal::new(1_u32);
    let users = RwSignal::new(Vec::<User>::new());
    let info = RwSignal::new(PageInfo::first());
    let (error, set_error) = signal::<Option<String>>(None);
    let editor = RwSignal::new(None::<EditorTarget>);
    let payable = RwSignal::new(None::<UserId>);
    let deleting = RwSignal::new(None::<UserId>);

    let listing = LocalResource::new(move || {
        let page = page.get();
        async move { client::list_users(page, page_size).await }
    });

    Effect::new(move |_| {
        if let Some(result) = listing.get() {
            set_error.set(fetch_banner(&result));
            if let Ok(loaded) = result {
                users.set(loaded.users);
                info.set(loaded.info);
            }
        }
    });

    let on_delete = move |id: UserId| {
        if deleting.get_untracked().is_some() {
            return;
        }
        set_error.set(None);
        deleting.set(Some(id.clone()));
        spawn_local(async move {
            match client::delete_user(&id).await {
                Ok(()) => users.update(|list| apply_change(list, UserChange::Deleted(id))),
                Err(err) => {
                    set_error.set(Some(format!("Error deleting user: {}", err.user_message())))
                }
            }
            deleting.set(None);
        });
    };

    let on_saved = Callback::new(move |change: UserChange| {
        users.update(|list| apply_change(list, change));
        editor.set(None);
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Users List"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {move || {
                                info.get()
                                    .total_users
                                    .map(|total| format!("{total} users in total"))
                                    .unwrap_or_default()
                            }}
                        </p>
                    </div>
                    <Button on_click=move |_| editor.set(Some(EditorTarget::Create))>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"person_add"</span>
                            "Add User"
                        </div>
                    </Button>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <Alert
                                    kind=AlertKind::Error
                                    message=message
                                    on_dismiss=move |_| set_error.set(None)
                                />
                            }
                        })
                }}

                <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=HEADER_CELL>"Name"</th>
                                <th scope="col" class=HEADER_CELL>"Email"</th>
                                <th scope="col" class=HEADER_CELL>"Age"</th>
                                <th scope="col" class=HEADER_CELL>"Avatars"</th>
                                <th scope="col" class=format!("{HEADER_CELL} text-right")>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <Show
                                when=move || listing.get().is_some()
                                fallback=|| view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                            >
                                <Show
                                    when=move || !users.with(Vec::is_empty)
                                    fallback=|| view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No users found."
                                            </td>
                                        </tr>
                                    }
                                >
                                    <For
                                        each=move || users.get()
                                        key=|user| user.clone()
                                        children=move |user: User| {
                                            let row_id = user.id.clone();
                                            let is_deleting = Signal::derive({
                                                let row_id = row_id.clone();
                                                move || deleting.get().as_ref() == Some(&row_id)
                                            });
                                            let edit_target = user.clone();
                                            let delete_id = row_id.clone();
                                            let pay_id = row_id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class=format!("{CELL} font-medium text-gray-900 dark:text-white")>
                                                        {user.name.clone()}
                                                    </td>
                                                    <td class=CELL>{user.email.clone()}</td>
                                                    <td class=CELL>
                                                        {user.age.map(|age| age.to_string()).unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class=CELL>
                                                        <AvatarStrip avatars=user.avatars().to_vec() />
                                                    </td>
                                                    <td class=format!("{CELL} text-right")>
                                                        <div class="inline-flex gap-2">
                                                            <Button
                                                                variant=ButtonVariant::Warning
                                                                small=true
                                                                on_click=move |_| {
                                                                    editor.set(Some(EditorTarget::Edit(edit_target.clone())))
                                                                }
                                                            >
                                                                "Edit"
                                                            </Button>
                                                            <Button
                                                                variant=ButtonVariant::Danger
                                                                small=true
                                                                disabled=is_deleting
                                                                on_click=move |_| on_delete(delete_id.clone())
                                                            >
                                                                "Delete"
                                                            </Button>
                                                            <Button
                                                                variant=ButtonVariant::Success
                                                                small=true
                                                                on_click=move |_| payable.set(Some(pay_id.clone()))
                                                            >
                                                                "Payment"
                                                            </Button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </Show>
                            </Show>
                        </tbody>
                    </table>
                </div>

                <div class="flex items-center justify-between w-full">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !info.get().has_previous())
                        on_click=move |_| page.set(info.get_untracked().previous())
                    >
                        "Previous"
                    </Button>
                    <span class="text-sm text-gray-700 dark:text-gray-300">
                        {move || info.get().label()}
                    </span>
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !info.get().has_next())
                        on_click=move |_| page.set(info.get_untracked().next())
                    >
                        "Next"
                    </Button>
                </div>
            </div>

            {move || {
                editor
                    .get()
                    .map(|target| {
                        view! {
                            <UserEditor
                                target=target
                                on_close=Callback::new(move |_| editor.set(None))
                                on_saved=on_saved
                            />
                        }
                    })
            }}
            {move || {
                payable
                    .get()
                    .map(|user_id| {
                        view! {
                            <CheckoutModal
                                user_id=user_id
                                on_close=Callback::new(move |_| payable.set(None))
                            />
                        }
                    })
            }}
        </AppShell>
    }
}

/// Thumbnails for a user's avatars.
#[component]
fn AvatarStrip(avatars: Vec<String>) -> impl IntoView {
    if avatars.is_empty() {
        return view! { <span class="text-gray-400">"No Avatars"</span> }.into_any();
    }

    view! {
        <div class="flex gap-1">
            {avatars
                .into_iter()
                .enumerate()
                .map(|(index, src)| {
                    view! {
                        <img
                            src=src
                            alt=format!("Avatar {}", index + 1)
                            class="h-[50px] w-[50px] rounded object-cover"
                        />
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
