//! Add/edit user modal. Fields are validated locally before the multipart
//! request goes out; avatar files are kept as browser `File` handles and
//! uploaded with the form.

use crate::{
    components::{Alert, AlertKind, Button, Modal, Spinner},
    features::users::{
        client,
        collection::UserChange,
        types::{User, UserFormValues},
        validation::{FieldErrors, validate_user_form},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use web_sys::{File, HtmlInputElement};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

/// What the editor is working on.
#[derive(Clone, Debug)]
pub enum EditorTarget {
    Create,
    Edit(User),
}

impl EditorTarget {
    fn title(&self) -> &'static str {
        match self {
            EditorTarget::Create => "Add User",
            EditorTarget::Edit(_) => "Edit User",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            EditorTarget::Create => "Add User",
            EditorTarget::Edit(_) => "Update User",
        }
    }

    fn initial_values(&self) -> UserFormValues {
        match self {
            EditorTarget::Create => UserFormValues::default(),
            EditorTarget::Edit(user) => UserFormValues::from_user(user),
        }
    }
}

#[component]
pub fn UserEditor(
    target: EditorTarget,
    on_close: Callback<()>,
    on_saved: Callback<UserChange>,
) -> impl IntoView {
    let initial = target.initial_values();
    let title = target.title();
    let submit_label = target.submit_label();
    let target = StoredValue::new(target);

    let (name, set_name) = signal(initial.name);
    let (email, set_email) = signal(initial.email);
    let (age, set_age) = signal(initial.age);
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let (file_count, set_file_count) = signal(0_usize);
    let files = StoredValue::new_local(Vec::<File>::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);

        let values = UserFormValues {
            name: name.get_untracked(),
            email: email.get_untracked(),
            age: age.get_untracked(),
        };
        let user = match validate_user_form(&values) {
            Ok(user) => {
                set_field_errors.set(FieldErrors::default());
                user
            }
            Err(errors) => {
                set_field_errors.set(errors);
                return;
            }
        };

        set_pending.set(true);
        let avatars = files.get_value();
        let target = target.get_value();
        spawn_local(async move {
            let result = match &target {
                EditorTarget::Create => client::create_user(&user, &avatars)
                    .await
                    .map(UserChange::Created),
                EditorTarget::Edit(existing) => client::update_user(&existing.id, &user, &avatars)
                    .await
                    .map(UserChange::Updated),
            };
            set_pending.set(false);
            match result {
                Ok(change) => on_saved.run(change),
                Err(err) => set_error.set(Some(err.user_message())),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            <form on:submit=on_submit novalidate class="space-y-4">
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-name">
                        "Name"
                    </label>
                    <input
                        id="user-name"
                        type="text"
                        class=INPUT_CLASS
                        prop:value=move || name.get()
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().name) />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-email">
                        "Email"
                    </label>
                    <input
                        id="user-email"
                        type="email"
                        class=INPUT_CLASS
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().email) />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-age">
                        "Age"
                    </label>
                    <input
                        id="user-age"
                        type="number"
                        class=INPUT_CLASS
                        prop:value=move || age.get()
                        on:input=move |event| set_age.set(event_target_value(&event))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().age) />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-avatars">
                        "Avatars"
                    </label>
                    <input
                        id="user-avatars"
                        type="file"
                        name="avatars"
                        multiple
                        accept="image/*"
                        class=INPUT_CLASS
                        on:change=move |event| {
                            let input = event_target::<HtmlInputElement>(&event);
                            let selected: Vec<File> = input
                                .files()
                                .map(|list| {
                                    (0..list.length()).filter_map(|index| list.get(index)).collect()
                                })
                                .unwrap_or_default();
                            set_file_count.set(selected.len());
                            files.set_value(selected);
                        }
                    />
                    <p class="mt-1 text-xs text-gray-500">
                        {move || match file_count.get() {
                            0 => String::new(),
                            1 => "1 file selected".to_string(),
                            count => format!("{count} files selected"),
                        }}
                    </p>
                </div>
                <div class="pt-2 flex items-center gap-3 justify-end">
                    {move || pending.get().then_some(view! { <Spinner small=true /> })}
                    <Button button_type="submit" disabled=pending>
                        {submit_label}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

/// Inline validation message under a form field.
#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <div class="mt-1 text-sm text-red-600 dark:text-red-400">{text}</div> })
    }
}
