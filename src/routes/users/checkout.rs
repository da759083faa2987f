//! Card payment modal for a single user. The Stripe card element is mounted
//! into a node owned by the modal and torn down when the modal closes.

use crate::{
    app_lib::{AppError, config::AppConfig},
    components::{Alert, AlertKind, Button, ButtonVariant, Modal, Spinner},
    features::{
        payments::{
            client,
            stripe::CardCheckout,
            types::{DEFAULT_AMOUNT, PaymentOutcome, parse_amount, pay_label},
        },
        users::types::UserId,
    },
};
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

#[component]
pub fn CheckoutModal(user_id: UserId, on_close: Callback<()>) -> impl IntoView {
    let user_id = StoredValue::new(user_id);
    let (amount, set_amount) = signal(DEFAULT_AMOUNT.to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (outcome, set_outcome) = signal::<Option<PaymentOutcome>>(None);
    let (paying, set_paying) = signal(false);
    let checkout = StoredValue::new_local(None::<CardCheckout>);
    let card_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(node) = card_ref.get() else {
            return;
        };
        if checkout.with_value(Option::is_some) {
            return;
        }
        let key = AppConfig::load().stripe_publishable_key;
        match CardCheckout::mount(&key, &node) {
            Ok(mounted) => checkout.set_value(Some(mounted)),
            Err(AppError::Config(message)) => set_error.set(Some(message)),
            Err(err) => set_error.set(Some(err.user_message())),
        }
    });

    on_cleanup(move || {
        checkout.with_value(|mounted| {
            if let Some(mounted) = mounted {
                mounted.destroy();
            }
        });
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if paying.get_untracked() {
            return;
        }
        set_error.set(None);
        set_outcome.set(None);

        let amount = match parse_amount(&amount.get_untracked()) {
            Ok(amount) => amount,
            Err(err) => {
                set_error.set(Some(err.user_message()));
                return;
            }
        };
        let Some(card) = checkout.get_value() else {
            set_error.set(Some("The payment form is not ready yet.".to_string()));
            return;
        };

        set_paying.set(true);
        let payable = user_id.get_value();
        spawn_local(async move {
            match client::pay(&card, amount, payable).await {
                Ok(result) => set_outcome.set(Some(result)),
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_paying.set(false);
        });
    };

    let button_label = move || {
        parse_amount(&amount.get())
            .map(pay_label)
            .unwrap_or_else(|_| "Pay".to_string())
    };

    view! {
        <Modal title="Card Payment" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                {move || {
                    outcome
                        .get()
                        .map(|result| {
                            let kind = match result {
                                PaymentOutcome::Succeeded => AlertKind::Success,
                                PaymentOutcome::Pending(_) => AlertKind::Info,
                            };
                            view! { <Alert kind=kind message=result.message() /> }
                        })
                }}
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="payment-amount">
                        "Amount"
                    </label>
                    <input
                        id="payment-amount"
                        type="number"
                        min="1"
                        step="1"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || amount.get()
                        on:input=move |event| set_amount.set(event_target_value(&event))
                    />
                </div>
                <div
                    node_ref=card_ref
                    class="rounded-lg border border-gray-300 bg-white p-3 dark:border-gray-600"
                ></div>
                <div class="pt-2 flex items-center gap-3 justify-end">
                    {move || paying.get().then_some(view! { <Spinner small=true /> })}
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button button_type="submit" disabled=paying>
                        {button_label}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
