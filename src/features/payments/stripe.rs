//! Bindings to the subset of Stripe.js used by the checkout modal.
//!
//! Stripe.js is loaded from `js.stripe.com` by `index.html` and exposes a
//! global `Stripe(publishableKey)` factory. Card details never reach this
//! crate: they stay inside Stripe's card element iframe, and we only see the
//! resulting PaymentMethod id.
//!
//! ### Flow Overview
//! 1. **Mount**: `Stripe(key).elements().create("card", {hidePostalCode})`
//!    is mounted into a DOM node owned by the modal.
//! 2. **Tokenize**: `createPaymentMethod({type: "card", card})` turns the card
//!    element into a PaymentMethod id.
//! 3. **Confirm**: `confirmCardPayment(clientSecret, {payment_method})` runs
//!    any 3-D Secure challenge and settles the PaymentIntent.

use crate::{app_lib::AppError, features::payments::types::PaymentOutcome};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// `Stripe` instance returned by the global factory.
    #[derive(Clone)]
    pub type StripeJs;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_factory(publishable_key: &str) -> Result<StripeJs, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &StripeJs) -> StripeElements;

    #[wasm_bindgen(method, js_name = createPaymentMethod)]
    fn create_payment_method(this: &StripeJs, data: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = confirmCardPayment)]
    fn confirm_card_payment(this: &StripeJs, client_secret: &str, data: &JsValue) -> Promise;

    #[derive(Clone)]
    type StripeElements;

    #[wasm_bindgen(method)]
    fn create(this: &StripeElements, kind: &str, options: &JsValue) -> CardElement;

    /// Stripe-hosted card input.
    #[derive(Clone)]
    pub type CardElement;

    #[wasm_bindgen(method)]
    fn mount(this: &CardElement, target: &HtmlElement);

    #[wasm_bindgen(method)]
    fn destroy(this: &CardElement);
}

/// A Stripe client together with the card element it mounted.
#[derive(Clone)]
pub struct CardCheckout {
    stripe: StripeJs,
    card: CardElement,
}

impl CardCheckout {
    /// Creates the Stripe client and mounts a card element into `target`.
    pub fn mount(publishable_key: &str, target: &HtmlElement) -> Result<Self, AppError> {
        if publishable_key.trim().is_empty() {
            return Err(AppError::Config(
                "Stripe publishable key is not configured.".to_string(),
            ));
        }

        let stripe = stripe_factory(publishable_key).map_err(|err| {
            tracing::warn!(error = ?err, "Stripe.js is unavailable");
            AppError::Payment("The payment form could not be loaded.".to_string())
        })?;

        let options = Object::new();
        set(&options, "hidePostalCode", &JsValue::TRUE)?;
        let card = stripe.elements().create("card", &options);
        card.mount(target);

        Ok(Self { stripe, card })
    }

    /// Tokenizes the card currently typed into the element.
    pub async fn create_payment_method(&self) -> Result<String, AppError> {
        let data = Object::new();
        set(&data, "type", &JsValue::from_str("card"))?;
        set(&data, "card", &self.card)?;

        let result = JsFuture::from(self.stripe.create_payment_method(&data))
            .await
            .map_err(|_| AppError::Payment("Card details could not be processed.".to_string()))?;
        reject_stripe_error(&result)?;

        let method = get(&result, "paymentMethod")?;
        get(&method, "id")?
            .as_string()
            .ok_or_else(|| AppError::Payment("Stripe returned no payment method.".to_string()))
    }

    /// Confirms the PaymentIntent identified by `client_secret`.
    pub async fn confirm_card_payment(
        &self,
        client_secret: &str,
        payment_method_id: &str,
    ) -> Result<PaymentOutcome, AppError> {
        let data = Object::new();
        set(&data, "payment_method", &JsValue::from_str(payment_method_id))?;

        let result = JsFuture::from(self.stripe.confirm_card_payment(client_secret, &data))
            .await
            .map_err(|_| AppError::Payment("Payment confirmation failed.".to_string()))?;
        reject_stripe_error(&result)?;

        let intent = get(&result, "paymentIntent")?;
        let status = get(&intent, "status")?.as_string();
        PaymentOutcome::from_status(status.as_deref())
    }

    /// Unmounts the card element.
    pub fn destroy(&self) {
        self.card.destroy();
    }
}

/// Stripe resolves (rather than rejects) with `{ error: { message } }` for
/// card declines and validation problems.
fn reject_stripe_error(result: &JsValue) -> Result<(), AppError> {
    let error = get(result, "error")?;
    if error.is_undefined() || error.is_null() {
        return Ok(());
    }

    let message = get(&error, "message")?
        .as_string()
        .unwrap_or_else(|| "Payment failed.".to_string());
    Err(AppError::Payment(message))
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, AppError> {
    Reflect::get(target, &JsValue::from_str(key))
        .map_err(|_| AppError::Payment(format!("Unexpected Stripe response ({key}).")))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), AppError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|_| AppError::Payment(format!("Failed to prepare Stripe request ({key}).")))
}
