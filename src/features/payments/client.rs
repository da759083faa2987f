//! Drives a card payment: tokenize with Stripe, create the PaymentIntent on
//! our API, then confirm it with Stripe. The API never sees card details and
//! the client secret is never logged.

use crate::{
    app_lib::{AppError, post_json},
    features::{
        payments::{
            stripe::CardCheckout,
            types::{PaymentIntentResponse, PaymentOutcome, PaymentRequest, amount_in_minor_units},
        },
        users::types::UserId,
    },
};

/// Asks the API for a PaymentIntent and returns its client secret.
pub async fn create_payment_intent(request: &PaymentRequest) -> Result<String, AppError> {
    let response: PaymentIntentResponse = post_json("/payments", request).await?;
    Ok(response.client_secret)
}

/// Charges `amount` (major units) for `payable_user_id` using the card typed
/// into `checkout`.
pub async fn pay(
    checkout: &CardCheckout,
    amount: u32,
    payable_user_id: UserId,
) -> Result<PaymentOutcome, AppError> {
    let payment_method_id = checkout.create_payment_method().await?;

    tracing::info!(
        amount,
        amount_minor = ?amount_in_minor_units(amount),
        user = %payable_user_id,
        "creating payment intent"
    );
    let client_secret = create_payment_intent(&PaymentRequest {
        amount,
        payment_method_id: payment_method_id.clone(),
        payable_user_id,
    })
    .await?;

    let outcome = checkout
        .confirm_card_payment(&client_secret, &payment_method_id)
        .await;
    match &outcome {
        Ok(result) => tracing::info!(?result, "payment confirmed"),
        Err(err) => tracing::warn!(%err, "payment failed"),
    }
    outcome
}
