//! Payment payloads. `PaymentIntentResponse` carries the client secret, which
//! is handed straight to Stripe.js and must never be logged or stored.

use crate::{app_lib::AppError, features::users::types::UserId};
use serde::{Deserialize, Serialize};

/// Amount preselected when the checkout opens, in major currency units.
pub const DEFAULT_AMOUNT: u32 = 1;
/// Currency symbol shown on the pay button.
pub const CURRENCY_SYMBOL: &str = "₹";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: u32,
    pub payment_method_id: String,
    pub payable_user_id: UserId,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Where a confirmed payment ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded,
    /// Confirmed without error but not settled (for example `processing`).
    Pending(String),
}

impl PaymentOutcome {
    /// Maps a PaymentIntent status. A missing or blank status is an error.
    pub fn from_status(status: Option<&str>) -> Result<Self, AppError> {
        match status.map(str::trim) {
            Some("succeeded") => Ok(PaymentOutcome::Succeeded),
            Some(status) if !status.is_empty() => Ok(PaymentOutcome::Pending(status.to_string())),
            _ => Err(AppError::Payment(
                "Stripe returned no payment status.".to_string(),
            )),
        }
    }

    pub fn message(&self) -> String {
        match self {
            PaymentOutcome::Succeeded => "Payment successful!".to_string(),
            PaymentOutcome::Pending(status) => {
                format!("Payment submitted; current status: {status}.")
            }
        }
    }
}

/// Amount in the currency's minor unit (paise, cents).
pub fn amount_in_minor_units(amount: u32) -> Option<u64> {
    u64::from(amount).checked_mul(100)
}

/// Parses the amount typed in the checkout form: a whole number, at least 1.
pub fn parse_amount(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(amount) if amount >= 1 => Ok(amount),
        _ => Err(AppError::Validation(
            "Enter a whole amount of at least 1.".to_string(),
        )),
    }
}

/// Pay button caption.
pub fn pay_label(amount: u32) -> String {
    format!("Pay {CURRENCY_SYMBOL}{amount}")
}

#[cfg(test)]
mod tests {
    use super::{
        PaymentOutcome, PaymentRequest, amount_in_minor_units, parse_amount, pay_label,
    };
    use crate::{app_lib::AppError, features::users::types::UserId};

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request = PaymentRequest {
            amount: 5,
            payment_method_id: "pm_123".to_string(),
            payable_user_id: UserId::Number(9),
        };
        let json = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(json["amount"], 5);
        assert_eq!(json["paymentMethodId"], "pm_123");
        assert_eq!(json["payableUserId"], 9);
    }

    #[test]
    fn intent_response_reads_client_secret() {
        let response: super::PaymentIntentResponse =
            serde_json::from_str(r#"{"clientSecret":"pi_1_secret_2"}"#)
                .expect("response should parse");
        assert_eq!(response.client_secret, "pi_1_secret_2");
    }

    #[test]
    fn minor_units_scale_by_hundred() {
        assert_eq!(amount_in_minor_units(1), Some(100));
        assert_eq!(amount_in_minor_units(250), Some(25_000));
        assert_eq!(amount_in_minor_units(u32::MAX), Some(u64::from(u32::MAX) * 100));
    }

    #[test]
    fn amount_must_be_a_positive_whole_number() {
        assert_eq!(parse_amount(" 3 "), Ok(3));
        for raw in ["", "0", "-1", "2.5", "lots"] {
            assert!(
                matches!(parse_amount(raw), Err(AppError::Validation(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn outcome_follows_intent_status() {
        assert_eq!(
            PaymentOutcome::from_status(Some("succeeded")),
            Ok(PaymentOutcome::Succeeded)
        );
        assert_eq!(
            PaymentOutcome::from_status(Some("processing")),
            Ok(PaymentOutcome::Pending("processing".to_string()))
        );
        assert!(PaymentOutcome::Succeeded.message().contains("successful"));
    }

    #[test]
    fn missing_intent_status_is_a_payment_error() {
        for status in [None, Some(""), Some("  ")] {
            assert!(
                matches!(PaymentOutcome::from_status(status), Err(AppError::Payment(_))),
                "{status:?} should be rejected"
            );
        }
    }

    #[test]
    fn pay_label_shows_major_units() {
        assert_eq!(pay_label(1), "Pay ₹1");
    }
}
