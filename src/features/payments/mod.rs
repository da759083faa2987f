//! One-off card payments through Stripe's hosted card element.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod stripe;
pub(crate) mod types;
