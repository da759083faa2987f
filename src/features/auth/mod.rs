//! Auth feature: the login/register exchange, the persisted session token and
//! the route guard. The token is opaque to the client and must never be
//! logged.
//!
//! Flow Overview: the login screen validates the form, posts it to `/login`
//! or `/register`, stores whichever token the API returned, and navigates to
//! the user list. Logout posts the email to `/logout` and clears storage.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
