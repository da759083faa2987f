//! Shared frontend utilities: API access, configuration, session storage,
//! errors, logging and build metadata.
//!
//! ## Session model
//!
//! 1. **Sign in:** `/login` or `/register` answers with a token, either in the
//!    `Authorization` response header or as `token` in the body.
//! 2. **Persist:** the token and the signed-in email go to `localStorage`
//!    (`token` and `email`).
//! 3. **Use:** every API call sends the raw token back as `Authorization`.
//! 4. **Expire:** a 401 on a call that carried the token clears it and sends
//!    the browser to `/login`.
//!
//! Centralizing these helpers keeps network behavior consistent across routes.
//! Callers must not log tokens, passwords, or payment secrets.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;
pub(crate) mod storage;
pub(crate) mod url;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    MultipartMethod, delete, get_json_with_headers, post_json, post_json_empty,
    post_json_response, send_multipart,
};
pub(crate) use errors::AppError;
