//! User records: list with header-based pagination, multipart create/update
//! with avatar uploads, and delete.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod collection;
pub(crate) mod pagination;
pub(crate) mod types;
pub(crate) mod validation;
