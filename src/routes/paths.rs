//! Client-side route paths.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
