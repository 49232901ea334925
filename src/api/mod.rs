//! Read-only HTTP client for the recommendation backend.
//!
//! All calls go through [`ApiClient::get_json`], which normalizes every
//! failure into an [`ApiError`] and memoizes outcomes in a short-lived
//! [`ResponseCache`] keyed by request identity.

mod cache;
mod client;
mod error;

pub use cache::ResponseCache;
pub use client::ApiClient;
pub use error::ApiError;
