//! HTTP client for the forum service endpoints.

mod client;

pub use client::{ApiClient, ApiError};
