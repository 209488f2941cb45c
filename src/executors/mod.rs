//! HTTP executors
//!
//! Providers own their request/response schema; the executor owns the HTTP
//! round trip: interceptors, status classification and JSON decoding.

pub mod json;

pub use json::{ErrorClassifier, HttpJsonExecutor};
