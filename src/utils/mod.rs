//! Utility modules

pub mod http_interceptor;
pub mod text;

pub use http_interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use text::{strip_quotes, truncate_chars};
