//! Observability helpers

pub mod logging;

pub use logging::{
    OutputFormat, TracingConfig, init_tracing, mask_sensitive_value, redact_query_key,
};
