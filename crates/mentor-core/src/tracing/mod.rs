//! Observability for the mentor engines.
//! `tracing` with an `EnvFilter` read from `MENTOR_LOG`.

pub mod setup;

pub use setup::{init_tracing, DEFAULT_FILTER, LOG_ENV_VAR};
