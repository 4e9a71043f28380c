//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-crate log directives.
pub const LOG_ENV_VAR: &str = "MENTOR_LOG";

/// Directive used when `MENTOR_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "mentor=info";

static INIT: Once = Once::new();

/// Initialize the mentor tracing/logging system.
///
/// Format: `MENTOR_LOG=mentor_analysis=debug,mentor_recommend=warn`.
/// Idempotent. If the host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
