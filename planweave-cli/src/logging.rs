//! Logging initialization: logs go to stderr so stdout carries only the answer.
//!
//! Reads `RUST_LOG` from env (e.g. via .env). Default level: `info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initializes tracing with an env filter, writing to stderr.
///
/// - **RUST_LOG**: level filter, e.g. `info`, `debug`, `planweave=debug`.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper_util=off"));
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init();
}
