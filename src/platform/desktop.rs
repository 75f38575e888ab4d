//! Desktop platform implementation.

use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::error::PlatformError;
use crate::formatter::FrameFormatter;

/// Blocks the calling thread; precise to well under a millisecond.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(fmt::layer().with_ansi(true).event_format(FrameFormatter))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).map_err(|e| PlatformError::TracingInit(e.to_string()))
}

pub fn rng() -> ThreadRng {
    rand::rng()
}
