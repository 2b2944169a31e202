use std::any::Any;

use tracing_forest::ForestLayer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. Kept at `warn` so log lines do
/// not interleave with the chart on stdout.
const DEFAULT_FILTER: &str = "warn";

/// Holds whatever the subscriber needs to stay alive. Drop it last.
pub struct LoggerGuard(#[allow(dead_code)] Option<Box<dyn Any>>);

/// Initializes the global tracing subscriber.
///
/// The default `Level` is `WARN`. It can be overridden with `RUST_LOG`.
pub fn init_logger() -> anyhow::Result<LoggerGuard> {
    #[cfg(feature = "tracing-profile")]
    {
        let guard = tracing_profile::init_tracing()
            .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err:?}"))?;
        Ok(LoggerGuard(Some(Box::new(guard))))
    }

    #[cfg(not(feature = "tracing-profile"))]
    {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(filter)
            .with(ForestLayer::default())
            .try_init()?;

        Ok(LoggerGuard(None))
    }
}
