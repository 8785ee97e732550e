//! Logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::LogLevel;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`, e.g.
/// `RUST_LOG=polyloclib=trace polyloc src`. Logs go to stderr so stdout
/// carries only the report and the final total.
pub fn initialize(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.as_tracing().into()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
