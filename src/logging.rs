use crate::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Install the global log subscriber for `config`.
///
/// Output goes to stderr through `tracing-subscriber`'s fmt layer; records
/// emitted through the `log` facade are bridged into it. `RUST_LOG`
/// overrides [`Config::log_level`].
///
/// # Errors
///
/// Fails if a global subscriber or logger is already installed.
pub fn init_logging(config: &Config) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
