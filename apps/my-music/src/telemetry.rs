//! Tracing setup for hosts embedding the page

use soundshelf_shared_config::CommonConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber filtered by `RUST_LOG` or the configured level
///
/// # Errors
/// Returns `TryInitError` if a global subscriber is already installed.
pub fn init_tracing(config: &CommonConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(!config.environment.is_production()),
        )
        .try_init()?;

    tracing::info!(environment = %config.environment, "Tracing initialized");
    Ok(())
}
