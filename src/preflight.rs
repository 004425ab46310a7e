use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Ports below this need elevated privileges on most unix systems.
const FIRST_UNPRIVILEGED_PORT: u16 = 1024;

fn default_filter() -> EnvFilter {
    EnvFilter::new(format!(
        "{}=debug,tower_http=info",
        env!("CARGO_CRATE_NAME")
    ))
}

pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs the `color_eyre` panic and error report hooks.
///
/// # Errors
///
/// Returns an error if the hooks were already installed.
pub fn init_error_formatter() -> color_eyre::Result<()> {
    color_eyre::install()
}

/// Warnings about configuration that will load fine but probably isn't what
/// the operator wanted. Returns how many warnings were emitted.
#[must_use]
pub fn checks(config: &AppConfig) -> usize {
    let mut warnings = 0;

    if config.request_timeout_secs == 0 {
        warn!(
            "REQUEST_TIMEOUT_SECS is 0, so every request will time out before a handler runs. \
            Set it to a positive number of seconds."
        );
        warnings += 1;
    }

    if config.server_port != 0 && config.server_port < FIRST_UNPRIVILEGED_PORT {
        warn!(
            "SERVER_PORT {} is a privileged port. Binding may fail unless the process runs \
            with elevated permissions.",
            config.server_port
        );
        warnings += 1;
    }

    if warnings == 0 {
        info!("Configuration passed preflight checks");
    }

    warnings
}
