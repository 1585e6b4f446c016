use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the `tracing` subscriber. Diagnostics go to stderr so stdout only
/// carries the action log; `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Already installed (e.g., tests).
        }
    });
}
