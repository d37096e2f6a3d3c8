use tracing_subscriber::Layer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "llmstxt=info";

// Log to stderr so the rendered document can go to stdout
pub fn init_tracing_subscriber(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("llmstxt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
