use tracing_forest::{ForestLayer, printer::PrettyPrinter};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the tracing subscriber. Filtered by `RUST_LOG`, warnings only by default.
///
/// Trees go to stderr so stdout carries nothing but the completion line.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(ForestLayer::from(PrettyPrinter::new().writer(std::io::stderr)))
        .init();
}
