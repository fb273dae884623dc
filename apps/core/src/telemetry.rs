//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! composition root's job. Output is human-readable by default and switches
//! to bunyan-style JSON lines when `ADVISOR_LOG_JSON=1`.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` controls filtering, falling back to `default_level`. Calling
/// this twice is harmless: the second installation is ignored.
pub fn init_telemetry(service_name: &str, default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let json = std::env::var("ADVISOR_LOG_JSON")
        .map(|value| value == "1")
        .unwrap_or(false);

    if json {
        let formatting_layer =
            BunyanFormattingLayer::new(service_name.to_string(), std::io::stdout);
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(formatting_layer);
        let _ = set_global_default(subscriber);
    } else {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer());
        let _ = set_global_default(subscriber);
    }
}
