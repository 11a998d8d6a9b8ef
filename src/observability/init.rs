//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name attached to every exported span.
pub const SERVICE_NAME: &str = "Swipecart";

/// Where spans are written: `swipecart-otlp.json` in the plugin data directory.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::get_data_dir().join("swipecart-otlp.json")
}

/// Installs the global subscriber.
///
/// Tracing is optional: when the data directory cannot be created nothing is
/// installed, and a second call is a no-op.
///
/// ```rust,no_run
/// use swipecart::observability::init_tracing;
/// use swipecart::Config;
///
/// let config = Config {
///     trace_level: Some("swipecart=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let trace_file = trace_file_path();
    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
