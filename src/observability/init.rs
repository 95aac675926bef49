//! Subscriber setup: `tracing` spans → OpenTelemetry → JSON trace file.

use super::exporter;
use crate::infrastructure::default_trace_file;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level`, otherwise [`DEFAULT_TRACE_LEVEL`].
/// Spans go to `config.trace_file`, or to `movie-catalog-otlp.json` next to the
/// data file. Nothing is printed to the terminal.
///
/// Tracing is optional: if the trace directory cannot be created this returns
/// without installing anything, and calling it twice keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let trace_file = config
        .trace_file
        .clone()
        .unwrap_or_else(|| default_trace_file(&config.data_file));

    if let Some(dir) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let provider = exporter::create_tracer_provider(trace_file);
    let tracer = provider.tracer(exporter::SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
