//! Tracing export to a local OTLP JSON file.
//!
//! The plugin has no network collector to talk to, so spans from `tracing` are
//! bridged into OpenTelemetry and written line by line to a rotating file:
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → swipecart-otlp.json
//! ```
//!
//! The level comes from the `trace_level` plugin option (an `EnvFilter` directive,
//! default `info`). Search requests, stale-response drops and swipe decisions are
//! logged at `debug`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use swipecart::observability::init_tracing;
//! use swipecart::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_file_path, SERVICE_NAME};
