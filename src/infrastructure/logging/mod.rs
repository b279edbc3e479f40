//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional JSON log file
//! - Decision sink that reports engine decisions as log events

pub mod logger;
pub mod tracing_sink;

pub use logger::LoggerImpl;
pub use tracing_sink::TracingDecisionSink;
