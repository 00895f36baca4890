//! Observability for contact form sessions.

pub mod metrics;

pub use metrics::SessionMetrics;
