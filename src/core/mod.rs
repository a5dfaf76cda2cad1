//! Core writer types and traits

pub mod error;
pub mod level;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod writer;

pub use error::{Result, WriterError};
pub use level::LogLevel;
pub use metrics::WriterMetrics;
pub use record::{Record, MAX_TEXT_LEN};
pub use sink::Sink;
pub use writer::AsyncWriter;
