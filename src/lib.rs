//! # Async File Logger
//!
//! A minimal asynchronous file logger: producer threads submit log records
//! without blocking on disk I/O, and a single dedicated background worker
//! thread drains the queue and appends each record to a file.
//!
//! ## Features
//!
//! - **Non-blocking submission**: `submit` only enqueues and wakes the worker
//! - **Single worker**: all sink I/O happens on one background thread
//! - **Shutdown drain**: closing the writer waits for every queued record
//!   to reach the file before returning
//! - **Thread safe**: any number of producer threads may share a writer

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AsyncWriter, LogLevel, Record, Result, Sink, WriterError, WriterMetrics, MAX_TEXT_LEN,
    };
    pub use crate::sinks::FileSink;
}

pub use crate::core::{
    AsyncWriter, LogLevel, Record, Result, Sink, WriterError, WriterMetrics, MAX_TEXT_LEN,
};
pub use crate::sinks::FileSink;
