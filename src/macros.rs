//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for submitting records with
//! automatic string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```no_run
//! use async_file_logger::prelude::*;
//! use async_file_logger::info;
//!
//! let writer = AsyncWriter::open("app.log")?;
//!
//! // Basic logging
//! info!(writer, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(writer, "Server listening on port {}", port);
//! # Ok::<(), WriterError>(())
//! ```

/// Submit a record with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let writer = AsyncWriter::open("app.log")?;
/// use async_file_logger::log;
/// log!(writer, LogLevel::Info, "Simple message");
/// log!(writer, LogLevel::Error, "Error code: {}", 500);
/// # Ok::<(), WriterError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($writer:expr, $level:expr, $($arg:tt)+) => {
        $writer.submit($level, format!($($arg)+))
    };
}

/// Submit an info-level record.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let writer = AsyncWriter::open("app.log")?;
/// use async_file_logger::info;
/// info!(writer, "Application started");
/// info!(writer, "Processing {} items", 100);
/// # Ok::<(), WriterError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Submit a warning-level record.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let writer = AsyncWriter::open("app.log")?;
/// use async_file_logger::warn;
/// warn!(writer, "Low disk space");
/// warn!(writer, "Retry attempt {} of {}", 3, 5);
/// # Ok::<(), WriterError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Submit an error-level record.
///
/// # Examples
///
/// ```no_run
/// # use async_file_logger::prelude::*;
/// # let writer = AsyncWriter::open("app.log")?;
/// use async_file_logger::error;
/// error!(writer, "Failed to connect to database");
/// error!(writer, "Error code: {}, message: {}", 500, "Internal error");
/// # Ok::<(), WriterError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::LogLevel::Error, $($arg)+)
    };
}
