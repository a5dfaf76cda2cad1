//! Writer metrics for observability
//!
//! Per-record write failures never reach the `submit` caller (that call has
//! already returned), so these counters are the side channel through which a
//! host application can observe writer health.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking writer operation.
///
/// # Example
///
/// ```
/// use async_file_logger::WriterMetrics;
///
/// let metrics = WriterMetrics::new();
///
/// metrics.record_submitted();
/// metrics.record_written();
///
/// assert_eq!(metrics.records_submitted(), 1);
/// assert_eq!(metrics.records_written(), 1);
/// ```
#[derive(Debug)]
pub struct WriterMetrics {
    /// Records accepted by `submit` and placed on the queue
    records_submitted: AtomicU64,

    /// Records successfully appended to the sink
    records_written: AtomicU64,

    /// Sink append or flush failures
    write_failures: AtomicU64,

    /// Records discarded because they were submitted after close began
    records_discarded: AtomicU64,
}

impl WriterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_submitted: AtomicU64::new(0),
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            records_discarded: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_submitted(&self) -> u64 {
        self.records_submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_discarded(&self) -> u64 {
        self.records_discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.records_submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.records_discarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Write failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no writes have been attempted.
    pub fn failure_rate(&self) -> f64 {
        let failures = self.write_failures() as f64;
        let total = self.records_written() as f64 + failures;
        if total == 0.0 {
            0.0
        } else {
            (failures / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.records_submitted.store(0, Ordering::Relaxed);
        self.records_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.records_discarded.store(0, Ordering::Relaxed);
    }
}

impl Default for WriterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for WriterMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            records_submitted: AtomicU64::new(self.records_submitted()),
            records_written: AtomicU64::new(self.records_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            records_discarded: AtomicU64::new(self.records_discarded()),
        }
    }
}
