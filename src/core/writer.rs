//! Asynchronous writer implementation

use super::{error::Result, level::LogLevel, metrics::WriterMetrics, record::Record, sink::Sink};
use crate::sinks::FileSink;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Asynchronous log writer: an unbounded record queue drained by exactly one
/// background worker thread that owns the sink.
///
/// Producers hand records over through [`submit`](Self::submit) without ever
/// touching the sink; all disk I/O happens on the worker. Dropping the writer
/// (or calling [`close`](Self::close)) drains the queue to completion before
/// the sink is flushed and closed.
pub struct AsyncWriter {
    sender: Option<Sender<Record>>,
    worker: Option<thread::JoinHandle<()>>,
    metrics: Arc<WriterMetrics>,
}

impl AsyncWriter {
    /// Open `path` for appending (creating it if absent, never truncating
    /// existing content) and start the background worker.
    ///
    /// On failure no worker is started and the error carries the offending
    /// path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let sink = FileSink::new(path)?;
        Ok(Self::with_sink(Box::new(sink)))
    }

    /// Start a writer over an arbitrary sink.
    pub fn with_sink(sink: Box<dyn Sink>) -> Self {
        let (sender, receiver) = unbounded();
        let metrics = Arc::new(WriterMetrics::new());
        let worker_metrics = Arc::clone(&metrics);

        let worker = thread::spawn(move || {
            Self::run_worker(receiver, sink, &worker_metrics);
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
            metrics,
        }
    }

    /// Worker loop.
    ///
    /// `recv` blocks while the queue is empty and keeps yielding queued
    /// records after the sender side is gone, so the loop exits exactly when
    /// close has been requested AND the queue is drained. Records are written
    /// one at a time in FIFO order; the sink is flushed whenever the queue
    /// momentarily empties and once more before exit.
    fn run_worker(receiver: Receiver<Record>, mut sink: Box<dyn Sink>, metrics: &WriterMetrics) {
        while let Ok(record) = receiver.recv() {
            Self::write_record(sink.as_mut(), &record, metrics);

            // Drain whatever queued up behind it before sleeping again
            while let Ok(record) = receiver.try_recv() {
                Self::write_record(sink.as_mut(), &record, metrics);
            }

            Self::flush_sink(sink.as_mut(), metrics);
        }

        Self::flush_sink(sink.as_mut(), metrics);
    }

    fn write_record(sink: &mut dyn Sink, record: &Record, metrics: &WriterMetrics) {
        match sink.append(record) {
            Ok(()) => {
                metrics.record_written();
            }
            Err(e) => {
                eprintln!("[WRITER ERROR] sink '{}' append failed: {}", sink.name(), e);
                metrics.record_write_failure();
            }
        }
    }

    fn flush_sink(sink: &mut dyn Sink, metrics: &WriterMetrics) {
        if let Err(e) = sink.flush() {
            eprintln!("[WRITER ERROR] sink '{}' flush failed: {}", sink.name(), e);
            metrics.record_write_failure();
        }
    }

    /// Build a record from `level` and `text` and enqueue it, waking the
    /// worker if it is idle. Never blocks on I/O.
    ///
    /// The queue is unbounded: submission always succeeds while the writer is
    /// open, and sustained submission faster than the sink drains grows
    /// memory without limit. Records submitted after [`close`](Self::close)
    /// has begun are discarded and counted in the metrics.
    pub fn submit(&self, level: LogLevel, text: impl Into<String>) {
        let record = Record::new(level, text);
        match &self.sender {
            Some(sender) => {
                if sender.send(record).is_ok() {
                    self.metrics.record_submitted();
                } else {
                    self.metrics.record_discarded();
                }
            }
            None => {
                self.metrics.record_discarded();
            }
        }
    }

    #[inline]
    pub fn info(&self, text: impl Into<String>) {
        self.submit(LogLevel::Info, text);
    }

    #[inline]
    pub fn warn(&self, text: impl Into<String>) {
        self.submit(LogLevel::Warn, text);
    }

    #[inline]
    pub fn error(&self, text: impl Into<String>) {
        self.submit(LogLevel::Error, text);
    }

    /// Signal termination and wait for the worker to drain every queued
    /// record and exit; the sink has been flushed and closed when this
    /// returns. There is no deadline: close blocks until the drain completes.
    ///
    /// A second close is a no-op. Also invoked on drop.
    pub fn close(&mut self) {
        // Disconnecting the queue wakes the worker even when it is idle
        drop(self.sender.take());

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                eprintln!("[WRITER ERROR] worker thread panicked during shutdown");
            }
        }
    }

    /// Counters for submitted/written/failed/discarded records.
    pub fn metrics(&self) -> &WriterMetrics {
        &self.metrics
    }
}

impl Drop for AsyncWriter {
    fn drop(&mut self) {
        self.close();
    }
}
