//! Sink trait for log output destinations

use super::{error::Result, record::Record};

/// An appendable destination for log records.
///
/// The writer's worker thread takes exclusive ownership of its sink, so
/// implementations only need to be `Send`. The core requires nothing beyond
/// append and flush semantics; closing happens on drop.
pub trait Sink: Send {
    fn append(&mut self, record: &Record) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
