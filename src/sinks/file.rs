//! Append-mode file sink

use crate::core::{Record, Result, Sink, WriterError};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends records to a single file as `<level-code> : <text>` lines.
///
/// The text is written verbatim; embedded newlines are not escaped.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if absent. Existing content is
    /// never truncated.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| WriterError::open(path.display().to_string(), e))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Sink for FileSink {
    fn append(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{} : {}", record.level().code(), record.text())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
