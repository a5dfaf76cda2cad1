//! Log record structure

use super::level::LogLevel;
use chrono::{DateTime, Utc};

/// Maximum number of characters retained in a record's text payload.
/// Longer input is silently truncated at construction, never rejected.
pub const MAX_TEXT_LEN: usize = 255;

/// A single log record: severity, capture timestamp, and a bounded text
/// payload.
///
/// Records are move-only. There is deliberately no `Clone` impl, so a record
/// handed to the writer has exactly one owner and its payload buffer is never
/// duplicated. A record is never mutated after construction; ownership simply
/// moves from the submitting thread through the queue to the worker, which
/// drops it once written.
#[derive(Debug)]
pub struct Record {
    level: LogLevel,
    timestamp: DateTime<Utc>,
    text: String,
}

impl Record {
    /// Build a record from a level and raw text, capturing the current
    /// wall-clock time. Text beyond [`MAX_TEXT_LEN`] characters is dropped
    /// on a character boundary.
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((idx, _)) = text.char_indices().nth(MAX_TEXT_LEN) {
            text.truncate(idx);
        }
        Self {
            level,
            timestamp: Utc::now(),
            text,
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for Record {
    /// An empty placeholder record: Info level, epoch timestamp, empty text.
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            timestamp: DateTime::UNIX_EPOCH,
            text: String::new(),
        }
    }
}
