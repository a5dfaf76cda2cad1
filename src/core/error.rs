//! Error types for the writer

pub type Result<T> = std::result::Result<T, WriterError>;

#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Destination could not be opened for append; fatal to construction
    #[error("failed to open log destination '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error from a sink append or flush
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic sink error
    #[error("{0}")]
    Other(String),
}

impl WriterError {
    /// Create an open error for a destination path
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        WriterError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WriterError::Other(msg.into())
    }
}
