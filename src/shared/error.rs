use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the delimited line codec.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid separator: the separator must have at least one character")]
    InvalidSeparator,

    #[error("File not found: {path}\n\n💡 Hint: Read mode requires the file to already exist. Check the path, or open in write mode to create it")]
    NotFound { path: PathBuf },

    #[error("Stream is not ready: cannot {operation} before open or after close\n\n💡 Hint: Call open() before trying to {operation}")]
    StreamNotReady { operation: String },

    #[error("Invalid mode \"{value}\": expected \"read\" or \"write\"")]
    InvalidMode { value: String },

    #[error("I/O failure on {path}\nDetails: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    /// Shorthand for the not-ready error raised by read/write paths.
    pub fn not_ready(operation: &str) -> Self {
        CodecError::StreamNotReady {
            operation: operation.to_string(),
        }
    }
}
