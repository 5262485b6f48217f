use crate::shared::Result;
use std::path::Path;

/// RecordReader port for streaming the two-field projection of a record file
///
/// This port abstracts a line-readable record source. Exactly one stream is
/// owned per instance; implementations are synchronous and single-threaded.
pub trait RecordReader {
    /// Acquires a readable stream for the given path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not exist
    /// - The stream cannot be opened due to permissions or I/O errors
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Reads the next line and extracts its two-field projection
    ///
    /// # Returns
    /// `Some((field1, field2))` when the line splits into at least two
    /// tokens; `None` at end of input, on an empty line, or when the line
    /// has fewer than two tokens (a silent skip, not an error).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The stream was never opened or was already closed
    /// - The underlying read fails
    fn read(&mut self) -> Result<Option<(String, String)>>;

    /// Releases the stream
    ///
    /// Idempotent: closing an already-closed or never-opened reader is a
    /// no-op, and close never fails.
    fn close(&mut self);
}
