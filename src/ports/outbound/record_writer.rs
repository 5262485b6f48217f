use crate::shared::Result;
use std::path::Path;

/// RecordWriter port for serializing delimited record lines
///
/// This port abstracts a line-writable record sink. Exactly one stream is
/// owned per instance; implementations are synchronous and single-threaded.
pub trait RecordWriter {
    /// Acquires a writable stream, creating or truncating the target
    ///
    /// # Errors
    /// Returns an error if the stream cannot be created due to permissions
    /// or I/O errors.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Joins the fields with the configured separator and writes one line
    ///
    /// Accepts zero fields (producing an empty line) through arbitrarily
    /// many. The line is followed by a newline terminator.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The stream was never opened or was already closed
    /// - The underlying write fails
    fn write(&mut self, fields: &[&str]) -> Result<()>;

    /// Flushes and releases the stream
    ///
    /// Idempotent and infallible: flush failures are not surfaced, and
    /// closing a never-opened writer is a no-op.
    fn close(&mut self);
}
