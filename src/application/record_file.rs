use crate::adapters::outbound::filesystem::{LineJoiner, LineTokenizer};
use crate::ports::outbound::{RecordReader, RecordWriter};
use crate::record::{Mode, Separator};
use crate::shared::Result;
use std::path::Path;

/// RecordFile - facade composing one reader and one writer
///
/// The facade owns a RecordReader and a RecordWriter, injected at
/// construction time, and exposes exactly one of them depending on the mode
/// selected at open time. Both are plain constructor parameters so that
/// test doubles can be substituted.
///
/// # Type Parameters
/// * `R` - RecordReader implementation
/// * `W` - RecordWriter implementation
pub struct RecordFile<R, W> {
    reader: R,
    writer: W,
    mode: Option<Mode>,
}

impl RecordFile<LineTokenizer, LineJoiner> {
    /// Creates a facade over the filesystem adapters with the default tab
    /// separator.
    pub fn new_default() -> Self {
        Self::new(LineTokenizer::new(), LineJoiner::new())
    }

    /// Creates a facade over the filesystem adapters with a custom
    /// separator shared by both sides.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidSeparator` if the token is empty.
    pub fn with_separator(separator: &str) -> Result<Self> {
        let separator = Separator::new(separator)?;
        Ok(Self::new(
            LineTokenizer::from_separator(separator.clone()),
            LineJoiner::from_separator(separator),
        ))
    }
}

impl Default for RecordFile<LineTokenizer, LineJoiner> {
    fn default() -> Self {
        Self::new_default()
    }
}

impl<R, W> RecordFile<R, W>
where
    R: RecordReader,
    W: RecordWriter,
{
    /// Creates a facade with injected reader and writer implementations.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            mode: None,
        }
    }

    /// Opens the path in exactly one of read or write mode.
    ///
    /// Read mode requires the path to exist; write mode creates or
    /// truncates it. The mode selects which underlying component the
    /// subsequent `read`/`write` calls reach.
    pub fn open(&mut self, path: &Path, mode: Mode) -> Result<()> {
        match mode {
            Mode::Read => self.reader.open(path)?,
            Mode::Write => self.writer.open(path)?,
        }
        self.mode = Some(mode);
        Ok(())
    }

    /// Reads the next two-field projection from the read side.
    ///
    /// # Errors
    /// Surfaces `CodecError::StreamNotReady` when the facade was not opened
    /// in read mode.
    pub fn read(&mut self) -> Result<Option<(String, String)>> {
        self.reader.read()
    }

    /// Writes one delimited row through the write side.
    ///
    /// # Errors
    /// Surfaces `CodecError::StreamNotReady` when the facade was not opened
    /// in write mode.
    pub fn write(&mut self, fields: &[&str]) -> Result<()> {
        self.writer.write(fields)
    }

    /// Releases both underlying resources unconditionally.
    ///
    /// Safe to call repeatedly or without a prior open.
    pub fn close(&mut self) {
        self.reader.close();
        self.writer.close();
        self.mode = None;
    }

    /// The mode selected by the last successful open, if any.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }
}
