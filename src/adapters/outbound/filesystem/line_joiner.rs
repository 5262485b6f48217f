use crate::ports::outbound::RecordWriter;
use crate::record::{line, Separator};
use crate::shared::error::CodecError;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct OpenWriter {
    path: PathBuf,
    stream: BufWriter<File>,
}

/// LineJoiner adapter - the file-backed write path
///
/// Implements the RecordWriter port over a buffered file stream. Each write
/// serializes one row: the fields joined by the separator, terminated by a
/// newline.
#[derive(Debug)]
pub struct LineJoiner {
    separator: Separator,
    open: Option<OpenWriter>,
}

impl LineJoiner {
    /// Creates a joiner with the default tab separator.
    pub fn new() -> Self {
        Self::from_separator(Separator::default())
    }

    /// Creates a joiner with a custom separator token.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidSeparator` if the token is empty.
    pub fn with_separator(separator: &str) -> Result<Self> {
        Ok(Self::from_separator(Separator::new(separator)?))
    }

    /// Creates a joiner from an already-validated separator.
    pub fn from_separator(separator: Separator) -> Self {
        Self {
            separator,
            open: None,
        }
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }
}

impl Default for LineJoiner {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordWriter for LineJoiner {
    fn open(&mut self, path: &Path) -> Result<()> {
        // Re-opening replaces the prior handle; flush it first so buffered
        // rows are not lost.
        self.close();

        let file = File::create(path).map_err(|e| CodecError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.open = Some(OpenWriter {
            path: path.to_path_buf(),
            stream: BufWriter::new(file),
        });
        Ok(())
    }

    fn write(&mut self, fields: &[&str]) -> Result<()> {
        let open = self
            .open
            .as_mut()
            .ok_or_else(|| CodecError::not_ready("write"))?;

        let row = line::join_fields(fields, &self.separator);
        writeln!(open.stream, "{row}").map_err(|e| CodecError::Io {
            path: open.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut open) = self.open.take() {
            // Close never raises, even when the flush fails.
            let _ = open.stream.flush();
        }
    }
}
