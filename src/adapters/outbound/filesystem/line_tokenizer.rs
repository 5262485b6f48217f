use crate::ports::outbound::RecordReader;
use crate::record::{line, Separator};
use crate::shared::error::CodecError;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct OpenReader {
    path: PathBuf,
    stream: BufReader<File>,
}

/// LineTokenizer adapter - the file-backed read path
///
/// Implements the RecordReader port over a buffered file stream. Each read
/// consumes one line and extracts the two-field projection; lines with fewer
/// than two separator-delimited tokens are skipped silently by returning
/// `None`.
#[derive(Debug)]
pub struct LineTokenizer {
    separator: Separator,
    open: Option<OpenReader>,
}

impl LineTokenizer {
    /// Creates a tokenizer with the default tab separator.
    pub fn new() -> Self {
        Self::from_separator(Separator::default())
    }

    /// Creates a tokenizer with a custom separator token.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidSeparator` if the token is empty.
    pub fn with_separator(separator: &str) -> Result<Self> {
        Ok(Self::from_separator(Separator::new(separator)?))
    }

    /// Creates a tokenizer from an already-validated separator.
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

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordReader for LineTokenizer {
    fn open(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CodecError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let file = File::open(path).map_err(|e| CodecError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Re-opening replaces the prior handle; the old stream is dropped
        // here rather than leaked.
        self.open = Some(OpenReader {
            path: path.to_path_buf(),
            stream: BufReader::new(file),
        });
        Ok(())
    }

    fn read(&mut self) -> Result<Option<(String, String)>> {
        let open = self
            .open
            .as_mut()
            .ok_or_else(|| CodecError::not_ready("read"))?;

        let mut buf = String::new();
        let bytes = open.stream.read_line(&mut buf).map_err(|e| CodecError::Io {
            path: open.path.clone(),
            source: e,
        })?;
        if bytes == 0 {
            // End of input.
            return Ok(None);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        Ok(line::split_projection(&buf, &self.separator))
    }

    fn close(&mut self) {
        self.open = None;
    }
}
