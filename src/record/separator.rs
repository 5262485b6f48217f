use crate::shared::error::CodecError;
use crate::shared::Result;

/// Default field separator: a single tab character.
pub const DEFAULT_SEPARATOR: &str = "\t";

/// A validated, non-empty field separator.
///
/// The invariant (at least one character) is established at construction,
/// so code holding a `Separator` never has to re-validate it at use time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    /// Creates a separator from an arbitrary token.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidSeparator` if the token is empty.
    pub fn new(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(CodecError::InvalidSeparator.into());
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.to_string())
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
