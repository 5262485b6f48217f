use crate::shared::error::CodecError;

/// Access mode for a record file: exactly one of read or write.
///
/// Expressed as a plain two-variant enumeration so that combined or absent
/// modes are unrepresentable; textual selection goes through `FromStr`,
/// which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

impl std::str::FromStr for Mode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Mode::Read),
            "write" => Ok(Mode::Write),
            _ => Err(CodecError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Read => write!(f, "read"),
            Mode::Write => write!(f, "write"),
        }
    }
}
