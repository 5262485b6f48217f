//! delimline - separator-delimited line codec
//!
//! This library reads and writes line-oriented, separator-delimited record
//! files. The read side tokenizes each line and extracts a fixed two-field
//! projection; the write side joins an arbitrary number of fields into one
//! delimited row.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`record`): Separator/mode value types and the pure
//!   split/join line functions
//! - **Application Layer** (`application`): The `RecordFile` facade composing
//!   a reader and a writer
//! - **Ports** (`ports`): Interface definitions for record streams
//! - **Adapters** (`adapters`): File-backed implementations of the ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use delimline::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let mut file = RecordFile::new_default();
//!
//! file.open(Path::new("addresses.tsv"), Mode::Write)?;
//! file.write(&["Shelby Macias", "3027 Lorem St.|Kokomo"])?;
//! file.close();
//!
//! file.open(Path::new("addresses.tsv"), Mode::Read)?;
//! while let Some((name, address)) = file.read()? {
//!     println!("{name} -> {address}");
//! }
//! file.close();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod record;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{LineJoiner, LineTokenizer};
    pub use crate::application::RecordFile;
    pub use crate::ports::outbound::{RecordReader, RecordWriter};
    pub use crate::record::{Mode, Separator};
    pub use crate::shared::error::CodecError;
    pub use crate::shared::Result;
}
