use clap::Parser;
use std::path::PathBuf;

use crate::record::Mode;

/// Read or write separator-delimited record files
#[derive(Parser, Debug)]
#[command(name = "delimline")]
#[command(version)]
#[command(
    about = "Stream the two-field projection of a delimited file, or write one delimited row",
    long_about = None
)]
pub struct Args {
    /// Path to the record file
    pub path: PathBuf,

    /// Access mode: read or write
    #[arg(short, long)]
    pub mode: Mode,

    /// Field separator (must be non-empty)
    #[arg(short, long, default_value = "\t")]
    pub separator: String,

    /// Fields of the row to write (write mode only; zero fields write an
    /// empty line)
    #[arg(value_name = "FIELD")]
    pub fields: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
