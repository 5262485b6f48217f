use anyhow::bail;
use delimline::cli::Args;
use delimline::prelude::*;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ {}\n", "An error occurred:".red());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create the facade over the filesystem adapters (Dependency Injection)
    let mut file = RecordFile::with_separator(&args.separator)?;

    match args.mode {
        Mode::Read => {
            if !args.fields.is_empty() {
                bail!("FIELD arguments are only valid in write mode");
            }
            file.open(&args.path, Mode::Read)?;
            // The read contract ends the stream at the first line that has
            // no two-field projection, end of file included.
            while let Some((field1, field2)) = file.read()? {
                println!("{field1}\t{field2}");
            }
        }
        Mode::Write => {
            file.open(&args.path, Mode::Write)?;
            let fields: Vec<&str> = args.fields.iter().map(String::as_str).collect();
            file.write(&fields)?;
        }
    }

    file.close();
    Ok(())
}
