//! Collect a project's text files into a single snapshot file.
//!
//! Walks `--directory`, skips denied directories, extensions, names and
//! binary files, and writes every remaining file under a path header into
//! `--output`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use snapshot::collect::{CollectOptions, collect_project};
use snapshot::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "snapshot",
    version,
    about = "Collect project files into a single text file"
)]
struct Cli {
    /// Root directory of the project.
    #[arg(short = 'd', long, default_value = ".")]
    directory: PathBuf,

    /// Output file name.
    #[arg(short, long, default_value = "project_contents.txt")]
    output: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let summary = collect_project(&CollectOptions::new(cli.directory, cli.output))?;
    for failure in &summary.read_failures {
        eprintln!(
            "warning: could not read {}: {}",
            failure.path.display(),
            failure.error
        );
    }
    println!(
        "Project contents have been written to '{}'",
        summary.output.display()
    );
    Ok(())
}
