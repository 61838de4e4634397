//! Command-line interface for treesnap.
//!
//! Run without arguments, it snapshots the current directory into `estrutura.yaml`
//! at the same place and prints a single confirmation line.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treesnap::{
    DEFAULT_IGNORE_FILE, DEFAULT_INDENT, DEFAULT_OUTPUT_FILE, SnapshotBuilder, SnapshotOptions,
    generate,
};

/// treesnap — snapshot a directory tree into one document
#[derive(Parser)]
#[command(name = "treesnap", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file, relative to the root
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Name of the ignore-pattern file at the root
    #[arg(long, default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: String,

    /// Spaces per nesting level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,
}

impl Cli {
    fn into_options(self) -> SnapshotOptions {
        SnapshotBuilder::new(self.root)
            .output_file(self.output)
            .ignore_file(self.ignore_file)
            .indent(self.indent)
            .build()
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let options = Cli::parse().into_options();
    match generate(&options) {
        Ok(path) => println!("Snapshot written to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
