use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stampline::{ReaderSource, Settings, TimestampSource};

#[derive(Parser, Debug)]
#[command(name = "stampline")]
#[command(about = "Print elapsed-time timestamps as decimal seconds, one per line")]
struct Args {
    /// Settings file (toml, json, yaml, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Timestamp file (newline-delimited JSON or milliseconds); stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Raw query string, e.g. "precision=microseconds"
    #[arg(short, long, conflicts_with = "precision")]
    query: Option<String>,

    /// Shorthand for --query precision=<PRECISION>
    #[arg(short, long)]
    precision: Option<String>,

    /// Cap on fractional digits
    #[arg(long)]
    max_precision: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(query) = args.query {
        settings.query = query;
    }
    if let Some(precision) = args.precision {
        settings.query = format!("precision={}", precision);
    }
    if args.max_precision.is_some() {
        settings.max_precision = args.max_precision;
    }
    if args.input.is_some() {
        settings.input = args.input;
    }

    let result = match &settings.input {
        Some(path) => {
            let mut source = ReaderSource::open(path)?;
            run(&settings, &mut source)
        }
        None => run(&settings, &mut ReaderSource::stdin()),
    };

    match result {
        // Downstream closed the pipe (e.g. `| head`), nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write timestamps"),
    }
}

/// Format every record of `source` to stdout.
fn run(settings: &Settings, source: &mut dyn TimestampSource) -> io::Result<()> {
    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    settings
        .output()
        .write(source, &mut sink, Some(&settings.query))?;
    sink.flush()
}
