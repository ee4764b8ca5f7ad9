use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ppcvec_rs::{generate, GenConfig, GenError, OnError, RunSummary};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate PowerPC ADD-family test vectors from an instruction-test console log"
)]
struct Opts {
    /// Stop after this many input records
    #[arg(long, default_value_t = GenConfig::default().limit)]
    limit: usize,
    /// Abort on the first malformed record instead of skipping it
    #[arg(long)]
    halt_on_error: bool,
    /// Write the run summary as JSON to this file
    #[arg(long, value_name = "FILE")]
    report: Option<String>,
    /// Instruction-test console log
    #[arg(value_name = "LOG")]
    input: String,
    /// Output CSV path
    #[arg(value_name = "CSV")]
    output: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    match run(&opts) {
        Ok(summary) => {
            eprintln!("emitted {} records, skipped {}", summary.emitted, summary.skipped);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            // Distinct status for bad records vs I/O trouble
            match err.downcast_ref::<GenError>() {
                Some(GenError::Record { .. }) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}

fn run(opts: &Opts) -> Result<RunSummary> {
    let cfg = GenConfig {
        limit: opts.limit,
        on_error: if opts.halt_on_error { OnError::Halt } else { OnError::Skip },
    };

    let input = BufReader::new(File::open(&opts.input).context("opening log")?);
    let mut output = BufWriter::new(File::create(&opts.output).context("creating CSV")?);

    let summary = generate(input, &mut output, &cfg)?;
    output.flush().map_err(GenError::Io)?;

    if let Some(path) = &opts.report {
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)
            .context("writing report")?;
    }
    Ok(summary)
}
