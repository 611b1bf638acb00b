use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;

mod job;
mod split;

pub type Result<T> = anyhow::Result<T>;

use job::Mode;

#[derive(Parser)]
#[command(name = "fsplit")]
#[command(about = "Split a file into numbered chunks by bytes or lines", long_about = None)]
struct Cli {
    #[command(flatten)]
    raw: job::RawJob,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Validate the raw flags into a job.
    let job = cli.raw.validate_and_build()?;

    // 2) Open the input once; it stays open for the whole run.
    let mut input = File::open(&job.input)
        .with_context(|| format!("open input file {}", job.input.display()))?;

    // 3) Split.
    let summary = match job.mode {
        Mode::Bytes => {
            let total = input
                .metadata()
                .with_context(|| format!("stat input file {}", job.input.display()))?
                .len();
            split::split_bytes(&mut input, total, &job)?
        }
        Mode::Lines => split::split_lines(&mut BufReader::new(input), &job)?,
    };

    let unit = match job.mode {
        Mode::Bytes => "bytes",
        Mode::Lines => "lines",
    };
    println!("Wrote {} files ({} {})", summary.files, summary.units, unit);

    Ok(())
}
