//! Line splitter: cut the input into chunks of a fixed line count.
//!
//! A line is a byte run terminated by '\n'; the final line may lack the
//! terminator and still counts as one line, written through unchanged. Here
//! `start` is the number of leading lines to skip and `chunk_size` the
//! number of lines per output file.

use crate::Result;
use crate::job::JobSpec;
use crate::split::SplitSummary;
use anyhow::{Context, bail};
use std::fs::File;
use std::io::{BufRead, Write};

/// Split the lines of `input` after the first `job.start` into files of
/// `job.chunk_size` lines each, the last possibly shorter.
pub fn split_lines<R>(input: &mut R, job: &JobSpec) -> Result<SplitSummary>
where
    R: BufRead,
{
    let mut line = Vec::new();

    let mut skipped = 0u64;
    while skipped < job.start {
        line.clear();
        if input.read_until(b'\n', &mut line).context("read input line")? == 0 {
            bail!(
                "start offset {} is at or beyond end of input ({} lines)",
                job.start,
                skipped
            );
        }
        skipped += 1;
    }

    let mut files = 0u64;
    let mut lines = 0u64;
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).context("read input line")? == 0 {
            break;
        }

        // First line of the chunk is in hand before its file is created, so
        // an input ending exactly here leaves no empty trailing file.
        files += 1;
        let path = job.output_path(files);
        let mut out = File::create(&path)
            .with_context(|| format!("create output file {}", path.display()))?;
        out.write_all(&line)
            .with_context(|| format!("write chunk to {}", path.display()))?;
        lines += 1;

        for _ in 1..job.chunk_size {
            line.clear();
            if input.read_until(b'\n', &mut line).context("read input line")? == 0 {
                break;
            }
            out.write_all(&line)
                .with_context(|| format!("write chunk to {}", path.display()))?;
            lines += 1;
        }
    }

    if files == 0 {
        bail!(
            "start offset {} is at or beyond end of input ({} lines)",
            job.start,
            skipped
        );
    }

    Ok(SplitSummary { files, units: lines })
}
