//! Raw flags and the validated job.
//!
//! Flag shape:
//!   --mode bytes|lines   unit for splitting (default: bytes)
//!   --in PATH            input file
//!   --dir PATH           output directory (default: .)
//!   --pref STRING        output file prefix
//!   --start N            byte/line offset to start reading at (default: 0)
//!   --size N             bytes/lines per output file
//!   --extlen N           digits in the zero-padded suffix (default: 3)
//!
//! RawJob carries the flags as given; validate_and_build checks them in a
//! fixed order and produces a JobSpec the splitters can rely on.

use crate::job::suffix::format_suffix;
use anyhow::bail;
use clap::Args;
use std::path::PathBuf;

/// Unit in which offsets and chunk sizes are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bytes,
    Lines,
}

/// Raw job shape as it arrives from the command line.
#[derive(Debug, Clone, Args)]
pub struct RawJob {
    /// 'bytes' or 'lines' to determine the unit for splitting
    #[arg(long, default_value = "bytes")]
    pub mode: String,

    /// Path to the input file to be split
    #[arg(long = "in")]
    pub input: Option<PathBuf>,

    /// Directory to which split files are written
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Prefix for split file names
    #[arg(long)]
    pub pref: Option<String>,

    /// Byte or line offset at which to start reading the input
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Number of bytes or lines after which to split
    #[arg(long, default_value_t = 0)]
    pub size: u64,

    /// Number of digits for the file name suffix
    #[arg(long, default_value_t = 3)]
    pub extlen: usize,
}

/// Validated, immutable configuration for one split run.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub mode: Mode,
    pub input: PathBuf,
    pub dir: PathBuf,
    pub prefix: String,
    pub start: u64,
    pub chunk_size: u64,
    pub suffix_digits: usize,
}

impl RawJob {
    /// Check every flag and build a JobSpec, failing on the first violation.
    pub fn validate_and_build(&self) -> anyhow::Result<JobSpec> {
        let mode = match self.mode.as_str() {
            "bytes" => Mode::Bytes,
            "lines" => Mode::Lines,
            other => bail!("mode must be 'bytes' or 'lines', got {:?}", other),
        };

        let input = match &self.input {
            Some(p) if !p.as_os_str().is_empty() => p.clone(),
            _ => bail!("specify the input file to be split (--in)"),
        };

        if self.dir.as_os_str().is_empty() {
            bail!("specify the output directory (--dir)");
        }

        let prefix = match self.pref.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => bail!("specify the prefix for split files (--pref)"),
        };

        if self.size == 0 {
            bail!("specify a positive chunk size (--size)");
        }

        if self.extlen == 0 {
            bail!("specify a positive number of suffix digits (--extlen)");
        }

        Ok(JobSpec {
            mode,
            input,
            dir: self.dir.clone(),
            prefix,
            start: self.start,
            chunk_size: self.size,
            suffix_digits: self.extlen,
        })
    }
}

impl JobSpec {
    /// Path of the `seq`-th output file (1-based).
    pub fn output_path(&self, seq: u64) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.prefix, format_suffix(seq, self.suffix_digits)))
    }
}
