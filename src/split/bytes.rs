//! Byte splitter: cut the input into chunks of a fixed byte count.
//!
//! The input must be seekable and of known total size. Each output file is
//! created, filled, and closed within one loop iteration; files completed in
//! earlier iterations are left in place when a later one fails.

use crate::Result;
use crate::job::JobSpec;
use crate::split::SplitSummary;
use anyhow::{Context, bail};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

/// Split bytes `[job.start, total)` of `input` into files of
/// `job.chunk_size` bytes each, the last possibly shorter.
pub fn split_bytes<R>(input: &mut R, total: u64, job: &JobSpec) -> Result<SplitSummary>
where
    R: Read + Seek,
{
    if job.start >= total {
        bail!(
            "start offset {} is at or beyond end of input ({} bytes)",
            job.start,
            total
        );
    }
    input
        .seek(SeekFrom::Start(job.start))
        .context("seek to start offset")?;

    let mut offset = job.start;
    let mut files = 0u64;
    while offset < total {
        files += 1;
        let path = job.output_path(files);
        let mut out = File::create(&path)
            .with_context(|| format!("create output file {}", path.display()))?;

        let copied = io::copy(&mut input.by_ref().take(job.chunk_size), &mut out)
            .with_context(|| format!("copy chunk into {}", path.display()))?;
        offset += copied;

        // A chunk may only come up short on the final one.
        if copied < job.chunk_size && offset < total {
            bail!(
                "input ended at byte {} of {} while writing {}",
                offset,
                total,
                path.display()
            );
        }
    }

    Ok(SplitSummary {
        files,
        units: total - job.start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::Mode;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    fn job_in(dir: &Path, start: u64, chunk_size: u64) -> JobSpec {
        JobSpec {
            mode: Mode::Bytes,
            input: PathBuf::from("unused.bin"),
            dir: dir.to_path_buf(),
            prefix: "x".to_string(),
            start,
            chunk_size,
            suffix_digits: 3,
        }
    }

    fn read(dir: &Path, name: &str) -> Vec<u8> {
        fs::read(dir.join(name)).unwrap()
    }

    fn outputs(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn splits_with_short_final_chunk() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(tmp.path(), 0, 4);
        let mut input = Cursor::new(b"0123456789".to_vec());

        let summary = split_bytes(&mut input, 10, &job).unwrap();

        assert_eq!(summary, SplitSummary { files: 3, units: 10 });
        assert_eq!(outputs(tmp.path()), 3);
        assert_eq!(read(tmp.path(), "x.001"), b"0123".to_vec());
        assert_eq!(read(tmp.path(), "x.002"), b"4567".to_vec());
        assert_eq!(read(tmp.path(), "x.003"), b"89".to_vec());
    }

    #[test]
    fn exact_multiple_has_no_short_chunk() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(tmp.path(), 0, 3);
        let mut input = Cursor::new(b"012345678".to_vec());

        let summary = split_bytes(&mut input, 9, &job).unwrap();

        assert_eq!(summary, SplitSummary { files: 3, units: 9 });
        assert_eq!(read(tmp.path(), "x.001"), b"012".to_vec());
        assert_eq!(read(tmp.path(), "x.002"), b"345".to_vec());
        assert_eq!(read(tmp.path(), "x.003"), b"678".to_vec());
    }

    #[test]
    fn start_offset_skips_leading_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(tmp.path(), 4, 4);
        let mut input = Cursor::new(b"0123456789".to_vec());

        let summary = split_bytes(&mut input, 10, &job).unwrap();

        assert_eq!(summary, SplitSummary { files: 2, units: 6 });
        assert_eq!(read(tmp.path(), "x.001"), b"4567".to_vec());
        assert_eq!(read(tmp.path(), "x.002"), b"89".to_vec());
    }

    #[test]
    fn start_at_end_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(tmp.path(), 10, 4);
        let mut input = Cursor::new(b"0123456789".to_vec());

        let err = split_bytes(&mut input, 10, &job).unwrap_err();

        assert!(err.to_string().contains("at or beyond end of input"));
        assert_eq!(outputs(tmp.path()), 0);
    }

    #[test]
    fn concatenation_reproduces_input() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(tmp.path(), 0, 5);
        let data: Vec<u8> = (0..23u8).collect();
        let mut input = Cursor::new(data.clone());

        let summary = split_bytes(&mut input, data.len() as u64, &job).unwrap();
        assert_eq!(summary.files, 5);

        let mut joined = Vec::new();
        for seq in 1..=summary.files {
            joined.extend(read(tmp.path(), &format!("x.{:03}", seq)));
        }
        assert_eq!(joined, data);
    }

    #[test]
    fn missing_output_dir_fails_naming_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let job = job_in(&tmp.path().join("nope"), 0, 4);
        let mut input = Cursor::new(b"0123456789".to_vec());

        let err = split_bytes(&mut input, 10, &job).unwrap_err();

        assert!(err.to_string().contains("nope"));
    }
}
