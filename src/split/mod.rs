//! Splitting layer: the byte and line splitters plus their shared summary.

pub mod bytes;
pub mod lines;

pub use bytes::split_bytes;
pub use lines::split_lines;

/// What a finished run produced. `units` counts bytes in bytes mode and
/// lines in lines mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    pub files: u64,
    pub units: u64,
}
