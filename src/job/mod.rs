//! Job layer: raw command-line flags + the validated job specification.
//!
//! This module is intentionally separate from the splitting loops. It owns:
//! - RawJob (flag shape as it arrives from the CLI)
//! - JobSpec (validated, immutable configuration for one run)
//! - suffix formatting for output file names

pub mod spec;
pub mod suffix;

pub use spec::{JobSpec, Mode, RawJob};
