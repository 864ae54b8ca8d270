//! Core signal types.
//!
//! This module provides the buffer abstraction used throughout the library:
//! - `Signal` for fixed-length rendered sample buffers
//! - `sample_count` for the seconds-to-samples truncation rule

mod signal;

pub use signal::{Signal, sample_count};
