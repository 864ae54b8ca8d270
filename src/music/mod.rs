//! Musical note helpers for keyboard-style triggering.

pub mod frequency;
mod notes;

pub use frequency::Frequency;
pub use notes::{NOTE_FREQUENCIES, note_frequency};
