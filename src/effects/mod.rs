//! Post-processing applied to shaped signals before playback.

mod normalize;

pub use normalize::{PEAK_LEVEL, normalize};
