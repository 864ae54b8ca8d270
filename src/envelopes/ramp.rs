//! Linear ramps for envelope segments.

/// An evenly spaced ramp of `len` points from `start` to `end`, inclusive.
///
/// Point 0 is always `start`. With two or more points the last one is exactly
/// `end`; a one-point ramp holds only `start`.
///
/// Points are computed on demand so a segment that mostly falls outside a
/// buffer never has to be materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    start: f64,
    end: f64,
    len: usize,
}

impl Ramp {
    /// Creates a ramp of `len` points.
    pub fn new(start: f64, end: f64, len: usize) -> Self {
        Self { start, end, len }
    }

    /// Number of points in the ramp.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ramp has no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of point `index`, or `None` past the end of the ramp.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.value(index))
    }

    /// Value of point `index`; callers keep `index < len`.
    pub(crate) fn value(&self, index: usize) -> f64 {
        if self.len > 1 && index == self.len - 1 {
            return self.end;
        }
        if self.len == 1 {
            return self.start;
        }
        let step = (self.end - self.start) / (self.len - 1) as f64;
        self.start + index as f64 * step
    }

    /// Iterates over every point.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.value(i))
    }
}

/// Collects a [`Ramp`] into a vector.
///
/// # Examples
///
/// ```
/// use keysynth::envelopes::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(1.0, 0.5, 1), vec![1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    Ramp::new(start, end, len).iter().collect()
}
