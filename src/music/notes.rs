//! The on-screen keyboard's note table.

/// Note names and their frequencies in Hz, one octave from C4 to C5 in key order.
pub const NOTE_FREQUENCIES: [(&str, f64); 8] = [
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.00),
    ("A4", 440.00),
    ("B4", 493.88),
    ("C5", 523.25),
];

/// Looks up a note name in [`NOTE_FREQUENCIES`], ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use keysynth::music::note_frequency;
///
/// assert_eq!(note_frequency("A4"), Some(440.0));
/// assert_eq!(note_frequency("c5"), Some(523.25));
/// assert_eq!(note_frequency("C#4"), None);
/// ```
pub fn note_frequency(name: &str) -> Option<f64> {
    NOTE_FREQUENCIES
        .iter()
        .find(|(note, _)| note.eq_ignore_ascii_case(name.trim()))
        .map(|&(_, hz)| hz)
}
