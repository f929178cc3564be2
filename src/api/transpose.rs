//! Transposition exports
//!
//! Thin wrappers over the engine with JavaScript names. Chord lines go in
//! and chord lines come out; classifying which lines of a chart are chord
//! lines is left to the caller.

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::transposition;

/// Transpose a chord line from one key to another
///
/// # Parameters
/// - `line`: One line of a chord chart
/// - `from_key`: Key the chart is written in ("C", "Am", "bbmin", ...)
/// - `to_key`: Key to move to
///
/// # Returns
/// The transposed line, or `line` itself when either key is not recognized
#[wasm_bindgen(js_name = transposeChordLine)]
pub fn transpose_chord_line(line: &str, from_key: &str, to_key: &str) -> String {
    transposition::transpose_chord_line(line, from_key, to_key)
}

/// Transpose a chord line by a number of semitones (may be negative)
#[wasm_bindgen(js_name = transposeChordLineBySteps)]
pub fn transpose_chord_line_by_steps(line: &str, steps: i32) -> String {
    transposition::transpose_chord_line_by_steps(line, steps)
}

/// Transpose a chord line by an interval name such as "perfect5th"
#[wasm_bindgen(js_name = transposeByInterval)]
pub fn transpose_by_interval(line: &str, interval: &str) -> String {
    transposition::transpose_by_interval(line, interval)
}

/// Find the chord symbols in a line
///
/// # Returns
/// JavaScript array of `{ text, offset, length }` objects (byte offsets)
#[wasm_bindgen(js_name = findChords)]
pub fn find_chords(line: &str) -> Result<JsValue, JsValue> {
    let chords = transposition::find_chords(line);
    log::debug!("findChords: {} chord(s) in {:?}", chords.len(), line);
    serialize(&chords, "Failed to serialize chords")
}
