//! Chord transposition engine
//!
//! Entry points take a single line of a chord chart and return a new line.
//! They never fail: anything the engine cannot make sense of is returned
//! unchanged (the whole line for a bad key, the single token for a bad
//! chord root).

pub mod errors;
pub mod line;
pub mod rewriter;
pub mod speller;

pub use errors::TransposeError;
pub use line::{key_delta, normalize_steps};
pub use rewriter::rewrite_chord;
pub use speller::spell;

use crate::parse::tokens::{find_tokens, ChordMatch};

/// Transpose every chord in `line` from `from_key` to `to_key`
///
/// Non-natural notes are spelled with the target key's sharps or flats.
pub fn transpose_chord_line(line: &str, from_key: &str, to_key: &str) -> String {
    line::transpose_line_by_keys(line, from_key, to_key)
}

/// Transpose every chord in `line` by `steps` semitones
///
/// Steps are reduced to the nearest interval first (+11 is treated as -1).
pub fn transpose_chord_line_by_steps(line: &str, steps: i32) -> String {
    line::transpose_line_by_steps(line, steps)
}

/// Transpose every chord in `line` by a named interval ("major3rd", "tritone", ...)
pub fn transpose_by_interval(line: &str, interval: &str) -> String {
    line::transpose_line_by_interval(line, interval)
}

/// Chord-shaped tokens in `line`, in order
pub fn find_chords(line: &str) -> Vec<ChordMatch> {
    find_tokens(line).collect()
}
