//! Line-level transposition
//!
//! Tokens are rewritten in place; every byte between tokens is copied
//! through untouched, so lyrics, bar lines and chart spacing survive.

use super::errors::TransposeError;
use super::rewriter::rewrite_chord;
use crate::models::interval::Interval;
use crate::models::key::Key;
use crate::parse::tokens::find_tokens;

/// Semitone distance from one key's tonic to another's
///
/// Signed and not reduced: C → B is +11, B → C is -11. Pitch-class
/// arithmetic makes either direction land on the same notes.
pub fn key_delta(from: &Key, to: &Key) -> i32 {
    to.root().value() as i32 - from.root().value() as i32
}

/// Reduce a step count to the smallest interval, in -5..=6
///
/// +11 becomes -1, +7 becomes -5, +6 stays +6.
pub fn normalize_steps(steps: i32) -> i32 {
    let steps = steps.rem_euclid(12);
    if steps > 6 {
        steps - 12
    } else {
        steps
    }
}

/// Transpose every chord in `line` from one key to another
///
/// An unresolvable key leaves the line exactly as it was.
pub fn transpose_line_by_keys(line: &str, from_key: &str, to_key: &str) -> String {
    match try_transpose_line_by_keys(line, from_key, to_key) {
        Ok(transposed) => transposed,
        Err(e) => {
            log::warn!("Leaving line unchanged: {}", e);
            line.to_string()
        }
    }
}

pub fn try_transpose_line_by_keys(
    line: &str,
    from_key: &str,
    to_key: &str,
) -> Result<String, TransposeError> {
    let from = Key::resolve(from_key)?;
    let to = Key::resolve(to_key)?;
    let steps = key_delta(&from, &to);

    log::debug!("Transposing {} → {} ({:+} steps, {:?})", from, to, steps, to.preference());
    Ok(splice(line, steps, Some(&to)))
}

/// Transpose every chord in `line` by a raw semitone count
///
/// No key is known, so each chord keeps its own sharp/flat bias.
pub fn transpose_line_by_steps(line: &str, steps: i32) -> String {
    splice(line, normalize_steps(steps), None)
}

/// Transpose by a named interval such as "perfect4th"
pub fn transpose_line_by_interval(line: &str, interval: &str) -> String {
    match try_transpose_line_by_interval(line, interval) {
        Ok(transposed) => transposed,
        Err(e) => {
            log::warn!("Leaving line unchanged: {}", e);
            line.to_string()
        }
    }
}

pub fn try_transpose_line_by_interval(line: &str, interval: &str) -> Result<String, TransposeError> {
    let interval: Interval = interval
        .parse()
        .map_err(|_| TransposeError::UnknownInterval(interval.to_string()))?;
    Ok(transpose_line_by_steps(line, interval.semitones()))
}

fn splice(line: &str, steps: i32, target: Option<&Key>) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut cursor = 0;

    for token in find_tokens(line) {
        out.push_str(&line[cursor..token.offset]);
        out.push_str(&rewrite_chord(&token.text, steps, target));
        cursor = token.end();
    }

    out.push_str(&line[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_steps() {
        assert_eq!(normalize_steps(0), 0);
        assert_eq!(normalize_steps(6), 6);
        assert_eq!(normalize_steps(7), -5);
        assert_eq!(normalize_steps(11), -1);
        assert_eq!(normalize_steps(12), 0);
        assert_eq!(normalize_steps(-1), -1);
        assert_eq!(normalize_steps(-7), 5);
        assert_eq!(normalize_steps(25), 1);
    }

    #[test]
    fn test_key_delta_is_signed() {
        let c = Key::resolve("C").unwrap();
        let b = Key::resolve("B").unwrap();
        assert_eq!(key_delta(&c, &b), 11);
        assert_eq!(key_delta(&b, &c), -11);
        assert_eq!(key_delta(&c, &c), 0);
    }

    #[test]
    fn test_splice_keeps_spacing() {
        assert_eq!(transpose_line_by_steps("  C    G  ", 2), "  D    A  ");
        assert_eq!(transpose_line_by_steps("C\tG", 2), "D\tA");
    }

    #[test]
    fn test_splice_handles_growing_tokens() {
        assert_eq!(transpose_line_by_steps("C D", 1), "C# D#");
    }

    #[test]
    fn test_unresolvable_key_errors() {
        assert!(matches!(
            try_transpose_line_by_keys("C G", "H", "C"),
            Err(TransposeError::UnresolvableKey(_))
        ));
        assert_eq!(transpose_line_by_keys("C G", "C", "X"), "C G");
    }

    #[test]
    fn test_interval_names() {
        assert_eq!(transpose_line_by_interval("C F G", "perfect4th"), "F A# C");
        assert_eq!(transpose_line_by_interval("C", "octave"), "C");
        assert_eq!(transpose_line_by_interval("C", "nonsense"), "C");
        assert!(matches!(
            try_transpose_line_by_interval("C", "nonsense"),
            Err(TransposeError::UnknownInterval(_))
        ));
    }
}
