//! Rewrite a single chord token
//!
//! A token is split into root, suffix and (for slash chords) a bass part.
//! Only the root and bass letters move; the suffix is copied as-is.
//!
//! Example (+2, no key):
//!   "C#m7b5" → root "C#", suffix "m7b5" → "D#m7b5"
//!   "Am7/G"  → "Bm7" + "/" + "A"      → "Bm7/A"

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::TransposeError;
use super::speller::spell;
use crate::models::key::{Key, SpellingPreference};
use crate::models::pitch_class::{pitch_class_of_spelling, Accidental};

lazy_static! {
    static ref SLASH_RE: Regex = Regex::new(r"(?s)^([A-G][b#]?[^/]*?)/([A-G][b#]?)(.*)$").unwrap();
    static ref ROOT_RE: Regex = Regex::new(r"(?s)^([A-G][b#]?)(.*)$").unwrap();
}

/// Transpose one chord token by `steps` semitones
///
/// With a target key, non-natural roots take that key's accidental
/// preference; without one, each root keeps its own bias (flat roots stay
/// flat). Anything that cannot be parsed comes back unchanged.
pub fn rewrite_chord(token: &str, steps: i32, target: Option<&Key>) -> String {
    match try_rewrite(token, steps, target) {
        Ok(rewritten) => rewritten,
        Err(e) => {
            log::warn!("Leaving token unchanged: {}", e);
            token.to_string()
        }
    }
}

/// Fallible core of `rewrite_chord`
///
/// Slash chords never fail as a whole: each half falls back on its own.
pub fn try_rewrite(token: &str, steps: i32, target: Option<&Key>) -> Result<String, TransposeError> {
    if let Some(caps) = SLASH_RE.captures(token) {
        let main = rewrite_chord(&caps[1], steps, target);
        let bass = rewrite_chord(&caps[2], steps, target);
        return Ok(format!("{}/{}{}", main, bass, &caps[3]));
    }

    let caps = ROOT_RE
        .captures(token)
        .ok_or_else(|| TransposeError::MalformedChord(token.to_string()))?;
    let root = &caps[1];
    let suffix = &caps[2];

    let pc = pitch_class_of_spelling(root)
        .ok_or_else(|| TransposeError::UnrecognizedRoot(token.to_string()))?;

    let preference = match target {
        Some(key) => key.preference(),
        None => SpellingPreference::from_accidental(Accidental::of_spelling(root)),
    };
    let spelled = spell(pc.shift(steps), preference);

    log::debug!("{} {:+} → {}{}", token, steps, spelled, suffix);
    Ok(format!("{}{}", spelled, suffix))
}
