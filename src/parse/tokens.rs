//! Chord symbol recognition within a line of text
//!
//! This module finds the substrings of a line that have the shape of a
//! chord symbol (`C`, `Am7`, `C#m7b5`, `Gsus4add9`, `D/F#`) and leaves
//! everything else alone. The shape is deliberately loose: it only needs
//! to keep chord symbols apart from ordinary words.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Root, quality fragments, alterations, then an optional slash bass.
    ///
    /// The leading `\b` keeps roots from starting inside a word. The
    /// trailing boundary is checked by hand in `find_tokens` so that a
    /// root accidental (`F#`) can end a token.
    static ref CHORD_RE: Regex = Regex::new(concat!(
        r"\b[A-G][b#]?",
        r"[mM]?(?:(?:aj|in|sus[24]?|aug|dim|add)[0-9]*|[0-9]+)*(?:[b#][0-9]+)*",
        r"(?:/[A-G][b#]?[mM]?(?:(?:aj|in|sus[24]?|aug|dim|add)[0-9]*|[0-9]+)*(?:[b#][0-9]+)*)?",
    ))
    .unwrap();
}

/// A chord-shaped substring and where it sits in the line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordMatch {
    pub text: String,
    /// Byte offset of the first character
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
}

impl ChordMatch {
    pub fn new(text: &str, offset: usize) -> Self {
        Self {
            text: text.to_string(),
            offset,
            length: text.len(),
        }
    }

    /// Byte offset just past the token
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Scan `line` once, yielding every chord-shaped token in order
///
/// A candidate that runs straight into more word characters ("Bridge",
/// "Amazing") is dropped whole rather than shortened.
pub fn find_tokens(line: &str) -> impl Iterator<Item = ChordMatch> + '_ {
    CHORD_RE
        .find_iter(line)
        .filter(move |m| !starts_with_word_char(&line[m.end()..]))
        .map(|m| ChordMatch::new(m.as_str(), m.start()))
}

/// True when the line contains at least one chord-shaped token
pub fn has_chords(line: &str) -> bool {
    find_tokens(line).next().is_some()
}

fn starts_with_word_char(rest: &str) -> bool {
    rest.chars()
        .next()
        .map(|c| c.is_alphanumeric() || c == '_')
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        find_tokens(line).map(|m| m.text).collect()
    }

    #[test]
    fn test_simple_progression() {
        assert_eq!(texts("C G Am F"), vec!["C", "G", "Am", "F"]);
    }

    #[test]
    fn test_common_notations() {
        assert_eq!(
            texts("Cmaj7 C#m7b5 Gsus4add9 D/F# Bbm Ebdim7 Faug Dsus2"),
            vec!["Cmaj7", "C#m7b5", "Gsus4add9", "D/F#", "Bbm", "Ebdim7", "Faug", "Dsus2"]
        );
    }

    #[test]
    fn test_sharp_root_at_end_of_token() {
        assert_eq!(texts("F# C#"), vec!["F#", "C#"]);
        assert_eq!(texts("A#m7 | G#"), vec!["A#m7", "G#"]);
    }

    #[test]
    fn test_offsets_and_lengths() {
        let tokens: Vec<ChordMatch> = find_tokens("  Am7   D/F#").collect();
        assert_eq!(tokens[0], ChordMatch { text: "Am7".to_string(), offset: 2, length: 3 });
        assert_eq!(tokens[1].offset, 8);
        assert_eq!(tokens[1].length, 4);
        assert_eq!(tokens[1].end(), 12);
    }

    #[test]
    fn test_prose_is_not_tokenized() {
        assert!(texts("Bridge chords:").is_empty());
        assert!(texts("Amazing grace, how sweet the sound").is_empty());
        assert!(texts("Dad went to the Cinema").is_empty());
        assert!(texts("verse chorus outro").is_empty());
    }

    #[test]
    fn test_mixed_prose_and_chords() {
        assert_eq!(texts("Bridge chords: Bb Eb F"), vec!["Bb", "Eb", "F"]);
        assert_eq!(texts("[Chorus] G D Em C"), vec!["G", "D", "Em", "C"]);
    }

    #[test]
    fn test_bass_may_carry_quality() {
        assert_eq!(texts("C/Em"), vec!["C/Em"]);
    }

    #[test]
    fn test_lowercase_roots_ignored() {
        assert!(texts("c g am f").is_empty());
    }

    #[test]
    fn test_token_not_started_inside_word() {
        assert!(texts("xC yAm").is_empty());
        assert!(texts("éC").is_empty());
    }

    #[test]
    fn test_non_ascii_neighbours() {
        assert_eq!(texts("→ G ←"), vec!["G"]);
        let tokens: Vec<ChordMatch> = find_tokens("→ G").collect();
        assert_eq!(tokens[0].offset, "→ ".len());
    }

    #[test]
    fn test_has_chords() {
        assert!(has_chords("intro: G"));
        assert!(!has_chords("just some words"));
        assert!(!has_chords(""));
    }

    #[test]
    fn test_serialized_shape() {
        let token = ChordMatch::new("Am", 4);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"text":"Am","offset":4,"length":2}"#);
    }
}
