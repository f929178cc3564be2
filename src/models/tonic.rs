//! Enumeration of all key roots a key name may start with
//!
//! Represents the 18 tonics the key classification knows about:
//! - 7 natural tonics (C, D, E, F, G, A, B)
//! - 5 sharp tonics (C#, D#, F#, G#, A#)
//! - 6 flat tonics (Db, Eb, Gb, Ab, Bb, Cb)
//!
//! Note: Enharmonic equivalents are listed separately (e.g., C# and Db)
//! because they carry different accidental preferences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch_class::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
    Cb,
}

impl Tonic {
    /// Catalogue order used when listing keys
    pub const ALL: [Tonic; 18] = [
        Tonic::C, Tonic::Cs, Tonic::Db, Tonic::D, Tonic::Ds, Tonic::Eb,
        Tonic::E, Tonic::F, Tonic::Fs, Tonic::Gb, Tonic::G, Tonic::Gs,
        Tonic::Ab, Tonic::A, Tonic::As, Tonic::Bb, Tonic::B, Tonic::Cb,
    ];

    /// Convert tonic to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
            Tonic::Cb => "Cb",
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        let value = match self {
            Tonic::C => 0,
            Tonic::Cs | Tonic::Db => 1,
            Tonic::D => 2,
            Tonic::Ds | Tonic::Eb => 3,
            Tonic::E => 4,
            Tonic::F => 5,
            Tonic::Fs | Tonic::Gb => 6,
            Tonic::G => 7,
            Tonic::Gs | Tonic::Ab => 8,
            Tonic::A => 9,
            Tonic::As | Tonic::Bb => 10,
            Tonic::B | Tonic::Cb => 11,
        };
        PitchClass::new(value)
    }

    /// Longest tonic spelling at the start of `s`, with its byte length
    ///
    /// "Bbm" → (Bb, 2), "Bm" → (B, 1), "Cb" → (Cb, 2), "H" → None
    pub fn from_prefix(s: &str) -> Option<(Tonic, usize)> {
        let two: String = s.chars().take(2).collect();
        if two.chars().count() == 2 {
            if let Ok(tonic) = two.parse::<Tonic>() {
                return Some((tonic, two.len()));
            }
        }
        let one: String = s.chars().take(1).collect();
        one.parse::<Tonic>().ok().map(|tonic| (tonic, one.len()))
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = String;

    /// Exact, case-sensitive spelling ("Bb", not "BB" or "bb")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tonic::ALL
            .iter()
            .copied()
            .find(|tonic| tonic.as_str() == s)
            .ok_or_else(|| format!(
                "Invalid tonic: '{}'. Expected one of: C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B, Cb",
                s
            ))
    }
}
