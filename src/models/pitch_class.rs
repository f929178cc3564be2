//! Pitch-class arithmetic and the two canonical spelling tables
//!
//! Every spelled note in this crate comes out of one of these two
//! 12-entry tables, indexed by pitch class (0 = C).
//!
//! Example:
//!   pitch class 6 → "F#" (sharp table) or "Gb" (flat table)
//!   pitch class 7 → "G"  (both tables)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharp-preferred spellings, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred spellings, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A semitone position within the octave, always in 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any integer, wrapping into the octave
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move by `steps` semitones in either direction
    pub fn shift(self, steps: i32) -> Self {
        PitchClass::new(self.0 as i32 + steps.rem_euclid(12))
    }

    /// True for C, D, E, F, G, A and B
    pub fn is_natural(self) -> bool {
        SHARP_NAMES[self.0 as usize] == FLAT_NAMES[self.0 as usize]
    }

    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single accidental a spelled root carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// Accidental carried by a spelled root such as "C#", "Bb" or "E"
    pub fn of_spelling(spelling: &str) -> Accidental {
        spelling
            .chars()
            .nth(1)
            .and_then(Accidental::from_char)
            .unwrap_or(Accidental::Natural)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Map a letter plus optional single accidental to its pitch class
///
/// Only the 24 canonical spellings are recognized. `Cb`, `Fb`, `E#` and
/// `B#` are not in either table and yield `None`.
pub fn pitch_class_of(letter: char, accidental: Accidental) -> Option<PitchClass> {
    let mut spelling = String::with_capacity(2);
    spelling.push(letter);
    spelling.push_str(accidental.symbol());

    // Look in the table that matches the spelling's own bias first
    let (first, second) = match accidental {
        Accidental::Flat => (&FLAT_NAMES, &SHARP_NAMES),
        _ => (&SHARP_NAMES, &FLAT_NAMES),
    };

    first
        .iter()
        .position(|&name| name == spelling)
        .or_else(|| second.iter().position(|&name| name == spelling))
        .map(|index| PitchClass(index as u8))
}

/// Pitch class of a spelled root such as "F#" or "Bb"
pub fn pitch_class_of_spelling(spelling: &str) -> Option<PitchClass> {
    let mut chars = spelling.chars();
    let letter = chars.next()?;
    let accidental = match chars.next() {
        None => Accidental::Natural,
        Some(c) => Accidental::from_char(c)?,
    };
    if chars.next().is_some() {
        return None;
    }
    pitch_class_of(letter, accidental)
}
