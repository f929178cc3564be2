//! Key names, normalization and accidental preference
//!
//! A key is written the way a musician types it: a tonic spelling followed by
//! an optional minor marker ("Am", "amin", "F#m", "Bb"). Keys are resolved
//! fresh from each user string and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::pitch_class::{Accidental, PitchClass};
use super::tonic::Tonic;

/// Failure to resolve a key name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Key name is empty")]
    Empty,

    #[error("Unknown key root in '{0}'")]
    UnknownRoot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

/// Whether non-natural pitches are written with sharps or with flats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellingPreference {
    #[default]
    Sharp,
    Flat,
}

impl SpellingPreference {
    /// Bias implied by a spelled root: flats for "Bb", sharps otherwise
    pub fn from_accidental(accidental: Accidental) -> Self {
        match accidental {
            Accidental::Flat => SpellingPreference::Flat,
            Accidental::Sharp | Accidental::Natural => SpellingPreference::Sharp,
        }
    }
}

/// A resolved key: tonic plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Tonic,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: Tonic, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Resolve a raw, user-typed key name
    ///
    /// The name is normalized first. Only the leading tonic spelling has to
    /// be recognized; anything after it is ignored apart from the minor
    /// marker ("Csus" resolves to C major).
    pub fn resolve(raw: &str) -> Result<Key, KeyError> {
        let normalized = normalize_key(raw);
        if normalized.is_empty() {
            return Err(KeyError::Empty);
        }

        let (tonic, _) = Tonic::from_prefix(&normalized)
            .ok_or_else(|| KeyError::UnknownRoot(raw.to_string()))?;

        let mode = if normalized.ends_with('m') {
            Mode::Minor
        } else {
            Mode::Major
        };

        Ok(Key { tonic, mode })
    }

    pub fn root(&self) -> PitchClass {
        self.tonic.pitch_class()
    }

    /// Canonical name such as "Bb" or "F#m"
    pub fn name(&self) -> String {
        match self.mode {
            Mode::Major => self.tonic.as_str().to_string(),
            Mode::Minor => format!("{}m", self.tonic.as_str()),
        }
    }

    pub fn preference(&self) -> SpellingPreference {
        preference_of(self.tonic, self.mode)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::resolve(s)
    }
}

/// Accidental preference of a key signature
///
/// Keys the classification does not list (D#, G#, A# major; Dbm, Gbm, Cbm)
/// fall back to sharps.
pub fn preference_of(tonic: Tonic, mode: Mode) -> SpellingPreference {
    use SpellingPreference::{Flat, Sharp};

    match mode {
        Mode::Major => match tonic {
            Tonic::C | Tonic::G | Tonic::D | Tonic::A | Tonic::E | Tonic::B
            | Tonic::Fs | Tonic::Cs => Sharp,
            Tonic::F | Tonic::Bb | Tonic::Eb | Tonic::Ab | Tonic::Db | Tonic::Gb
            | Tonic::Cb => Flat,
            Tonic::Ds | Tonic::Gs | Tonic::As => Sharp,
        },
        Mode::Minor => match tonic {
            Tonic::A | Tonic::E | Tonic::B | Tonic::Fs | Tonic::Cs | Tonic::Gs
            | Tonic::Ds | Tonic::As => Sharp,
            Tonic::D | Tonic::G | Tonic::C | Tonic::F | Tonic::Bb | Tonic::Eb
            | Tonic::Ab => Flat,
            Tonic::Db | Tonic::Gb | Tonic::Cb => Sharp,
        },
    }
}

/// Normalize the case and minor marker of a key name
///
/// "amin" → "Am", "C#MIN" → "C#m", "bb" → "Bb". Spellings such as
/// "Csharp" are left alone apart from the capital letter.
pub fn normalize_key(raw: &str) -> String {
    let key = raw.trim();
    let mut chars = key.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    let rest = chars.as_str();

    let lower = key.to_lowercase();
    let mut normalized: String = first.to_uppercase().collect();
    if lower.ends_with('m') || lower.ends_with("min") {
        normalized.push_str(&rest.to_lowercase().replacen("min", "m", 1));
    } else {
        normalized.push_str(rest);
    }
    normalized
}

/// True when `raw` starts with a recognizable tonic after normalization
pub fn is_valid_key(raw: &str) -> bool {
    Key::resolve(raw).is_ok()
}

/// Every major key name followed by every minor key name
pub fn all_keys() -> Vec<String> {
    let majors = Tonic::ALL.into_iter().map(|t| Key::new(t, Mode::Major).name());
    let minors = Tonic::ALL.into_iter().map(|t| Key::new(t, Mode::Minor).name());
    majors.chain(minors).collect()
}
