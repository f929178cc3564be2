//! Models module for the chord transposition engine
//!
//! Pitch classes, tonics, keys and intervals. All of these are closed
//! enumerations backed by static tables.

pub mod interval;
pub mod key;
pub mod pitch_class;
pub mod tonic;

// Re-export commonly used types
pub use interval::Interval;
pub use key::{Key, KeyError, Mode, SpellingPreference};
pub use pitch_class::{Accidental, PitchClass};
pub use tonic::Tonic;
