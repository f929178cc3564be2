//! Enharmonic spelling of a transposed pitch class
//!
//! Spelling is always re-derived from the canonical 12-entry tables, never
//! by sharpening or flattening an existing name, so the result carries at
//! most one accidental.

use crate::models::key::SpellingPreference;
use crate::models::pitch_class::PitchClass;

/// Name `pc` with the requested accidental preference
///
/// Natural pitch classes come back as the bare letter whatever the
/// preference.
pub fn spell(pc: PitchClass, preference: SpellingPreference) -> &'static str {
    if pc.is_natural() {
        return pc.sharp_name();
    }

    match preference {
        SpellingPreference::Flat => pc.flat_name(),
        SpellingPreference::Sharp => pc.sharp_name(),
    }
}
