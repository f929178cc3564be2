//! Chord Transposition WASM Module
//!
//! Shifts the chord symbols in a line of a chord chart by a musical
//! interval and re-spells them with sensible sharps and flats, leaving
//! lyrics and spacing untouched.
//!
//! ```
//! use chordshift_wasm::transpose_chord_line;
//!
//! assert_eq!(transpose_chord_line("C G Am F", "C", "D"), "D A Bm G");
//! ```

pub mod api;
pub mod models;
pub mod parse;
pub mod transposition;

// Re-export commonly used types
pub use models::key::{all_keys, is_valid_key, normalize_key};
pub use models::{Interval, Key, KeyError, Mode, PitchClass, SpellingPreference, Tonic};
pub use parse::ChordMatch;
pub use transposition::{
    find_chords, transpose_by_interval, transpose_chord_line, transpose_chord_line_by_steps,
    TransposeError,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Chord transposition WASM module initialized");
}
