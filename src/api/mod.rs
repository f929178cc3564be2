//! Chord transposition WASM API
//!
//! This module provides the JavaScript-facing API for the engine.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization with error reporting
//! - `transpose`: Line transposition and chord discovery
//! - `keys`: Key validation, normalization and the key catalogue

pub mod helpers;
pub mod keys;
pub mod transpose;

pub use keys::{get_all_keys, is_valid_key, normalize_key};
pub use transpose::{find_chords, transpose_by_interval, transpose_chord_line, transpose_chord_line_by_steps};
