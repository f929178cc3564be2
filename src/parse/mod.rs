//! Parsing module for the chord transposition engine
//!
//! This module finds chord symbols inside free-form chart lines.

pub mod tokens;

// Re-export commonly used types
pub use tokens::*;
