//! Error types for chord transposition
//!
//! None of these escape the public text functions: every error is
//! collapsed to "return the input unchanged" at the boundary.

use thiserror::Error;

use crate::models::key::KeyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Key name could not be resolved; the whole line passes through
    #[error("Unresolvable key: {0}")]
    UnresolvableKey(#[from] KeyError),

    /// Token looked like a chord but its root is not a canonical spelling
    #[error("Unrecognized chord root in '{0}'")]
    UnrecognizedRoot(String),

    /// Token does not start with a root letter at all
    #[error("Malformed chord token: '{0}'")]
    MalformedChord(String),

    #[error("Unknown interval: '{0}'")]
    UnknownInterval(String),
}
