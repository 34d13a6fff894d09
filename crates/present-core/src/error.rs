//! Error types for the PRESENT ciphers.

use core::fmt;

/// Errors reported by cipher construction and block input handling.
///
/// All variants are deterministic usage errors; there is no transient or
/// retryable failure class. Note the asymmetry preserved from the reference
/// design: only the full cipher validates its key, while [`crate::MiniPresent`]
/// accepts any 16-bit key without an error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// The raw key is not one of the supported bit widths (80 or 128).
    InvalidKeyLength {
        /// Bit width of the rejected key.
        bits: usize,
    },
    /// A byte input cannot be split into whole blocks of the cipher's size.
    MalformedBlockInput {
        /// Length in bytes of the rejected input.
        len: usize,
    },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength { bits } => {
                write!(f, "key must be 80 or 128 bits, got {bits}")
            }
            CipherError::MalformedBlockInput { len } => {
                write!(f, "input length {len} is not a multiple of the block size")
            }
        }
    }
}

impl std::error::Error for CipherError {}
