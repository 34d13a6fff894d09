//! PRESENT block cipher implementation, full and reduced variants.
//!
//! This crate mirrors the CHES 2007 PRESENT specification and provides:
//! - Key schedules for 80-bit and 128-bit keys.
//! - Single-block and multi-block (ECB) encryption and decryption over
//!   64-bit blocks.
//! - [`MiniPresent`], a scaled-down teaching variant with a 16-bit key
//!   register and 8-bit blocks, used as the keystream primitive of the MAC
//!   engine in the `gmac` crate.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod mini;
mod present;
mod sbox;

pub use crate::error::CipherError;
pub use crate::mini::MiniPresent;
pub use crate::present::Present;
pub use crate::sbox::{inv_sbox, sbox, SBOX, SBOX_INV};
