//! GMAC-style message authentication over the Mini PRESENT cipher.
//!
//! The tag construction is Wegman–Carter shaped: a polynomial hash over
//! GF(2^16) mixes the message, and a keystream block derived by encrypting
//! the IV under the block cipher masks the hash. Unforgeability rests on
//! never reusing a (key, IV) pair.
//!
//! The message is consumed as successive 16-bit chunks, lowest bits first.
//! Each chunk is hashed independently and XORed with the keystream; the tag
//! returned is the last chunk's value, and [`Gmac::state`] exposes the last
//! raw pre-XOR hash accumulator for analysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use gf2_field::{poly, FieldContext, FieldError};
use present_core::MiniPresent;
use rand::{Rng, RngCore};

/// Default field extension degree, matching the 16-bit chunk width.
pub const DEFAULT_FIELD_DEGREE: u32 = 16;

/// Default reduction polynomial, x^16 + x^12 + x^3 + x + 1.
pub const DEFAULT_REDUCTION_POLY: u64 = 0b1_0001_0000_0000_1011;

/// GMAC-style tag generator bound to one key and one field.
///
/// The hash subkey is derived once at construction by encrypting the zero
/// block under the Mini cipher. The only mutable state is the last hash
/// accumulator recorded by [`Gmac::generate`].
#[derive(Clone, Debug)]
pub struct Gmac {
    cipher: MiniPresent,
    subkey: u16,
    field: FieldContext,
    last_hash: u64,
}

impl Gmac {
    /// Creates a generator over the default field GF(2^16).
    pub fn new(key: u16) -> Self {
        Self::with_field(key, DEFAULT_FIELD_DEGREE, DEFAULT_REDUCTION_POLY)
            .expect("default field parameters are valid")
    }

    /// Creates a generator over an explicit binary field.
    pub fn with_field(key: u16, degree: u32, reduction: u64) -> Result<Self, FieldError> {
        let field = FieldContext::new(degree, reduction)?;
        let cipher = MiniPresent::new(key);
        let subkey = cipher.encrypt(0);
        Ok(Self {
            cipher,
            subkey,
            field,
            last_hash: 0,
        })
    }

    /// Computes the authentication tag for `open_text` under `iv`.
    ///
    /// The text is split into 16-bit chunks starting from the low bits; each
    /// chunk's hash overwrites the exposed state and its masked value
    /// overwrites the tag, so the result depends on the final chunk's hash.
    /// A zero text yields tag 0 and leaves the state untouched.
    ///
    /// The keystream block depends only on the key and IV, so it is computed
    /// once per call rather than once per chunk as the original scheme
    /// described it; the output is identical.
    pub fn generate(&mut self, open_text: u128, iv: u16) -> u64 {
        let keystream = self.gctr(iv);
        let mut remaining = open_text;
        let mut tag = 0;
        while remaining > 0 {
            let chunk = (remaining & 0xFFFF) as u64;
            let hash = self.hash_chunk(chunk);
            self.last_hash = hash;
            tag = hash ^ keystream;
            remaining >>= 16;
        }
        tag
    }

    /// Last raw polynomial-hash accumulator recorded by [`Gmac::generate`].
    pub fn state(&self) -> u64 {
        self.last_hash
    }

    /// Horner-scheme hash of one chunk: fold each coefficient bit of the
    /// chunk (most significant first) into the accumulator and multiply by
    /// the subkey in the field. The accumulator starts at zero per chunk.
    fn hash_chunk(&self, chunk: u64) -> u64 {
        let mut acc = 0;
        for bit in poly::to_coefficients(chunk) {
            acc = self.field.multiply(acc ^ u64::from(bit), u64::from(self.subkey));
        }
        acc
    }

    /// Keystream derivation: encrypt each byte of the IV under the Mini
    /// cipher and shift the encrypted bytes back into their original
    /// positions. Bytes above the IV's highest nonzero byte contribute
    /// nothing (the loop stops there), mirroring the reference.
    fn gctr(&self, iv: u16) -> u64 {
        let mut remaining = iv;
        let mut keystream = 0;
        let mut shift = 0;
        while remaining != 0 {
            let byte = remaining & 0xFF;
            keystream |= u64::from(self.cipher.encrypt(byte)) << shift;
            shift += 8;
            remaining >>= 8;
        }
        keystream
    }
}

/// Samples a compliant IV from the thread-local RNG.
///
/// The low nibble is cleared and forced to `0b0001`, ruling out the all-zero
/// IV and giving every generated IV the same known low pattern.
pub fn generate_iv() -> u16 {
    generate_iv_with(&mut rand::thread_rng())
}

/// Samples a compliant IV from a caller-provided RNG.
pub fn generate_iv_with<R: RngCore + ?Sized>(rng: &mut R) -> u16 {
    rng.gen::<u16>() & 0xFFF0 | 1
}
