//! A reduced PRESENT variant: 16-bit key register, 8-bit blocks.
//!
//! The round structure matches the full cipher (key mix, nibble substitution,
//! bit permutation, trailing key mix) scaled down to a two-nibble state. The
//! MAC engine uses this cipher both for subkey derivation and as its
//! keystream primitive.

use crate::sbox::{SBOX, SBOX_INV};

/// Bit-position permutation of the 8-bit state.
const PBOX: [u32; 8] = [0, 5, 2, 3, 7, 6, 1, 4];

/// Inverse of [`PBOX`].
const PBOX_INV: [u32; 8] = [0, 6, 2, 3, 7, 1, 5, 4];

const DEFAULT_ROUNDS: usize = 4;

/// The reduced cipher with a fixed key schedule.
///
/// Unlike [`crate::Present`], construction is infallible: any 16-bit key is
/// accepted without validation, matching the permissive reference behavior.
/// Inputs wider than the 8-bit block are silently truncated by the first
/// substitution layer rather than rejected.
#[derive(Clone, Debug)]
pub struct MiniPresent {
    rounds: usize,
    round_keys: Vec<u16>,
}

impl MiniPresent {
    /// Creates a cipher with the default four-round schedule.
    pub fn new(key: u16) -> Self {
        Self::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Creates a cipher with an explicit round count (at least one).
    pub fn with_rounds(key: u16, rounds: usize) -> Self {
        assert!(rounds >= 1, "cipher needs at least one round");
        Self {
            rounds,
            round_keys: expand_key_16(key, rounds),
        }
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        1
    }

    /// Encrypts one block.
    pub fn encrypt(&self, block: u16) -> u16 {
        let mut state = block;
        for i in 0..self.rounds - 1 {
            state ^= self.round_keys[i];
            state = sbox_layer(state);
            state = p_layer(state);
        }
        state ^ self.round_keys[self.rounds - 1]
    }

    /// Decrypts one block.
    pub fn decrypt(&self, block: u16) -> u16 {
        let mut state = block;
        for i in 0..self.rounds - 1 {
            state ^= self.round_keys[self.rounds - 1 - i];
            state = p_layer_inv(state);
            state = sbox_layer_inv(state);
        }
        state ^ self.round_keys[0]
    }
}

/// Round-key recurrence for the 16-bit register.
///
/// Per round: emit the high byte, rotate left by 7, collapse the register to
/// the S-box image of its top bit, XOR the round counter into the high byte.
/// The collapse is kept bit-compatible with the reference schedule; as a
/// consequence round keys depend only on bits 8..=15 of the raw key.
fn expand_key_16(mut key: u16, rounds: usize) -> Vec<u16> {
    let mut round_keys = Vec::with_capacity(rounds);
    for i in 1..=rounds {
        round_keys.push((key >> 8) & 0xFF);
        key = ((key & 0x1FF) << 7) | (key >> 9);
        key = u16::from(SBOX[usize::from(key >> 15)]);
        key ^= (i as u16) << 8;
    }
    round_keys
}

/// Substitutes the two nibbles of the 8-bit state; higher bits are dropped.
fn sbox_layer(state: u16) -> u16 {
    let mut out = 0;
    for i in 0..2 {
        out |= u16::from(SBOX[(state >> (i * 4)) as usize & 0xF]) << (i * 4);
    }
    out
}

fn sbox_layer_inv(state: u16) -> u16 {
    let mut out = 0;
    for i in 0..2 {
        out |= u16::from(SBOX_INV[(state >> (i * 4)) as usize & 0xF]) << (i * 4);
    }
    out
}

fn p_layer(state: u16) -> u16 {
    let mut out = 0;
    for (i, &target) in PBOX.iter().enumerate() {
        out |= ((state >> i) & 1) << target;
    }
    out
}

fn p_layer_inv(state: u16) -> u16 {
    let mut out = 0;
    for (i, &target) in PBOX_INV.iter().enumerate() {
        out |= ((state >> i) & 1) << target;
    }
    out
}
