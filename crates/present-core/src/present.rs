//! The full PRESENT cipher: 64-bit blocks, 80-bit or 128-bit keys.

use crate::error::CipherError;
use crate::sbox::{SBOX, SBOX_INV};

/// Bit-position permutation of the 64-bit state: bit `i` moves to `PBOX[i]`.
const PBOX: [u32; 64] = [
    0, 16, 32, 48, 1, 17, 33, 49, 2, 18, 34, 50, 3, 19, 35, 51, 4, 20, 36, 52, 5, 21, 37, 53, 6,
    22, 38, 54, 7, 23, 39, 55, 8, 24, 40, 56, 9, 25, 41, 57, 10, 26, 42, 58, 11, 27, 43, 59, 12,
    28, 44, 60, 13, 29, 45, 61, 14, 30, 46, 62, 15, 31, 47, 63,
];

/// Inverse of [`PBOX`].
const PBOX_INV: [u32; 64] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 1, 5, 9, 13, 17, 21, 25, 29, 33,
    37, 41, 45, 49, 53, 57, 61, 2, 6, 10, 14, 18, 22, 26, 30, 34, 38, 42, 46, 50, 54, 58, 62, 3,
    7, 11, 15, 19, 23, 27, 31, 35, 39, 43, 47, 51, 55, 59, 63,
];

/// Block size of the full cipher, in bytes.
pub const BLOCK_BYTES: usize = 8;

const DEFAULT_ROUNDS: usize = 32;

/// The PRESENT cipher with a fixed key schedule.
///
/// Round keys are derived once at construction and immutable afterwards, so
/// a `Present` value can be shared between threads freely. Each 8-byte block
/// is encrypted independently (ECB); no chaining or padding is applied.
#[derive(Clone, Debug)]
pub struct Present {
    rounds: usize,
    round_keys: Vec<u64>,
}

impl Present {
    /// Creates a cipher with the standard 32-round schedule.
    ///
    /// The key must be exactly 10 bytes (80-bit) or 16 bytes (128-bit),
    /// interpreted big-endian; any other length fails with
    /// [`CipherError::InvalidKeyLength`].
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Creates a cipher with an explicit round count (at least one).
    pub fn with_rounds(key: &[u8], rounds: usize) -> Result<Self, CipherError> {
        assert!(rounds >= 1, "cipher needs at least one round");
        let round_keys = match key.len() * 8 {
            80 => expand_key_80(be_to_u128(key), rounds),
            128 => expand_key_128(be_to_u128(key), rounds),
            bits => return Err(CipherError::InvalidKeyLength { bits }),
        };
        Ok(Self { rounds, round_keys })
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        BLOCK_BYTES
    }

    /// Encrypts a single 64-bit block given as an integer.
    pub fn encrypt_block(&self, block: u64) -> u64 {
        let mut state = block;
        for i in 0..self.rounds - 1 {
            state ^= self.round_keys[i];
            state = sbox_layer(state);
            state = p_layer(state);
        }
        state ^ self.round_keys[self.rounds - 1]
    }

    /// Decrypts a single 64-bit block given as an integer.
    pub fn decrypt_block(&self, block: u64) -> u64 {
        let mut state = block;
        for i in 0..self.rounds - 1 {
            state ^= self.round_keys[self.rounds - 1 - i];
            state = p_layer_inv(state);
            state = sbox_layer_inv(state);
        }
        state ^ self.round_keys[0]
    }

    /// Encrypts a byte message as successive big-endian 8-byte blocks.
    ///
    /// The input length must be a multiple of eight bytes; a trailing partial
    /// block is rejected with [`CipherError::MalformedBlockInput`] instead of
    /// being zero-padded, since implicit padding would change the message
    /// length on the way back. Callers must pad explicitly. An empty input
    /// yields an empty output.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.map_blocks(data, |block| self.encrypt_block(block))
    }

    /// Decrypts a byte message as successive big-endian 8-byte blocks.
    ///
    /// Same length contract as [`Present::encrypt`].
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.map_blocks(data, |block| self.decrypt_block(block))
    }

    fn map_blocks(
        &self,
        data: &[u8],
        transform: impl Fn(u64) -> u64,
    ) -> Result<Vec<u8>, CipherError> {
        if data.len() % BLOCK_BYTES != 0 {
            return Err(CipherError::MalformedBlockInput { len: data.len() });
        }
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_BYTES) {
            let block = u64::from_be_bytes(chunk.try_into().expect("chunk length is eight"));
            out.extend_from_slice(&transform(block).to_be_bytes());
        }
        Ok(out)
    }
}

/// Packs up to 16 big-endian key bytes into a 128-bit register.
fn be_to_u128(key: &[u8]) -> u128 {
    key.iter().fold(0, |acc, &b| (acc << 8) | u128::from(b))
}

/// Round-key recurrence for 80-bit keys.
///
/// Per round: emit the top 64 bits, rotate the 80-bit register left by 61,
/// substitute the top nibble, XOR the round counter into bits 15..20.
fn expand_key_80(mut key: u128, rounds: usize) -> Vec<u64> {
    let mut round_keys = Vec::with_capacity(rounds);
    for i in 1..=rounds as u128 {
        round_keys.push((key >> 16) as u64);
        key = ((key & ((1 << 19) - 1)) << 61) | (key >> 19);
        let top = (key >> 76) as usize & 0xF;
        key = (u128::from(SBOX[top]) << 76) | (key & ((1 << 76) - 1));
        key ^= i << 15;
    }
    round_keys
}

/// Round-key recurrence for 128-bit keys.
///
/// Per round: emit the top 64 bits, rotate the register left by 61,
/// substitute the top two nibbles, XOR the round counter into bits 62..67.
fn expand_key_128(mut key: u128, rounds: usize) -> Vec<u64> {
    let mut round_keys = Vec::with_capacity(rounds);
    for i in 1..=rounds as u128 {
        round_keys.push((key >> 64) as u64);
        key = ((key & ((1 << 67) - 1)) << 61) | (key >> 67);
        let hi = (key >> 124) as usize & 0xF;
        let lo = (key >> 120) as usize & 0xF;
        key = (u128::from(SBOX[hi]) << 124)
            | (u128::from(SBOX[lo]) << 120)
            | (key & ((1 << 120) - 1));
        key ^= i << 62;
    }
    round_keys
}

/// Substitutes all sixteen nibbles of the state.
fn sbox_layer(state: u64) -> u64 {
    let mut out = 0;
    for i in 0..16 {
        out |= u64::from(SBOX[(state >> (i * 4)) as usize & 0xF]) << (i * 4);
    }
    out
}

fn sbox_layer_inv(state: u64) -> u64 {
    let mut out = 0;
    for i in 0..16 {
        out |= u64::from(SBOX_INV[(state >> (i * 4)) as usize & 0xF]) << (i * 4);
    }
    out
}

/// Wire-crossing diffusion layer over all 64 state bits.
fn p_layer(state: u64) -> u64 {
    let mut out = 0;
    for (i, &target) in PBOX.iter().enumerate() {
        out |= ((state >> i) & 1) << target;
    }
    out
}

fn p_layer_inv(state: u64) -> u64 {
    let mut out = 0;
    for (i, &target) in PBOX_INV.iter().enumerate() {
        out |= ((state >> i) & 1) << target;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const KEY80_ZERO: [u8; 10] = [0; 10];
    const KEY80_ONES: [u8; 10] = [0xFF; 10];
    const KEY128_ZERO: [u8; 16] = [0; 16];

    #[test]
    fn rejects_unsupported_key_lengths() {
        for len in [0usize, 8, 9, 11, 15, 17, 32] {
            let key = vec![0u8; len];
            assert_eq!(
                Present::new(&key).unwrap_err(),
                CipherError::InvalidKeyLength { bits: len * 8 }
            );
        }
    }

    #[test]
    fn matches_official_present80_vectors() {
        let cases: [(&[u8], u64, u64); 4] = [
            (&KEY80_ZERO, 0, 0x5579_c138_7b22_8445),
            (&KEY80_ONES, 0, 0xe72c_46c0_f594_5049),
            (&KEY80_ZERO, 0xFFFF_FFFF_FFFF_FFFF, 0xa112_ffc7_2f68_417b),
            (
                &KEY80_ONES,
                0xFFFF_FFFF_FFFF_FFFF,
                0x3333_dcd3_2132_10d2,
            ),
        ];
        for (key, plain, expected) in cases {
            let cipher = Present::new(key).expect("valid key");
            assert_eq!(cipher.encrypt_block(plain), expected);
            assert_eq!(cipher.decrypt_block(expected), plain);
        }
    }

    #[test]
    fn matches_present128_vectors() {
        let cipher = Present::new(&KEY128_ZERO).expect("valid key");
        assert_eq!(cipher.encrypt_block(0), 0x96db_702a_2e69_00af);

        let key: [u8; 16] = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ];
        let cipher = Present::new(&key).expect("valid key");
        assert_eq!(
            cipher.encrypt_block(0x0123_4567_89ab_cdef),
            0x0e9d_2868_5e67_1dd6
        );
        assert_eq!(
            cipher.decrypt_block(0x0e9d_2868_5e67_1dd6),
            0x0123_4567_89ab_cdef
        );
    }

    #[test]
    fn p_layer_tables_are_inverse() {
        for i in 0..64 {
            assert_eq!(PBOX_INV[PBOX[i] as usize] as usize, i);
            assert_eq!(PBOX[PBOX_INV[i] as usize] as usize, i);
        }
    }

    #[test]
    fn layers_invert_each_other() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let state = rng.next_u64();
            assert_eq!(sbox_layer_inv(sbox_layer(state)), state);
            assert_eq!(p_layer_inv(p_layer(state)), state);
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut key80 = [0u8; 10];
            let mut key128 = [0u8; 16];
            rng.fill_bytes(&mut key80);
            rng.fill_bytes(&mut key128);
            let block = rng.next_u64();
            for cipher in [
                Present::new(&key80).expect("valid key"),
                Present::new(&key128).expect("valid key"),
            ] {
                assert_eq!(cipher.decrypt_block(cipher.encrypt_block(block)), block);
            }
        }
    }

    #[test]
    fn byte_api_round_trips_whole_blocks() {
        let cipher = Present::new(&KEY80_ZERO).expect("valid key");
        let message = b"exactly sixteen!";
        let ciphertext = cipher.encrypt(message).expect("whole blocks");
        assert_eq!(ciphertext.len(), message.len());
        assert_ne!(&ciphertext[..], &message[..]);
        // ECB: no chaining between independent blocks
        let first_again = cipher.encrypt(&message[..8]).expect("whole block");
        assert_eq!(&ciphertext[..8], &first_again[..]);
        let plaintext = cipher.decrypt(&ciphertext).expect("whole blocks");
        assert_eq!(&plaintext[..], &message[..]);
    }

    #[test]
    fn byte_api_rejects_partial_final_block() {
        let cipher = Present::new(&KEY80_ZERO).expect("valid key");
        assert_eq!(
            cipher.encrypt(b"short").unwrap_err(),
            CipherError::MalformedBlockInput { len: 5 }
        );
        assert_eq!(
            cipher.decrypt(&[0u8; 12]).unwrap_err(),
            CipherError::MalformedBlockInput { len: 12 }
        );
        assert!(cipher.encrypt(&[]).expect("empty is fine").is_empty());
    }

    #[test]
    fn reduced_round_cipher_still_round_trips() {
        let cipher = Present::with_rounds(&KEY80_ZERO, 8).expect("valid key");
        for block in [0u64, 1, u64::MAX, 0x0123_4567_89ab_cdef] {
            assert_eq!(cipher.decrypt_block(cipher.encrypt_block(block)), block);
        }
    }
}
