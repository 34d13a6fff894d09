//! The PRESENT 4-bit S-box, shared by the full and mini ciphers.

/// The PRESENT substitution table.
pub const SBOX: [u8; 16] = [
    0xc, 0x5, 0x6, 0xb, 0x9, 0x0, 0xa, 0xd, 0x3, 0xe, 0xf, 0x8, 0x4, 0x7, 0x1, 0x2,
];

/// Inverse of [`SBOX`].
pub const SBOX_INV: [u8; 16] = [
    0x5, 0xe, 0xf, 0x8, 0xc, 0x1, 0x2, 0xd, 0xb, 0x4, 0x6, 0x3, 0x0, 0x7, 0x9, 0xa,
];

/// Substitutes a single nibble. The high four bits of `x` are ignored.
#[inline]
pub fn sbox(x: u8) -> u8 {
    SBOX[usize::from(x & 0xF)]
}

/// Inverse substitution of a single nibble.
#[inline]
pub fn inv_sbox(x: u8) -> u8 {
    SBOX_INV[usize::from(x & 0xF)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_is_a_bijection() {
        let mut seen = [false; 16];
        for x in 0..16u8 {
            let y = sbox(x);
            assert!(y < 16);
            assert!(!seen[usize::from(y)]);
            seen[usize::from(y)] = true;
        }
    }

    #[test]
    fn inv_sbox_inverts_sbox() {
        for x in 0..16u8 {
            assert_eq!(inv_sbox(sbox(x)), x);
            assert_eq!(sbox(inv_sbox(x)), x);
        }
    }
}
