//! Conversions between packed field elements and explicit polynomial forms.
//!
//! Two representations are supported besides the packed `u64` bitmask:
//! coefficient sequences (one 0/1 entry per term, most significant first) and
//! exponent lists (degrees of the nonzero terms, descending). Conversions are
//! exact inverses for well-formed inputs.

/// Expands a packed element into its coefficient bits, most significant first.
///
/// Zero normalizes to the single-coefficient sequence `[0]`, never to an
/// empty sequence, so that [`from_coefficients`] round-trips.
pub fn to_coefficients(value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let bits = 64 - value.leading_zeros();
    (0..bits)
        .rev()
        .map(|i| ((value >> i) & 1) as u8)
        .collect()
}

/// Packs a most-significant-first coefficient sequence into an element.
///
/// Coefficients are taken modulo 2; sequences longer than 64 entries wrap the
/// leading coefficients out of the register and are not well-formed.
pub fn from_coefficients(coefficients: &[u8]) -> u64 {
    coefficients
        .iter()
        .fold(0, |acc, &c| (acc << 1) | u64::from(c & 1))
}

/// Lists the exponents of an element's nonzero terms, highest degree first.
///
/// Zero maps to the empty list.
pub fn to_exponents(value: u64) -> Vec<u32> {
    (0..64).rev().filter(|&e| (value >> e) & 1 != 0).collect()
}

/// Packs a list of term exponents into an element.
pub fn from_exponents(exponents: &[u32]) -> u64 {
    exponents.iter().fold(0, |acc, &e| acc | (1 << e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_single_coefficient() {
        assert_eq!(to_coefficients(0), vec![0]);
        assert_eq!(from_coefficients(&[0]), 0);
    }

    #[test]
    fn coefficients_are_most_significant_first() {
        // x^3 + x + 1
        assert_eq!(to_coefficients(0b1011), vec![1, 0, 1, 1]);
        assert_eq!(from_coefficients(&[1, 0, 1, 1]), 0b1011);
    }

    #[test]
    fn coefficient_round_trip() {
        for value in (0..4096u64).chain([u64::MAX, 1 << 63, 0xdead_beef]) {
            assert_eq!(from_coefficients(&to_coefficients(value)), value);
        }
    }

    #[test]
    fn exponent_round_trip() {
        assert_eq!(to_exponents(0), Vec::<u32>::new());
        assert_eq!(to_exponents(0b1011), vec![3, 1, 0]);
        assert_eq!(from_exponents(&[3, 1, 0]), 0b1011);
        for value in 0..4096u64 {
            assert_eq!(from_exponents(&to_exponents(value)), value);
        }
    }
}
