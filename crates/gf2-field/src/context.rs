//! Field parameters and multiplication.

use crate::error::FieldError;

/// Immutable parameters of a binary field GF(2^m) / g(x).
///
/// A context is validated at construction and never changes, so it can be
/// shared freely between callers. The element representation is a packed
/// `u64` bitmask of polynomial coefficients, least significant bit = x^0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldContext {
    degree: u32,
    reduction: u64,
    carry_mask: u64,
    value_mask: u64,
}

impl FieldContext {
    /// Creates a field context for GF(2^`degree`) modulo `reduction`.
    ///
    /// `reduction` is the full irreducible polynomial including its leading
    /// term, e.g. `0b1011` for x^3 + x + 1. The polynomial's degree must
    /// equal `degree`, and `degree` must fit a `u64` element with one carry
    /// bit to spare (1..=63).
    pub fn new(degree: u32, reduction: u64) -> Result<Self, FieldError> {
        if degree == 0 || degree > 63 {
            return Err(FieldError::InvalidDegree(degree));
        }
        if reduction >> degree != 1 {
            return Err(FieldError::ReductionDegreeMismatch {
                degree,
                polynomial: reduction,
            });
        }
        Ok(Self {
            degree,
            reduction,
            carry_mask: 1 << degree,
            value_mask: (1 << degree) - 1,
        })
    }

    /// Extension degree m of the field.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Full reduction polynomial, leading term included.
    pub fn reduction_polynomial(&self) -> u64 {
        self.reduction
    }

    /// Multiplies two field elements modulo the reduction polynomial.
    ///
    /// Shift-and-add over GF(2): for every set bit of the multiplier, XOR the
    /// running multiplicand into the product; the multiplicand is reduced
    /// whenever it overflows the field. XOR-ing the full reduction polynomial
    /// clears the carry bit and folds in the low terms in one step. Operands
    /// are masked into the field first; the result always fits `degree` bits.
    pub fn multiply(&self, a: u64, b: u64) -> u64 {
        let mut p1 = a & self.value_mask;
        let mut p2 = b & self.value_mask;
        let mut product = 0u64;
        while p2 != 0 {
            if p2 & 1 != 0 {
                product ^= p1;
            }
            p1 <<= 1;
            if p1 & self.carry_mask != 0 {
                p1 ^= self.reduction;
            }
            p2 >>= 1;
        }
        product & self.value_mask
    }
}
