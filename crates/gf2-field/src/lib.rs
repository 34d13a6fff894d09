//! Binary finite field arithmetic over GF(2^m).
//!
//! This crate provides:
//! - [`FieldContext`]: immutable field parameters (extension degree and
//!   irreducible reduction polynomial), validated at construction.
//! - [`FieldContext::multiply`]: carry-less polynomial multiplication with
//!   modular reduction.
//! - [`poly`]: exact conversions between packed elements and coefficient or
//!   exponent representations.
//!
//! Field parameters are plain values passed into every operation; there is no
//! process-wide configuration, so distinct contexts can be used concurrently
//! without synchronization.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;
mod error;
pub mod poly;

pub use crate::context::FieldContext;
pub use crate::error::FieldError;
