// Copyright 2024-2025 Irreducible Inc.

//! Polynomial arithmetic over the binary field GF(2).
//!
//! Two interchangeable representations implement [`BinaryPolynomial`]:
//!
//! * [`BitPolynomial`] packs coefficients into 64-bit words and is the one to use.
//! * [`SetPolynomial`] stores the sorted exponent list and manipulates it directly. It is
//!   slow on purpose and exists as an independent oracle for [`BitPolynomial`], see
//!   [`differential`].
//!
//! The representation-agnostic algorithms ([`gcd`], [`is_reducible`], [`mod_pow`]) are
//! written once against the trait.

pub mod bit_polynomial;
pub mod differential;
pub mod error;
pub mod polynomial;
pub mod set_polynomial;
#[cfg(test)]
mod tests;

pub use bit_polynomial::BitPolynomial;
pub use error::*;
pub use polynomial::{gcd, is_reducible, mod_pow, BinaryPolynomial};
pub use set_polynomial::SetPolynomial;
