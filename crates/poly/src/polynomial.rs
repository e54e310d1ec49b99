// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{self, Debug, Display},
	hash::Hash,
	mem,
};

use gf2poly_utils::{bail, ensure};
use num_bigint::BigInt;
use num_traits::Signed;
use rand::RngCore;
use tracing::instrument;

use crate::Error;

/// A polynomial with coefficients in GF(2).
///
/// Mathematically a polynomial is the finite set of exponents whose coefficient is 1. Values
/// are immutable: every operation returns a new polynomial and leaves its operands untouched.
///
/// The zero polynomial has no degree, [`BinaryPolynomial::degree`] returns `None` for it.
pub trait BinaryPolynomial:
	Sized + Clone + Eq + Hash + Default + Debug + Display + Send + Sync + 'static
{
	/// The additive identity, the empty exponent set.
	fn zero() -> Self;

	/// The monomial $x^k$.
	fn monomial(exponent: usize) -> Self;

	/// Builds a polynomial from a sequence of exponents in any order.
	///
	/// Coefficients live in GF(2), so an exponent that occurs twice cancels out.
	fn from_degrees<I: IntoIterator<Item = usize>>(degrees: I) -> Self;

	/// Returns a polynomial of exactly the given degree, every lower coefficient drawn
	/// uniformly at random.
	fn random(degree: usize, rng: impl RngCore) -> Self;

	/// The exponents with a non-zero coefficient, in strictly descending order.
	fn degrees(&self) -> Vec<usize>;

	fn degree(&self) -> Option<usize>;

	/// GF(2) addition, the symmetric difference of the exponent sets.
	fn add(&self, other: &Self) -> Self;

	/// Carry-less product of two polynomials.
	fn multiply(&self, other: &Self) -> Self;

	/// Polynomial long division, returns the quotient and the remainder.
	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error>;

	/// Intersection of the exponent sets.
	///
	/// This is a structural operation on the coefficient vector, not a ring operation.
	fn and(&self, other: &Self) -> Self;

	/// Union of the exponent sets.
	///
	/// This is a structural operation on the coefficient vector, not a ring operation.
	fn or(&self, other: &Self) -> Self;

	fn one() -> Self {
		Self::monomial(0)
	}

	/// [`BinaryPolynomial::random`] with a negative-degree check and the thread-local RNG.
	fn create_random(degree: i64) -> Result<Self, Error> {
		ensure!(degree >= 0, Error::NegativeDegree { degree });
		let degree = usize::try_from(degree).map_err(|_| Error::DegreeTooLarge { degree })?;
		Ok(Self::random(degree, rand::thread_rng()))
	}

	fn is_zero(&self) -> bool {
		self.degree().is_none()
	}

	/// Whether this is the polynomial `1`, the only unit of GF(2)[x].
	fn is_one(&self) -> bool {
		self.degree() == Some(0)
	}

	fn square(&self) -> Self {
		self.multiply(self)
	}

	/// The remainder of the division by `modulus`, its degree is below the modulus degree.
	fn rem(&self, modulus: &Self) -> Result<Self, Error> {
		self.div_rem(modulus).map(|(_, rem)| rem)
	}

	/// Whether `self` divides `other` without remainder.
	fn divides(&self, other: &Self) -> Result<bool, Error> {
		Ok(other.rem(self)?.is_zero())
	}

	fn gcd(&self, other: &Self) -> Result<Self, Error> {
		gcd(self, other)
	}

	fn is_reducible(&self) -> Result<bool, Error> {
		is_reducible(self)
	}

	fn mod_pow(&self, exponent: &BigInt, modulus: &Self) -> Result<Self, Error> {
		mod_pow(self, exponent, modulus)
	}
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// The result needs no normalization since 1 is the only unit of GF(2). `gcd(a, 0) = a` and
/// `gcd(0, 0)` is rejected.
#[instrument(skip_all, level = "trace")]
pub fn gcd<P: BinaryPolynomial>(a: &P, b: &P) -> Result<P, Error> {
	ensure!(!(a.is_zero() && b.is_zero()), Error::GcdOfZeros);

	let mut a = a.clone();
	let mut b = b.clone();
	while !b.is_zero() {
		let rem = a.rem(&b)?;
		a = mem::replace(&mut b, rem);
	}
	Ok(a)
}

/// Tests whether `f` factors into polynomials of lower degree.
///
/// A polynomial of degree $n$ is reducible iff it has an irreducible factor of some degree
/// $k \le n/2$, and the irreducible polynomials of degree dividing $k$ are exactly the factors
/// of $x^{2^k} - x$. The test therefore walks $h_k = x^{2^k} \bmod f$ by repeated squaring and
/// stops at the first $k$ with $\gcd(h_k - x, f) \ne 1$.
#[instrument(skip_all, level = "debug")]
pub fn is_reducible<P: BinaryPolynomial>(f: &P) -> Result<bool, Error> {
	let degree = match f.degree() {
		None | Some(0) => bail!(Error::NotIrreducibilityCandidate),
		Some(degree) => degree,
	};

	let x = P::monomial(1);
	let mut h = x.rem(f)?;
	for _ in 1..=degree / 2 {
		h = h.square().rem(f)?;
		if !h.add(&x).gcd(f)?.is_one() {
			return Ok(true);
		}
	}
	Ok(false)
}

/// Computes `base^exponent mod modulus` by left-to-right square-and-multiply.
///
/// Every intermediate product is reduced right away, so no operand exceeds twice the modulus
/// degree.
#[instrument(skip_all, level = "debug")]
pub fn mod_pow<P: BinaryPolynomial>(
	base: &P,
	exponent: &BigInt,
	modulus: &P,
) -> Result<P, Error> {
	ensure!(!exponent.is_negative(), Error::NegativeExponent);
	ensure!(!modulus.is_zero(), Error::DivisionByZero);

	let exponent = exponent.magnitude();
	let base = base.rem(modulus)?;
	let mut acc = P::one().rem(modulus)?;
	for bit in (0..exponent.bits()).rev() {
		acc = acc.square().rem(modulus)?;
		if exponent.bit(bit) {
			acc = acc.multiply(&base).rem(modulus)?;
		}
	}
	Ok(acc)
}

/// Writes the polynomial given by descending exponents as `x^5 + x + 1`.
pub(crate) fn fmt_terms(
	f: &mut fmt::Formatter<'_>,
	mut degrees: impl Iterator<Item = usize>,
) -> fmt::Result {
	let Some(first) = degrees.next() else {
		return f.write_str("0");
	};
	fmt_term(f, first)?;
	for exponent in degrees {
		f.write_str(" + ")?;
		fmt_term(f, exponent)?;
	}
	Ok(())
}

fn fmt_term(f: &mut fmt::Formatter<'_>, exponent: usize) -> fmt::Result {
	match exponent {
		0 => f.write_str("1"),
		1 => f.write_str("x"),
		_ => write!(f, "x^{exponent}"),
	}
}

/// Implements the infallible operations as `std::ops` on references.
macro_rules! impl_polynomial_ops {
	($name:ty) => {
		impl std::ops::Add for &$name {
			type Output = $name;

			fn add(self, rhs: Self) -> $name {
				$crate::BinaryPolynomial::add(self, rhs)
			}
		}

		impl std::ops::Mul for &$name {
			type Output = $name;

			fn mul(self, rhs: Self) -> $name {
				$crate::BinaryPolynomial::multiply(self, rhs)
			}
		}

		impl std::ops::BitAnd for &$name {
			type Output = $name;

			fn bitand(self, rhs: Self) -> $name {
				$crate::BinaryPolynomial::and(self, rhs)
			}
		}

		impl std::ops::BitOr for &$name {
			type Output = $name;

			fn bitor(self, rhs: Self) -> $name {
				$crate::BinaryPolynomial::or(self, rhs)
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				$crate::polynomial::fmt_terms(
					f,
					$crate::BinaryPolynomial::degrees(self).into_iter(),
				)
			}
		}
	};
}

pub(crate) use impl_polynomial_ops;
