// Copyright 2024-2025 Irreducible Inc.

use std::{collections::BTreeSet, fmt};

use gf2poly_utils::bail;
use itertools::{EitherOrBoth, Itertools};
use rand::{Rng, RngCore};
use tracing::instrument;

use crate::{polynomial::impl_polynomial_ops, BinaryPolynomial, BitPolynomial, Error};

/// Polynomial over GF(2) stored as the list of its exponents.
///
/// This is the reference representation: every operation works on the exponent list
/// directly, without any bit packing, so it can be used to cross-check [`BitPolynomial`].
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SetPolynomial {
	/// Strictly descending.
	exponents: Vec<usize>,
}

impl SetPolynomial {
	/// Multiplies by $x^k$.
	pub fn shl(&self, shift: usize) -> Self {
		Self {
			exponents: self.exponents.iter().map(|exponent| exponent + shift).collect(),
		}
	}

	/// Walks both descending exponent lists in lockstep and keeps the exponents selected by
	/// `keep`.
	fn merge(
		&self,
		other: &Self,
		keep: impl Fn(EitherOrBoth<usize, usize>) -> Option<usize>,
	) -> Self {
		let exponents = self
			.exponents
			.iter()
			.merge_join_by(&other.exponents, |lhs, rhs| rhs.cmp(lhs))
			.map(|pair| pair.map_any(|&lhs| lhs, |&rhs| rhs))
			.filter_map(keep)
			.collect();
		Self { exponents }
	}

	fn from_toggled(toggled: BTreeSet<usize>) -> Self {
		Self {
			exponents: toggled.into_iter().rev().collect(),
		}
	}
}

/// Inserts `exponent` into the set, or removes it if it is already there.
fn toggle(set: &mut BTreeSet<usize>, exponent: usize) {
	if !set.insert(exponent) {
		set.remove(&exponent);
	}
}

impl BinaryPolynomial for SetPolynomial {
	fn zero() -> Self {
		Self {
			exponents: Vec::new(),
		}
	}

	fn monomial(exponent: usize) -> Self {
		Self {
			exponents: vec![exponent],
		}
	}

	fn from_degrees<I: IntoIterator<Item = usize>>(degrees: I) -> Self {
		let mut toggled = BTreeSet::new();
		for exponent in degrees {
			toggle(&mut toggled, exponent);
		}
		Self::from_toggled(toggled)
	}

	fn random(degree: usize, mut rng: impl RngCore) -> Self {
		let lower = (0..degree).rev().filter(|_| rng.gen_bool(0.5));
		Self {
			exponents: std::iter::once(degree).chain(lower).collect(),
		}
	}

	fn degrees(&self) -> Vec<usize> {
		self.exponents.clone()
	}

	fn degree(&self) -> Option<usize> {
		self.exponents.first().copied()
	}

	fn add(&self, other: &Self) -> Self {
		self.merge(other, |pair| match pair {
			EitherOrBoth::Both(_, _) => None,
			EitherOrBoth::Left(exponent) | EitherOrBoth::Right(exponent) => Some(exponent),
		})
	}

	/// Schoolbook product over all pairs of exponents.
	#[instrument("SetPolynomial::multiply", skip_all, level = "trace")]
	fn multiply(&self, other: &Self) -> Self {
		let mut toggled = BTreeSet::new();
		for lhs in &self.exponents {
			for rhs in &other.exponents {
				toggle(&mut toggled, lhs + rhs);
			}
		}
		Self::from_toggled(toggled)
	}

	#[instrument("SetPolynomial::div_rem", skip_all, level = "trace")]
	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
		let Some(divisor_degree) = divisor.degree() else {
			bail!(Error::DivisionByZero);
		};

		let mut quotient = Vec::new();
		let mut rem = self.clone();
		while let Some(degree) = rem.degree() {
			if degree < divisor_degree {
				break;
			}
			let shift = degree - divisor_degree;
			quotient.push(shift);
			rem = rem.add(&divisor.shl(shift));
		}
		Ok((
			Self {
				exponents: quotient,
			},
			rem,
		))
	}

	fn and(&self, other: &Self) -> Self {
		self.merge(other, |pair| match pair {
			EitherOrBoth::Both(exponent, _) => Some(exponent),
			EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => None,
		})
	}

	fn or(&self, other: &Self) -> Self {
		self.merge(other, |pair| Some(pair.reduce(|lhs, _| lhs)))
	}
}

impl_polynomial_ops!(SetPolynomial);

impl fmt::Debug for SetPolynomial {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SetPolynomial").field(&self.exponents).finish()
	}
}

impl From<&BitPolynomial> for SetPolynomial {
	fn from(value: &BitPolynomial) -> Self {
		Self {
			exponents: value.degrees(),
		}
	}
}
