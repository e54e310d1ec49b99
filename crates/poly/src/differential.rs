// Copyright 2024-2025 Irreducible Inc.

//! Differential testing of [`BitPolynomial`] against [`SetPolynomial`].
//!
//! Both representations are built from the same exponent sequence, every operation is run
//! on each of them and the results are compared through [`BinaryPolynomial::degrees`].
//! Failures must agree too: both sides have to reject the same inputs with the same
//! [`ErrorKind`].

use gf2poly_utils::{config::WorkloadConfig, rayon::chunk_size};
use num_bigint::BigInt;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{BinaryPolynomial, BitPolynomial, Error, ErrorKind, SetPolynomial};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Add,
	Multiply,
	Rem,
	And,
	Or,
	Gcd,
	IsReducible,
	ModPow,
}

impl Operation {
	pub const ALL: [Self; 8] = [
		Self::Add,
		Self::Multiply,
		Self::Rem,
		Self::And,
		Self::Or,
		Self::Gcd,
		Self::IsReducible,
		Self::ModPow,
	];
}

/// Representation-independent result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Polynomial(Vec<usize>),
	Boolean(bool),
	Failed(ErrorKind),
}

impl Outcome {
	fn polynomial<P: BinaryPolynomial>(result: Result<P, Error>) -> Self {
		match result {
			Ok(poly) => Self::Polynomial(poly.degrees()),
			Err(err) => Self::Failed(err.kind()),
		}
	}

	fn boolean(result: Result<bool, Error>) -> Self {
		match result {
			Ok(value) => Self::Boolean(value),
			Err(err) => Self::Failed(err.kind()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation:?} disagrees between representations: fast {fast:?}, slow {slow:?}")]
pub struct Mismatch {
	pub operation: Operation,
	pub fast: Outcome,
	pub slow: Outcome,
}

/// Operands of one differential check.
///
/// Binary operations combine `lhs` with `rhs`, except for the ones taking a modulus
/// (`rem`, `and`, `or`, `mod_pow`), which combine `lhs` with `modulus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
	pub lhs: BitPolynomial,
	pub rhs: BitPolynomial,
	pub modulus: BitPolynomial,
	pub exponent: BigInt,
}

impl Case {
	pub fn random(config: &WorkloadConfig, mut rng: impl RngCore) -> Self {
		Self {
			lhs: BitPolynomial::random(config.degree, &mut rng),
			rhs: BitPolynomial::random(config.degree, &mut rng),
			modulus: BitPolynomial::random(config.modulus_degree, &mut rng),
			exponent: BigInt::from(config.exponent),
		}
	}
}

fn run<P: BinaryPolynomial>(
	operation: Operation,
	lhs: &P,
	rhs: &P,
	modulus: &P,
	exponent: &BigInt,
) -> Outcome {
	match operation {
		Operation::Add => Outcome::Polynomial(lhs.add(rhs).degrees()),
		Operation::Multiply => Outcome::Polynomial(lhs.multiply(rhs).degrees()),
		Operation::Rem => Outcome::polynomial(lhs.rem(modulus)),
		Operation::And => Outcome::Polynomial(lhs.and(modulus).degrees()),
		Operation::Or => Outcome::Polynomial(lhs.or(modulus).degrees()),
		Operation::Gcd => Outcome::polynomial(lhs.gcd(rhs)),
		Operation::IsReducible => Outcome::boolean(lhs.is_reducible()),
		Operation::ModPow => Outcome::polynomial(lhs.mod_pow(exponent, modulus)),
	}
}

/// Runs every [`Operation`] on both representations of `case`.
pub fn check_case(case: &Case) -> Result<(), Mismatch> {
	check_operations(case, &Operation::ALL)
}

#[instrument(skip_all, level = "debug")]
pub fn check_operations(case: &Case, operations: &[Operation]) -> Result<(), Mismatch> {
	let lhs = SetPolynomial::from(&case.lhs);
	let rhs = SetPolynomial::from(&case.rhs);
	let modulus = SetPolynomial::from(&case.modulus);

	for &operation in operations {
		let fast = run(operation, &case.lhs, &case.rhs, &case.modulus, &case.exponent);
		let slow = run(operation, &lhs, &rhs, &modulus, &case.exponent);
		if fast != slow {
			let mismatch = Mismatch {
				operation,
				fast,
				slow,
			};
			warn!(
				%mismatch,
				lhs = %case.lhs,
				rhs = %case.rhs,
				modulus = %case.modulus,
				"representations disagree"
			);
			return Err(mismatch);
		}
	}
	Ok(())
}

/// Checks `trials` random cases in parallel and returns the mismatches found.
///
/// Trial `i` draws its operands from an RNG seeded with `seed + i`, where `seed` is the
/// configured one or, if there is none, a fresh random value that gets logged so the run can
/// be reproduced.
#[instrument(skip(config), level = "debug")]
pub fn check_random_cases(config: &WorkloadConfig, trials: usize) -> Vec<Mismatch> {
	let seed = config.seed.unwrap_or_else(rand::random);
	info!(seed, trials, degree = config.degree, "running differential checks");

	(0..trials)
		.into_par_iter()
		.with_min_len(chunk_size(trials))
		.filter_map(|trial| {
			let rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
			check_case(&Case::random(config, rng)).err()
		})
		.collect()
}
