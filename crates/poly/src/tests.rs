// Copyright 2024-2025 Irreducible Inc.

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::{
	differential::{check_case, Case},
	BinaryPolynomial, BitPolynomial, SetPolynomial,
};

/// Exponent lists with possible duplicates, so that cancellation on construction is covered.
fn exponents(max_degree: usize, max_len: usize) -> impl Strategy<Value = Vec<usize>> {
	prop::collection::vec(0..=max_degree, 0..=max_len)
}

fn nonzero_exponents(max_degree: usize, max_len: usize) -> impl Strategy<Value = Vec<usize>> {
	exponents(max_degree, max_len).prop_filter("the zero polynomial is excluded", |exponents| {
		!BitPolynomial::from_degrees(exponents.iter().copied()).is_zero()
	})
}

fn reference_pow(base: &BitPolynomial, exponent: u8, modulus: &BitPolynomial) -> BitPolynomial {
	let mut acc = BitPolynomial::one().rem(modulus).unwrap();
	for _ in 0..exponent {
		acc = acc.multiply(base).rem(modulus).unwrap();
	}
	acc
}

proptest! {
	#[test]
	fn add_is_self_inverse(a in exponents(300, 40), b in exponents(300, 40)) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		prop_assert_eq!(a.add(&b).add(&b), a.clone());
		prop_assert_eq!(a.add(&b), b.add(&a));
		prop_assert!(a.add(&a).is_zero());
	}

	#[test]
	fn degrees_are_descending_and_unique(a in exponents(300, 60)) {
		let degrees = SetPolynomial::from_degrees(a.clone()).degrees();
		prop_assert!(degrees.windows(2).all(|pair| pair[0] > pair[1]));
		prop_assert_eq!(BitPolynomial::from_degrees(a).degrees(), degrees);
	}

	#[test]
	fn multiply_adds_degrees(a in exponents(200, 30), b in exponents(200, 30)) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		let product = a.multiply(&b);
		match (a.degree(), b.degree()) {
			(Some(lhs), Some(rhs)) => prop_assert_eq!(product.degree(), Some(lhs + rhs)),
			_ => prop_assert!(product.is_zero()),
		}
		prop_assert_eq!(product, b.multiply(&a));
	}

	#[test]
	fn multiply_distributes_over_add(
		a in exponents(150, 20),
		b in exponents(150, 20),
		c in exponents(150, 20),
	) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		let c = BitPolynomial::from_degrees(c);
		prop_assert_eq!(a.multiply(&b.add(&c)), a.multiply(&b).add(&a.multiply(&c)));
	}

	#[test]
	fn rem_is_reduced_and_idempotent(a in exponents(400, 50), m in nonzero_exponents(150, 20)) {
		let a = BitPolynomial::from_degrees(a);
		let m = BitPolynomial::from_degrees(m);
		let rem = a.rem(&m).unwrap();
		prop_assert!(rem.degree() < m.degree());
		prop_assert_eq!(rem.rem(&m).unwrap(), rem.clone());
		prop_assert!(m.divides(&a.add(&rem)).unwrap());
	}

	#[test]
	fn product_is_divisible(a in exponents(150, 20), b in nonzero_exponents(150, 20)) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		let (quotient, rem) = a.multiply(&b).div_rem(&b).unwrap();
		prop_assert!(rem.is_zero());
		prop_assert_eq!(quotient, a);
	}

	#[test]
	fn gcd_divides_both(a in nonzero_exponents(120, 20), b in exponents(120, 20)) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		let gcd = a.gcd(&b).unwrap();
		prop_assert!(gcd.divides(&a).unwrap());
		prop_assert!(gcd.divides(&b).unwrap());
		prop_assert_eq!(gcd, b.gcd(&a).unwrap());
	}

	#[test]
	fn common_factor_divides_gcd(
		a in nonzero_exponents(60, 10),
		b in nonzero_exponents(60, 10),
		c in nonzero_exponents(60, 10),
	) {
		let c = BitPolynomial::from_degrees(c);
		let lhs = BitPolynomial::from_degrees(a).multiply(&c);
		let rhs = BitPolynomial::from_degrees(b).multiply(&c);
		prop_assert!(c.divides(&lhs.gcd(&rhs).unwrap()).unwrap());
	}

	#[test]
	fn product_of_nonunits_is_reducible(
		a in nonzero_exponents(30, 10),
		b in nonzero_exponents(30, 10),
	) {
		let a = BitPolynomial::from_degrees(a);
		let b = BitPolynomial::from_degrees(b);
		prop_assume!(a.degree() > Some(0) && b.degree() > Some(0));
		prop_assert!(a.multiply(&b).is_reducible().unwrap());
	}

	#[test]
	fn mod_pow_matches_repeated_multiplication(
		base in exponents(100, 20),
		m in nonzero_exponents(60, 15),
		exponent in any::<u8>(),
	) {
		let base = BitPolynomial::from_degrees(base);
		let m = BitPolynomial::from_degrees(m);
		prop_assert_eq!(
			base.mod_pow(&BigInt::from(exponent), &m).unwrap(),
			reference_pow(&base, exponent, &m)
		);
	}

	#[test]
	fn random_has_requested_degree(degree in 0usize..600, seed in any::<u64>()) {
		use rand::{rngs::StdRng, SeedableRng};

		let mut rng = StdRng::seed_from_u64(seed);
		prop_assert_eq!(BitPolynomial::random(degree, &mut rng).degrees()[0], degree);
		prop_assert_eq!(SetPolynomial::random(degree, &mut rng).degrees()[0], degree);
	}

	#[test]
	fn representations_agree(
		lhs in exponents(80, 30),
		rhs in exponents(80, 30),
		modulus in exponents(40, 15),
		exponent in -2i64..200,
	) {
		let case = Case {
			lhs: BitPolynomial::from_degrees(lhs),
			rhs: BitPolynomial::from_degrees(rhs),
			modulus: BitPolynomial::from_degrees(modulus),
			exponent: BigInt::from(exponent),
		};
		prop_assert_eq!(check_case(&case), Ok(()));
	}
}

#[test]
fn test_reference_scenarios() {
	let a = BitPolynomial::from_degrees([5, 3, 0]);
	let b = BitPolynomial::from_degrees([3, 1]);
	assert_eq!(a.add(&b).degrees(), vec![5, 1, 0]);

	let a = SetPolynomial::from_degrees([2, 0]);
	let b = SetPolynomial::from_degrees([1, 0]);
	assert_eq!(a.multiply(&b).degrees(), vec![3, 2, 1, 0]);

	let x4_plus_1 = BitPolynomial::from_degrees([4, 0]);
	let x2_plus_1 = BitPolynomial::from_degrees([2, 0]);
	assert!(x4_plus_1.rem(&x2_plus_1).unwrap().is_zero());
	assert!(!BitPolynomial::from_degrees([2, 1, 0]).is_reducible().unwrap());
	assert!(x2_plus_1.is_reducible().unwrap());
}

#[test]
fn test_polynomials_are_shareable_across_threads() {
	use rand::{rngs::StdRng, SeedableRng};
	use rayon::prelude::*;

	let mut rng = StdRng::seed_from_u64(11);
	let modulus = BitPolynomial::random(256, &mut rng);
	let operands = (0..16)
		.map(|_| BitPolynomial::random(512, &mut rng))
		.collect::<Vec<_>>();

	let parallel = operands
		.par_iter()
		.map(|poly| poly.mod_pow(&BigInt::from(17), &modulus).unwrap())
		.collect::<Vec<_>>();
	let sequential = operands
		.iter()
		.map(|poly| poly.mod_pow(&BigInt::from(17), &modulus).unwrap())
		.collect::<Vec<_>>();
	assert_eq!(parallel, sequential);
}
