// Copyright 2024 Irreducible Inc.

//! Workload parameters shared by the benchmarks and the differential checks.
//!
//! The defaults reproduce the reference measurement setup: two random operands
//! of degree 512, a random modulus of degree 256 and the exponent 17.

use rand::{rngs::StdRng, SeedableRng};

use crate::env::{u64_env_var, usize_env_var, EnvError};

pub const DEGREE_VAR: &str = "GF2POLY_DEGREE";
pub const MODULUS_DEGREE_VAR: &str = "GF2POLY_MODULUS_DEGREE";
pub const EXPONENT_VAR: &str = "GF2POLY_EXPONENT";
pub const SEED_VAR: &str = "GF2POLY_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadConfig {
	/// Degree of the random operands.
	pub degree: usize,
	/// Degree of the random modulus.
	pub modulus_degree: usize,
	/// Exponent used by modular exponentiation.
	pub exponent: u64,
	/// Fixed RNG seed, `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
	fn default() -> Self {
		Self {
			degree: 512,
			modulus_degree: 256,
			exponent: 17,
			seed: None,
		}
	}
}

impl WorkloadConfig {
	/// Reads the workload from `GF2POLY_*` environment variables, falling back to the
	/// defaults for unset ones.
	pub fn from_env() -> Result<Self, EnvError> {
		let defaults = Self::default();
		Ok(Self {
			degree: usize_env_var(DEGREE_VAR)?.unwrap_or(defaults.degree),
			modulus_degree: usize_env_var(MODULUS_DEGREE_VAR)?.unwrap_or(defaults.modulus_degree),
			exponent: u64_env_var(EXPONENT_VAR)?.unwrap_or(defaults.exponent),
			seed: u64_env_var(SEED_VAR)?,
		})
	}

	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		}
	}
}
