// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when a polynomial operation is called outside of its domain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("polynomial degree must be non-negative, got {degree}")]
	NegativeDegree { degree: i64 },
	#[error("polynomial degree {degree} does not fit the address space")]
	DegreeTooLarge { degree: i64 },
	#[error("exponent must be non-negative")]
	NegativeExponent,
	#[error("division by the zero polynomial")]
	DivisionByZero,
	#[error("the gcd of two zero polynomials is undefined")]
	GcdOfZeros,
	/// Thrown when irreducibility is queried for the zero or the unit polynomial, neither of
	/// which is a prime element of GF(2)[x].
	#[error("irreducibility is undefined for the zero and unit polynomials")]
	NotIrreducibilityCandidate,
}

/// Coarse classification of [`Error`], shared by both polynomial representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	InvalidArgument,
	DivisionByZero,
	InvalidOperand,
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::NegativeDegree { .. } | Self::DegreeTooLarge { .. } | Self::NegativeExponent => {
				ErrorKind::InvalidArgument
			}
			Self::DivisionByZero => ErrorKind::DivisionByZero,
			Self::GcdOfZeros | Self::NotIrreducibilityCandidate => ErrorKind::InvalidOperand,
		}
	}
}
