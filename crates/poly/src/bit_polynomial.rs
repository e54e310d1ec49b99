// Copyright 2024-2025 Irreducible Inc.

use std::{array, fmt, iter};

use gf2poly_utils::bail;
use rand::RngCore;
use tracing::instrument;

use crate::{polynomial::impl_polynomial_ops, BinaryPolynomial, Error, SetPolynomial};

type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

/// Polynomial over GF(2) packed into 64-bit words.
///
/// Bit `i % 64` of word `i / 64` is the coefficient of $x^i$. Trailing zero words are always
/// trimmed, so the zero polynomial has no words and the last word of any other polynomial
/// holds its leading term.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitPolynomial {
	words: Vec<Word>,
}

impl BitPolynomial {
	/// Creates a polynomial from little-endian coefficient words.
	pub fn from_words(words: Vec<Word>) -> Self {
		Self::trimmed(words)
	}

	pub fn words(&self) -> &[Word] {
		&self.words
	}

	/// Number of non-zero coefficients.
	pub fn weight(&self) -> usize {
		self.words.iter().map(|word| word.count_ones() as usize).sum()
	}

	pub fn coefficient(&self, exponent: usize) -> bool {
		bit(&self.words, exponent)
	}

	/// Multiplies by $x^k$.
	pub fn shl(&self, shift: usize) -> Self {
		if self.words.is_empty() {
			return Self::zero();
		}
		let mut words = vec![0; shift / WORD_BITS];
		words.extend(shifted_words(&self.words, shift % WORD_BITS));
		Self::trimmed(words)
	}

	fn trimmed(mut words: Vec<Word>) -> Self {
		while words.last() == Some(&0) {
			words.pop();
		}
		Self { words }
	}

	/// Exponents of the set bits in ascending order.
	fn ascending_degrees(&self) -> impl Iterator<Item = usize> + '_ {
		self.words.iter().enumerate().flat_map(|(index, &word)| {
			let mut word = word;
			iter::from_fn(move || {
				(word != 0).then(|| {
					let bit = word.trailing_zeros() as usize;
					word &= word - 1;
					index * WORD_BITS + bit
				})
			})
		})
	}

	/// Exponents of the set bits in descending order.
	fn descending_degrees(&self) -> impl Iterator<Item = usize> + '_ {
		self.words.iter().enumerate().rev().flat_map(|(index, &word)| {
			let mut word = word;
			iter::from_fn(move || {
				(word != 0).then(|| {
					let bit = (WORD_BITS - 1) - word.leading_zeros() as usize;
					word ^= 1 << bit;
					index * WORD_BITS + bit
				})
			})
		})
	}
}

impl BinaryPolynomial for BitPolynomial {
	fn zero() -> Self {
		Self { words: Vec::new() }
	}

	fn monomial(exponent: usize) -> Self {
		let mut words = vec![0; exponent / WORD_BITS + 1];
		words[exponent / WORD_BITS] = 1 << (exponent % WORD_BITS);
		Self { words }
	}

	fn from_degrees<I: IntoIterator<Item = usize>>(degrees: I) -> Self {
		let mut words = Vec::new();
		for exponent in degrees {
			let index = exponent / WORD_BITS;
			if index >= words.len() {
				words.resize(index + 1, 0);
			}
			words[index] ^= 1 << (exponent % WORD_BITS);
		}
		Self::trimmed(words)
	}

	fn random(degree: usize, mut rng: impl RngCore) -> Self {
		let mut words = iter::repeat_with(|| rng.next_u64())
			.take(degree / WORD_BITS + 1)
			.collect::<Vec<_>>();
		let top_bit = degree % WORD_BITS;
		if let Some(top) = words.last_mut() {
			*top &= Word::MAX >> (WORD_BITS - 1 - top_bit);
			*top |= 1 << top_bit;
		}
		Self { words }
	}

	fn degrees(&self) -> Vec<usize> {
		self.descending_degrees().collect()
	}

	fn degree(&self) -> Option<usize> {
		let top = self.words.last()?;
		Some(self.words.len() * WORD_BITS - 1 - top.leading_zeros() as usize)
	}

	fn is_zero(&self) -> bool {
		self.words.is_empty()
	}

	fn add(&self, other: &Self) -> Self {
		let (long, short) = longer_first(&self.words, &other.words);
		let mut words = long.to_vec();
		for (word, rhs) in words.iter_mut().zip(short) {
			*word ^= rhs;
		}
		Self::trimmed(words)
	}

	/// Shift-and-XOR product: for every set bit of the sparser operand the other one is XORed
	/// into the accumulator at that offset. The 64 possible sub-word shifts of the denser
	/// operand are computed once, on first use.
	#[instrument("BitPolynomial::multiply", skip_all, level = "trace")]
	fn multiply(&self, other: &Self) -> Self {
		if self.is_zero() || other.is_zero() {
			return Self::zero();
		}
		let (dense, sparse) = if self.weight() >= other.weight() {
			(self, other)
		} else {
			(other, self)
		};

		let mut shifts: [Option<Vec<Word>>; WORD_BITS] = array::from_fn(|_| None);
		let mut acc = vec![0; dense.words.len() + sparse.words.len()];
		for exponent in sparse.ascending_degrees() {
			let shifted = shifts[exponent % WORD_BITS]
				.get_or_insert_with(|| shifted_words(&dense.words, exponent % WORD_BITS));
			xor_into(&mut acc[exponent / WORD_BITS..], shifted);
		}
		Self::trimmed(acc)
	}

	/// Squaring is linear over GF(2): the bits of the operand are spread to even positions.
	fn square(&self) -> Self {
		let words = self
			.words
			.iter()
			.flat_map(|&word| [spread_bits(word as u32), spread_bits((word >> 32) as u32)])
			.collect();
		Self::trimmed(words)
	}

	#[instrument("BitPolynomial::div_rem", skip_all, level = "trace")]
	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
		let Some(divisor_degree) = divisor.degree() else {
			bail!(Error::DivisionByZero);
		};

		let Some(degree) = self.degree().filter(|&degree| degree >= divisor_degree) else {
			return Ok((Self::zero(), self.clone()));
		};

		let mut rem = self.words.clone();
		let mut quotient = vec![0; (degree - divisor_degree) / WORD_BITS + 1];
		let mut shifts: [Option<Vec<Word>>; WORD_BITS] = array::from_fn(|_| None);
		for exponent in (divisor_degree..=degree).rev() {
			if !bit(&rem, exponent) {
				continue;
			}
			let shift = exponent - divisor_degree;
			quotient[shift / WORD_BITS] |= 1 << (shift % WORD_BITS);
			let shifted = shifts[shift % WORD_BITS]
				.get_or_insert_with(|| shifted_words(&divisor.words, shift % WORD_BITS));
			xor_into(&mut rem[shift / WORD_BITS..], shifted);
		}
		Ok((Self::trimmed(quotient), Self::trimmed(rem)))
	}

	fn and(&self, other: &Self) -> Self {
		let words = self
			.words
			.iter()
			.zip(&other.words)
			.map(|(lhs, rhs)| lhs & rhs)
			.collect();
		Self::trimmed(words)
	}

	fn or(&self, other: &Self) -> Self {
		let (long, short) = longer_first(&self.words, &other.words);
		let mut words = long.to_vec();
		for (word, rhs) in words.iter_mut().zip(short) {
			*word |= rhs;
		}
		Self { words }
	}
}

impl_polynomial_ops!(BitPolynomial);

impl fmt::Debug for BitPolynomial {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("BitPolynomial").field(&self.degrees()).finish()
	}
}

impl From<&SetPolynomial> for BitPolynomial {
	fn from(value: &SetPolynomial) -> Self {
		Self::from_degrees(value.degrees())
	}
}

fn bit(words: &[Word], exponent: usize) -> bool {
	words
		.get(exponent / WORD_BITS)
		.is_some_and(|word| (word >> (exponent % WORD_BITS)) & 1 == 1)
}

fn longer_first<'a>(a: &'a [Word], b: &'a [Word]) -> (&'a [Word], &'a [Word]) {
	if a.len() >= b.len() {
		(a, b)
	} else {
		(b, a)
	}
}

/// Shifts the words left by `shift < 64` bits, the result is one word longer.
fn shifted_words(words: &[Word], shift: usize) -> Vec<Word> {
	debug_assert!(shift < WORD_BITS);
	if shift == 0 {
		return words.iter().copied().chain(iter::once(0)).collect();
	}
	let mut carry = 0;
	let mut shifted = Vec::with_capacity(words.len() + 1);
	for &word in words {
		shifted.push((word << shift) | carry);
		carry = word >> (WORD_BITS - shift);
	}
	shifted.push(carry);
	shifted
}

/// XORs `src` into the prefix of `dst`. Words of `src` beyond the end of `dst` must be zero.
fn xor_into(dst: &mut [Word], src: &[Word]) {
	debug_assert!(src.iter().skip(dst.len()).all(|&word| word == 0));
	for (dst, src) in dst.iter_mut().zip(src) {
		*dst ^= src;
	}
}

/// Moves bit `i` of the input to bit `2i` of the output.
fn spread_bits(value: u32) -> Word {
	let mut x = value as Word;
	x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
	x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
	x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
	x = (x | (x << 2)) & 0x3333_3333_3333_3333;
	x = (x | (x << 1)) & 0x5555_5555_5555_5555;
	x
}
