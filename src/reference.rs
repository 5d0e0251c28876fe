//! Arbitrary precision model used by the tests, plus operand generators.
//!
//! Everything here goes through `num-bigint` and only touches `U256` through its limbs, so a bug in
//! the conversion layer cannot hide a bug in the arithmetic.

use crate::fixed_size::{NLIMBS, U256};
use crate::limb::Limb;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand::{Rng, rngs::StdRng};
use std::sync::Once;

pub fn init_logging() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		stderrlog::new().module("fixint256").verbosity(3_usize).init().ok();
	});
}

//--------------------------------------------------------------------------------------------------
// model

fn modulus() -> BigUint {
	BigUint::one() << U256::BITS
}

pub fn big(x: U256) -> BigUint {
	let digits: Vec<u32> = x.limbs.iter().flat_map(|&l| [l as u32, (l >> 32) as u32]).collect();
	BigUint::new(digits)
}

pub fn from_big(b: &BigUint) -> U256 {
	let b = b % modulus();
	let mut limbs = [0; NLIMBS];
	for (i, d) in b.to_u64_digits().into_iter().enumerate() {
		limbs[i] = d;
	}
	U256::from_limbs(limbs)
}

pub fn signed(x: U256) -> BigInt {
	let b = BigInt::from(big(x));
	if x.bit(U256::BITS - 1) { b - BigInt::from(modulus()) } else { b }
}

pub fn from_signed(b: &BigInt) -> U256 {
	let m = BigInt::from(modulus());
	let r = ((b % &m) + &m) % &m;
	from_big(r.magnitude())
}

pub fn add(x: U256, y: U256) -> U256 {
	from_big(&(big(x) + big(y)))
}

pub fn sub(x: U256, y: U256) -> U256 {
	from_big(&(big(x) + modulus() - big(y)))
}

pub fn mul(x: U256, y: U256) -> U256 {
	from_big(&(big(x) * big(y)))
}

pub fn exp(x: U256, e: U256) -> U256 {
	from_big(&big(x).modpow(&big(e), &modulus()))
}

pub fn div_rem(x: U256, d: U256) -> (U256, U256) {
	if d.is_zero() {
		return (U256::ZERO, U256::ZERO);
	}
	(from_big(&(big(x) / big(d))), from_big(&(big(x) % big(d))))
}

/// Quotient and remainder of a dividend of up to 8 limbs.
pub fn div_rem_wide(u: &[Limb], d: U256) -> ([Limb; 2 * NLIMBS], U256) {
	let digits: Vec<u32> = u.iter().flat_map(|&l| [l as u32, (l >> 32) as u32]).collect();
	let u = BigUint::new(digits);
	let q = u.clone() / big(d);
	let mut quot = [0; 2 * NLIMBS];
	for (i, d) in q.to_u64_digits().into_iter().enumerate() {
		quot[i] = d;
	}
	(quot, from_big(&(u % big(d))))
}

pub fn sdiv(x: U256, d: U256) -> U256 {
	if d.is_zero() {
		return U256::ZERO;
	}
	from_signed(&(signed(x) / signed(d)))
}

pub fn smod(x: U256, d: U256) -> U256 {
	if d.is_zero() {
		return U256::ZERO;
	}
	from_signed(&(signed(x) % signed(d)))
}

pub fn add_mod(x: U256, y: U256, m: U256) -> U256 {
	if m.is_zero() {
		return U256::ZERO;
	}
	from_big(&((big(x) + big(y)) % big(m)))
}

pub fn mul_mod(x: U256, y: U256, m: U256) -> U256 {
	if m.is_zero() {
		return U256::ZERO;
	}
	from_big(&((big(x) * big(y)) % big(m)))
}

pub fn shl(x: U256, n: u32) -> U256 {
	from_big(&(big(x) << n))
}

pub fn shr(x: U256, n: u32) -> U256 {
	from_big(&(big(x) >> n))
}

/// Floor division by 2**n on the signed value, which is what an arithmetic shift does.
pub fn sar(x: U256, n: u32) -> U256 {
	let s = signed(x);
	let q = if s.sign() == Sign::Minus {
		// -((-s - 1) >> n) - 1 rounds toward negative infinity
		-((-s - 1_i32) >> n) - 1_i32
	} else {
		s >> n
	};
	from_signed(&q)
}

fn limbwise(x: U256, y: U256, f: impl Fn(Limb, Limb) -> Limb) -> U256 {
	let mut r = [0; NLIMBS];
	for i in 0..NLIMBS {
		r[i] = f(x.limbs[i], y.limbs[i]);
	}
	U256::from_limbs(r)
}

pub fn and(x: U256, y: U256) -> U256 {
	limbwise(x, y, |a, b| a & b)
}

pub fn or(x: U256, y: U256) -> U256 {
	limbwise(x, y, |a, b| a | b)
}

pub fn xor(x: U256, y: U256) -> U256 {
	limbwise(x, y, |a, b| a ^ b)
}

pub fn not(x: U256) -> U256 {
	from_big(&(modulus() - 1_u32 - big(x)))
}

pub fn sqrt(x: U256) -> U256 {
	from_big(&big(x).sqrt())
}

pub fn is_zero(x: U256) -> bool {
	big(x).is_zero()
}

//--------------------------------------------------------------------------------------------------
// operands

/// Values around limb boundaries, powers of two and the signed extremes.
pub fn edge_values() -> Vec<U256> {
	let max = Limb::MAX;
	let top = 1 << 63;
	let mut v = vec![
		U256::ZERO,
		U256::ONE,
		U256::from_u64(2),
		U256::from_u64(3),
		U256::from_u64(10),
		U256::from_u64(max),
		U256::from_u64(max - 1),
		U256::from_u64(top),
		U256::from_limbs([0, 1, 0, 0]),
		U256::from_limbs([max, max, 0, 0]),
		U256::from_limbs([0, 0, 1, 0]),
		U256::from_limbs([max, max, max, 0]),
		U256::from_limbs([0, 0, 0, 1]),
		U256::from_limbs([0, top, 0, 0]),
		U256::from_limbs([0, 0, top, 0]),
		U256::from_limbs([max, 0, max, 0]),
		U256::from_limbs([0, max, 0, max]),
		U256::from_limbs([1, 0, 0, top]),
		U256::from_limbs([max, max, max, max >> 1]),
		U256::from_limbs([0, 0, 0, top]),
		U256::from_limbs([max - 1, max, max, max]),
		U256::from_limbs([max; 4]),
		U256::from_limbs([0x8000_0000_0000_0001, 0, 0x8000_0000_0000_0001, 0]),
		U256::from_limbs([0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 0x0f0f_0f0f_0f0f_0f0f, 0x00ff_00ff_00ff_00ff]),
	];
	v.dedup();
	v
}

pub fn random(rng: &mut StdRng) -> U256 {
	U256::from_limbs([rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()])
}

/// Random value of a random number of limbs, biased toward shapes that stress the division engine:
/// saturated top limbs, a lone top bit and powers of two.
pub fn random_sized(rng: &mut StdRng) -> U256 {
	let len = rng.gen_range(0..=NLIMBS);
	let mut limbs = [0; NLIMBS];
	for l in limbs.iter_mut().take(len) {
		*l = rng.r#gen();
	}
	if len > 0 {
		match rng.gen_range(0..8) {
			0 => limbs[len - 1] = Limb::MAX,
			1 => limbs[len - 1] |= 1 << 63,
			2 => {
				limbs = [0; NLIMBS];
				limbs[len - 1] = 1 << rng.gen_range(0..64);
			},
			3 => limbs[len - 1] = rng.gen_range(1..16),
			_ => {},
		}
	}
	U256::from_limbs(limbs)
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_model() {
		assert_eq!(from_big(&big(U256::MAX)), U256::MAX);
		assert_eq!(signed(U256::MAX), BigInt::from(-1));
		assert_eq!(from_signed(&BigInt::from(-1)), U256::MAX);
		assert_eq!(sar(U256::MAX.sub_u64(2), 1), U256::MAX.sub_u64(1));
		assert_eq!(sub(U256::ZERO, U256::ONE), U256::MAX);
		assert!(is_zero(add(U256::MAX, U256::ONE)));
	}
}
