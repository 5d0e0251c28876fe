//! Modular addition and multiplication.
//!
//! `add_mod` and `mul_mod` reduce through the division engine. For a modulus that is used
//! repeatedly, `Reciprocal` precomputes what is needed to reduce a 512-bit product with
//! multiplications only, see `mul_mod_with_reciprocal`.

use crate::blocks;
use crate::div::{MAX_DIVIDEND_LIMBS, udivrem};
use crate::fixed_size::{NLIMBS, U256};
use crate::limb::Limb;
use crate::reciprocal_cache::ReciprocalCache;

/// NIST P-256 field prime, 2**256 - 2**224 + 2**192 + 2**96 - 1.
pub const P256_MODULUS: U256 =
	U256::from_limbs([0xffff_ffff_ffff_ffff, 0x0000_0000_ffff_ffff, 0x0000_0000_0000_0000, 0xffff_ffff_0000_0001]);

/// Precomputed reciprocal of `P256_MODULUS`.
pub const P256_RECIPROCAL: Reciprocal =
	Reciprocal { words: [0x0000_0000_0000_0003, 0xffff_fffe_ffff_ffff, 0xffff_fffe_ffff_fffe, 0x0000_0000_ffff_ffff, 0] };

impl U256 {
	/// (self + y) % m, computed without losing the carry out of the 256-bit sum. Zero when `m` is
	/// zero.
	pub fn add_mod(self, y: Self, m: Self) -> Self {
		if m.is_zero() {
			return Self::ZERO;
		}
		let (sum, overflow) = self.add_overflow(y);
		if !overflow {
			return sum.rem(m);
		}

		let l = &sum.limbs;
		let u = [l[0], l[1], l[2], l[3], 1];
		let mut quot = [0; NLIMBS + 1];
		udivrem(&mut quot, &u, &m)
	}

	/// (self * y) % m over the full 512-bit product. Zero when `m` is zero.
	pub fn mul_mod(self, y: Self, m: Self) -> Self {
		if m.is_zero() {
			return Self::ZERO;
		}
		let p = self.mul_wide(y);
		if p[NLIMBS..].iter().all(|&l| l == 0) {
			return Self::from_limbs([p[0], p[1], p[2], p[3]]).rem(m);
		}

		let mut quot = [0; MAX_DIVIDEND_LIMBS];
		udivrem(&mut quot, &p, &m)
	}

	/// (self * y) % m using a precomputed reciprocal of `m`.
	///
	/// Preconditions:
	/// - `recip` was computed for `m`
	pub fn mul_mod_with_reciprocal(self, y: Self, m: Self, recip: &Reciprocal) -> Self {
		if m.is_zero() {
			return Self::ZERO;
		}
		debug_assert!(recip.shift() == m.leading_zeros());

		let s = recip.shift();
		let n = m.shl(s);
		let v = recip.value();

		// the product shifted left by s, as three 256-bit digits
		let p = self.mul_wide(y);
		let mut u = [0; 3 * NLIMBS];
		u[2 * NLIMBS] = blocks::shl_small(&mut u[..2 * NLIMBS], &p, s % Limb::BITS);
		let u = shift_limbs_up(u, (s / Limb::BITS) as usize);
		let u0 = digit(&u, 0);
		let u1 = digit(&u, 1);
		let u2 = digit(&u, 2);

		let r = rem_2by1(u2, u1, n, v);
		let r = rem_2by1(r, u0, n, v);
		r.shr(s)
	}

	/// (self * y) % m, looking up or computing the reciprocal of `m` in `cache`.
	pub fn mul_mod_cached(self, y: Self, m: Self, cache: &ReciprocalCache) -> Self {
		if m.is_zero() {
			return Self::ZERO;
		}
		let recip = cache.get_or_insert(m);
		self.mul_mod_with_reciprocal(y, m, &recip)
	}
}

#[inline]
fn digit(u: &[Limb; 3 * NLIMBS], i: usize) -> U256 {
	let mut l = [0; NLIMBS];
	l.copy_from_slice(&u[i * NLIMBS..(i + 1) * NLIMBS]);
	U256::from_limbs(l)
}

fn shift_limbs_up(u: [Limb; 3 * NLIMBS], words: usize) -> [Limb; 3 * NLIMBS] {
	if words == 0 {
		return u;
	}
	let mut r = [0; 3 * NLIMBS];
	r[words..].copy_from_slice(&u[..3 * NLIMBS - words]);
	r
}

/// Remainder of the 512-bit value <uh, ul> divided by `n`, the 256-bit version of
/// `Invert2By1::div_rem`.
///
/// Preconditions:
/// - the most significant bit of `n` is set
/// - uh < n
/// - v == floor((2**512 - 1) / n) - 2**256
fn rem_2by1(uh: U256, ul: U256, n: U256, v: U256) -> U256 {
	let p = v.mul_wide(uh);
	let (ql, carry) = U256::from_limbs([p[0], p[1], p[2], p[3]]).add_overflow(ul);
	let qh = U256::from_limbs([p[4], p[5], p[6], p[7]]).addc(uh, carry).0.add(U256::ONE);

	let mut r = ul.sub(qh.mul(n));
	if r.gt(ql) {
		r = r.add(n);
	}
	if !r.lt(n) {
		r = r.sub(n);
	}
	r
}

//--------------------------------------------------------------------------------------------------

/// Reciprocal of a modulus: four limbs of `floor((2**512 - 1) / n) - 2**256`, where `n` is the
/// modulus shifted left until its top bit is set, followed by the shift amount.
///
/// The reciprocal of zero is all zeros and is never used for a reduction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Hash)]
pub struct Reciprocal {
	pub words: [Limb; NLIMBS + 1],
}

impl Reciprocal {
	/// The value is the exact quotient of one 512-by-256-bit division, with no Newton refinement.
	pub fn new(m: U256) -> Self {
		if m.is_zero() {
			return Self::default();
		}
		let s = m.leading_zeros();
		let n = m.shl(s);

		// 2**512 - 1 - n * 2**256 divided by n gives the reciprocal without the implicit 2**256
		let nn = n.not_scalar().limbs;
		let u = [Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX, nn[0], nn[1], nn[2], nn[3]];
		let mut quot = [0; MAX_DIVIDEND_LIMBS];
		udivrem(&mut quot, &u, &n);
		debug_assert!(quot[NLIMBS..].iter().all(|&q| q == 0));

		Self { words: [quot[0], quot[1], quot[2], quot[3], s as Limb] }
	}

	/// The reciprocal value without the implicit leading bit.
	#[inline]
	pub const fn value(&self) -> U256 {
		U256::from_limbs([self.words[0], self.words[1], self.words[2], self.words[3]])
	}

	/// Number of leading zero bits of the modulus.
	#[inline]
	pub const fn shift(&self) -> u32 {
		self.words[NLIMBS] as u32
	}
}

//--------------------------------------------------------------------------------------------------
