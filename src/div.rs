//! Unsigned and signed division.
//!
//! Division by zero is not an error here: quotient and remainder are both zero.

use crate::blocks;
use crate::fixed_size::{NLIMBS, U256};
use crate::limb::{self, Invert2By1, Limb};
use std::cmp::Ordering;

/// Longest dividend accepted by `udivrem`, the full product of two 256-bit values.
pub const MAX_DIVIDEND_LIMBS: usize = 2 * NLIMBS;

/// Knuth's Algorithm D for normalized operands.
///
/// On return, `u[0..<d.len()]` holds the normalized remainder and `quot[0..<u.len() - d.len()]` the
/// quotient.
///
/// Preconditions:
/// - d.len() >= 2
/// - the most significant bit of `d` is set
/// - u.len() > d.len()
/// - the top limb of `u` is below the top limb of `d`
fn knuth(quot: &mut [Limb], u: &mut [Limb], d: &[Limb]) {
	let d_len = d.len();
	debug_assert!(d_len >= 2 && u.len() > d_len);

	let dh = d[d_len - 1];
	let dl = d[d_len - 2];
	let inv = Invert2By1::new(dh);

	for j in (0..u.len() - d_len).rev() {
		let u2 = u[j + d_len];
		let u1 = u[j + d_len - 1];
		let u0 = u[j + d_len - 2];

		// estimate from the top two limbs; at most 2 too big
		let mut qhat = if u2 >= dh {
			Limb::MAX
		} else {
			let (qhat, rhat) = inv.div_rem(u2, u1);
			let (ph, pl) = limb::widening_mul(qhat, dl);
			if ph > rhat || (ph == rhat && pl > u0) { qhat - 1 } else { qhat }
		};

		let borrow = blocks::submul_1(&mut u[j..j + d_len], d, qhat);
		u[j + d_len] = u2.wrapping_sub(borrow);

		if u2 < borrow {
			// rare: the estimate was still one too big
			qhat -= 1;
			let carry = blocks::add_n_(&mut u[j..j + d_len], d);
			u[j + d_len] = u[j + d_len].wrapping_add(carry as Limb);
		}

		quot[j] = qhat;
	}
}

/// Divides the little-endian number `u` by `d`. Returns the remainder and writes the quotient
/// into `quot`.
///
/// When `u` is shorter than `d`, the remainder is `u` and `quot` is left untouched.
///
/// Preconditions:
/// - d != 0
/// - u.len() <= MAX_DIVIDEND_LIMBS
/// - quot.len() >= u.len() and `quot` is zeroed
pub fn udivrem(quot: &mut [Limb], u: &[Limb], d: &U256) -> U256 {
	debug_assert!(!d.is_zero());
	debug_assert!(u.len() <= MAX_DIVIDEND_LIMBS);

	let d_len = blocks::significant_len(&d.limbs);
	let shift = d.limbs[d_len - 1].leading_zeros();

	let mut dn = [0; NLIMBS];
	blocks::shl_small(&mut dn[..d_len], &d.limbs[..d_len], shift);
	let dn = &dn[..d_len];

	let u_len = blocks::significant_len(u);
	if u_len < d_len {
		let mut rem = U256::ZERO;
		rem.limbs[..u_len].copy_from_slice(&u[..u_len]);
		return rem;
	}

	// one extra limb for the bits shifted out of the top
	let mut un = [0; MAX_DIVIDEND_LIMBS + 1];
	un[u_len] = blocks::shl_small(&mut un[..u_len], &u[..u_len], shift);
	let un = &mut un[..u_len + 1];

	if d_len == 1 {
		let inv = Invert2By1::new(dn[0]);
		let mut rem = un[u_len];
		for j in (0..u_len).rev() {
			(quot[j], rem) = inv.div_rem(rem, un[j]);
		}
		return U256::from_u64(rem >> shift);
	}

	knuth(quot, un, dn);

	let mut rem = U256::ZERO;
	blocks::shr_small(&mut rem.limbs[..d_len], &un[..d_len], shift);
	rem
}

impl U256 {
	/// Returns `(self / d, self % d)`. Both are zero when `d` is zero.
	pub fn div_rem(self, d: Self) -> (Self, Self) {
		if d.is_zero() {
			return (Self::ZERO, Self::ZERO);
		}
		match self.cmp(d) {
			Ordering::Less => return (Self::ZERO, self),
			Ordering::Equal => return (Self::ONE, Self::ZERO),
			Ordering::Greater => {},
		}
		if self.is_u64() {
			// d < self, so d fits as well
			let (x, y) = (self.limbs[0], d.limbs[0]);
			return (Self::from_u64(x / y), Self::from_u64(x % y));
		}

		let mut quot = [0; NLIMBS];
		let rem = udivrem(&mut quot, &self.limbs, &d);
		(Self::from_limbs(quot), rem)
	}

	/// self / d, or zero when `d` is zero.
	#[inline]
	pub fn div(self, d: Self) -> Self {
		self.div_rem(d).0
	}

	/// self % d, or zero when `d` is zero.
	#[inline]
	pub fn rem(self, d: Self) -> Self {
		self.div_rem(d).1
	}

	/// Signed division rounding toward zero. Division by zero gives zero and
	/// `SIGNED_MIN / -1` wraps to `SIGNED_MIN`.
	pub fn sdiv(self, d: Self) -> Self {
		let q = self.abs().div(d.abs());
		if self.is_negative() != d.is_negative() { q.neg() } else { q }
	}

	/// Signed remainder. The result takes the sign of the dividend. Division by zero gives zero.
	pub fn smod(self, d: Self) -> Self {
		let r = self.abs().rem(d.abs());
		if self.is_negative() { r.neg() } else { r }
	}
}

//--------------------------------------------------------------------------------------------------
