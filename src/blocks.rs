//! Carry chains over limb slices.
//!
//! Limbs are stored least significant first. Unless stated otherwise, the output slice must be at
//! least as long as the input and only the first `a.len()` limbs of it are written.

use crate::limb::{self, LIMB_BITS, Limb};

//--------------------------------------------------------------------------------------------------
// len

/// Number of limbs up to and including the highest non-zero limb.
#[inline]
pub fn significant_len(a: &[Limb]) -> usize {
	let mut n = a.len();
	while n > 0 && a[n - 1] == 0 {
		n -= 1;
	}
	n
}

//--------------------------------------------------------------------------------------------------
// add

/// In place: r[0..<a.len()] += a, returns the carry out of the top written limb.
#[inline]
pub fn add_n_(r: &mut [Limb], a: &[Limb]) -> bool {
	debug_assert!(r.len() >= a.len());
	let mut carry = false;
	for (r, &a) in r.iter_mut().zip(a) {
		(*r, carry) = limb::addc(*r, a, carry);
	}
	carry
}

//--------------------------------------------------------------------------------------------------
// mul

/// r[0..<a.len()] += a * b, returns the high limb.
#[inline]
pub fn addmul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	debug_assert!(r.len() >= a.len());
	let mut carry = 0;
	for (r, &a) in r.iter_mut().zip(a) {
		(*r, carry) = limb::mul(a, b, carry, *r);
	}
	carry
}

/// r[0..<a.len()] -= a * b, returns the amount that still has to be subtracted from the next limb.
#[inline]
pub fn submul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	debug_assert!(r.len() >= a.len());
	let mut borrow: Limb = 0;
	for (r, &a) in r.iter_mut().zip(a) {
		let (s, underflow1) = r.overflowing_sub(borrow);
		let (ph, pl) = limb::widening_mul(a, b);
		let (t, underflow2) = s.overflowing_sub(pl);
		*r = t;
		// both flags are never set together when ph == MAX - 1
		borrow = ph + underflow1 as Limb + underflow2 as Limb;
	}
	borrow
}

//--------------------------------------------------------------------------------------------------
// shift

/// r[0..<a.len()] = a << shift, returns the bits shifted out of the top limb.
///
/// Preconditions:
/// - shift < 64
#[inline]
pub fn shl_small(r: &mut [Limb], a: &[Limb], shift: u32) -> Limb {
	debug_assert!(shift < LIMB_BITS);
	debug_assert!(r.len() >= a.len());
	if shift == 0 {
		r[..a.len()].copy_from_slice(a);
		return 0;
	}
	let mut out = 0;
	for (r, &a) in r.iter_mut().zip(a) {
		*r = (a << shift) | out;
		out = a >> (LIMB_BITS - shift);
	}
	out
}

/// r[0..<a.len()] = a >> shift
///
/// Preconditions:
/// - shift < 64
#[inline]
pub fn shr_small(r: &mut [Limb], a: &[Limb], shift: u32) {
	debug_assert!(shift < LIMB_BITS);
	debug_assert!(r.len() >= a.len());
	if shift == 0 {
		r[..a.len()].copy_from_slice(a);
		return;
	}
	let n = a.len();
	for i in 0..n {
		let hi = if i + 1 < n { a[i + 1] << (LIMB_BITS - shift) } else { 0 };
		r[i] = (a[i] >> shift) | hi;
	}
}

//--------------------------------------------------------------------------------------------------
