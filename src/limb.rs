pub type Limb = u64;
pub type Double = u128;

pub const LIMB_BITS: u32 = Limb::BITS;

const _OK: () = assert!(std::mem::size_of::<Double>() >= 2 * std::mem::size_of::<Limb>());

/// Returns:
///     (value, carry)
/// Where:
///     value = (a + b + carry) % 2**64
///     carry = (a + b + carry) > MAX
#[inline]
pub const fn addc(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
	let (sum, overflow1) = a.overflowing_add(b);
	let (sum, overflow2) = sum.overflowing_add(carry as Limb);
	(sum, overflow1 | overflow2)
}

/// Returns:
///     (value, borrow)
/// Where:
///     value = (a - b - borrow) % 2**64
///     borrow = (a - b - borrow) < 0
#[inline]
pub const fn subb(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
	let (diff, borrow1) = a.overflowing_sub(b);
	let (diff, borrow2) = diff.overflowing_sub(borrow as Limb);
	(diff, borrow1 | borrow2)
}

/// Returns:
///     (low, high)
/// Where:
///     big_value = a * b + c + d
///     low = big_value % 2**64
///     high = big_value / 2**64
///
/// The sum never overflows 128 bits: (2**64 - 1)**2 + 2 * (2**64 - 1) == 2**128 - 1.
#[inline]
pub const fn mul(a: Limb, b: Limb, c: Limb, d: Limb) -> (Limb, Limb) {
	let t = (a as Double) * (b as Double) + (c as Double) + (d as Double);
	(t as Limb, (t >> LIMB_BITS) as Limb)
}

/// Full product of two limbs as (high, low).
#[inline]
pub const fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
	let t = (a as Double) * (b as Double);
	((t >> LIMB_BITS) as Limb, t as Limb)
}

/// Seeds for the reciprocal: `0x7fd00 / (256 + i)` for the top 9 bits of a normalized divisor.
const RECIPROCAL_TABLE: [u16; 256] = {
	let mut table = [0_u16; 256];
	let mut i = 0;
	while i < 256 {
		table[i] = (0x7fd00 / (0x100 | i)) as u16;
		i += 1;
	}
	table
};

/// Computes `floor((2**128 - 1) / d) - 2**64`.
///
/// Preconditions:
///     the most significant bit of `d` is set
///
/// The table lookup gives about 11 correct bits. Three Newton refinement steps follow, each roughly
/// doubling the precision, and a final adjustment makes the result exact. No hardware division is
/// used.
pub const fn reciprocal_2by1(d: Limb) -> Limb {
	debug_assert!(d >> 63 == 1);

	let d9 = d >> 55;
	let v0 = RECIPROCAL_TABLE[(d9 - 256) as usize] as u32;

	let d40 = (d >> 24) + 1;
	let v1 = (v0 << 11).wrapping_sub((((v0 * v0) as u64 * d40) >> 40) as u32).wrapping_sub(1) as u64;

	let v2 = (v1 << 13)
		.wrapping_add(v1.wrapping_mul(0x1000_0000_0000_0000_u64.wrapping_sub(v1.wrapping_mul(d40))) >> 47);

	let d0 = d & 1;
	let d63 = (d >> 1) + d0; // ceil(d / 2)
	let e = ((v2 >> 1) & d0.wrapping_neg()).wrapping_sub(v2.wrapping_mul(d63));
	let (p1h, _) = widening_mul(v2, e);
	let v3 = (p1h >> 1).wrapping_add(v2 << 31);

	let (p2h, p2l) = widening_mul(v3, d);
	let (_, carry) = p2l.overflowing_add(d);
	let p2h = p2h.wrapping_add(carry as Limb);

	v3.wrapping_sub(p2h).wrapping_sub(d)
}

/// A normalized divisor together with its reciprocal.
///
/// Division of a two-limb value by the divisor is done by multiplying with the reciprocal and
/// correcting the estimate at most twice ("Improved division by invariant integers", Möller and
/// Granlund, Algorithm 4).
#[derive(Clone, Copy, Default, PartialEq, Debug, Eq)]
pub struct Invert2By1 {
	divisor: Limb,
	reciprocal: Limb,
}

impl Invert2By1 {
	/// Preconditions:
	///     the most significant bit of `divisor` is set
	#[inline]
	pub const fn new(divisor: Limb) -> Self {
		Self { divisor, reciprocal: reciprocal_2by1(divisor) }
	}

	#[inline]
	pub const fn divisor(self) -> Limb {
		self.divisor
	}

	#[inline]
	pub const fn reciprocal(self) -> Limb {
		self.reciprocal
	}

	/// Calculates:
	///
	/// ```text
	/// (<uh, ul> / self.divisor, <uh, ul> % self.divisor)
	/// ```
	///
	/// Preconditions:
	///     uh < self.divisor
	#[inline]
	pub const fn div_rem(self, uh: Limb, ul: Limb) -> (Limb, Limb) {
		let d = self.divisor;
		debug_assert!(uh < d);

		let (qh, ql) = widening_mul(self.reciprocal, uh);
		let (ql, carry) = ql.overflowing_add(ul);
		let qh = qh.wrapping_add(uh).wrapping_add(carry as Limb).wrapping_add(1);

		let mut q = qh;
		let mut r = ul.wrapping_sub(qh.wrapping_mul(d));

		if r > ql {
			q = q.wrapping_sub(1);
			r = r.wrapping_add(d);
		}

		if r >= d {
			q = q.wrapping_add(1);
			r -= d;
		}

		(q, r)
	}
}

//--------------------------------------------------------------------------------------------------
