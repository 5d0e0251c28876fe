use crate::blocks;
use crate::limb::{self, LIMB_BITS, Limb};
use std::cmp::Ordering;

pub const NLIMBS: usize = 4;

/// 256-bit unsigned integer. Limbs are stored least significant first.
///
/// All arithmetic wraps modulo 2**256. The signed operations interpret the same bits as a two's
/// complement number.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256 {
	pub limbs: [Limb; NLIMBS],
}

impl U256 {
	pub const BITS: u32 = NLIMBS as u32 * LIMB_BITS;
	pub const BYTES: usize = NLIMBS * std::mem::size_of::<Limb>();

	pub const ZERO: Self = Self { limbs: [0; NLIMBS] };
	pub const ONE: Self = Self { limbs: [1, 0, 0, 0] };
	pub const MAX: Self = Self { limbs: [Limb::MAX; NLIMBS] };

	/// -2**255 in two's complement.
	pub const SIGNED_MIN: Self = Self { limbs: [0, 0, 0, 1 << 63] };

	/// 2**255 - 1
	pub const SIGNED_MAX: Self = Self { limbs: [Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX >> 1] };

	#[inline]
	pub const fn from_limbs(limbs: [Limb; NLIMBS]) -> Self {
		Self { limbs }
	}

	#[inline]
	pub const fn as_limbs(&self) -> &[Limb; NLIMBS] {
		&self.limbs
	}

	/// Preconditions:
	/// - i < 4
	#[inline]
	pub const fn limb(self, i: usize) -> Limb {
		self.limbs[i]
	}

	#[inline]
	pub const fn from_u64(value: u64) -> Self {
		Self { limbs: [value, 0, 0, 0] }
	}

	/// The least significant 64 bits.
	#[inline]
	pub const fn low_u64(self) -> u64 {
		self.limbs[0]
	}

	pub const fn is_zero(self) -> bool {
		(self.limbs[0] | self.limbs[1] | self.limbs[2] | self.limbs[3]) == 0
	}

	pub const fn is_one(self) -> bool {
		self.limbs[0] == 1 && self.is_u64()
	}

	/// Whether the value fits in 64 bits.
	pub const fn is_u64(self) -> bool {
		(self.limbs[1] | self.limbs[2] | self.limbs[3]) == 0
	}

	//----------------------------------------------------------------------------------------------
	// bits

	/// Bit `n`, counting from the least significant. Bits 256 and above read as zero.
	#[inline]
	pub const fn bit(self, n: u32) -> bool {
		if n >= Self::BITS {
			return false;
		}
		(self.limbs[(n / LIMB_BITS) as usize] >> (n % LIMB_BITS)) & 1 != 0
	}

	/// Sets or clears bit `n`. Bits 256 and above do not exist and are ignored.
	#[inline]
	pub fn set_bit(&mut self, n: u32, value: bool) {
		if n >= Self::BITS {
			return;
		}
		let i = (n / LIMB_BITS) as usize;
		let mask = 1 << (n % LIMB_BITS);
		if value {
			self.limbs[i] |= mask;
		} else {
			self.limbs[i] &= !mask;
		}
	}

	pub const fn leading_zeros(self) -> u32 {
		let mut i = NLIMBS;
		while i > 0 {
			i -= 1;
			if self.limbs[i] != 0 {
				return (NLIMBS - 1 - i) as u32 * LIMB_BITS + self.limbs[i].leading_zeros();
			}
		}
		Self::BITS
	}

	/// Number of bits needed to represent the value. Zero needs 0 bits.
	pub const fn bit_len(self) -> u32 {
		Self::BITS - self.leading_zeros()
	}

	//----------------------------------------------------------------------------------------------
	// add / sub

	pub const fn addc(self, b: Self, carry: bool) -> (Self, bool) {
		let mut r = [0; NLIMBS];
		let mut carry = carry;

		let mut i = 0;
		while i < NLIMBS {
			(r[i], carry) = limb::addc(self.limbs[i], b.limbs[i], carry);
			i += 1;
		}

		(Self { limbs: r }, carry)
	}

	pub const fn subb(self, b: Self, borrow: bool) -> (Self, bool) {
		let mut r = [0; NLIMBS];
		let mut borrow = borrow;

		let mut i = 0;
		while i < NLIMBS {
			(r[i], borrow) = limb::subb(self.limbs[i], b.limbs[i], borrow);
			i += 1;
		}

		(Self { limbs: r }, borrow)
	}

	/// (self + b) % 2**256
	#[inline]
	pub const fn add(self, b: Self) -> Self {
		self.addc(b, false).0
	}

	/// Returns the wrapped sum and whether it wrapped.
	#[inline]
	pub const fn add_overflow(self, b: Self) -> (Self, bool) {
		self.addc(b, false)
	}

	/// (self - b) % 2**256
	#[inline]
	pub const fn sub(self, b: Self) -> Self {
		self.subb(b, false).0
	}

	/// Returns the wrapped difference and whether it wrapped.
	#[inline]
	pub const fn sub_overflow(self, b: Self) -> (Self, bool) {
		self.subb(b, false)
	}

	pub const fn add_u64(self, b: u64) -> Self {
		self.add(Self::from_u64(b))
	}

	pub const fn sub_u64(self, b: u64) -> Self {
		self.sub(Self::from_u64(b))
	}

	//----------------------------------------------------------------------------------------------
	// mul

	/// (self * b) % 2**256
	///
	/// Only the partial products that reach the low 256 bits are computed. The products landing in
	/// the top limb are done with plain wrapping multiplication, their high halves would fall
	/// outside of the result anyway.
	pub const fn mul(self, b: Self) -> Self {
		let x = &self.limbs;
		let y = &b.limbs;

		let (r0, carry) = limb::mul(x[0], y[0], 0, 0);
		let (r1, carry) = limb::mul(x[1], y[0], carry, 0);
		let (r2, carry) = limb::mul(x[2], y[0], carry, 0);
		let r3 = x[3].wrapping_mul(y[0]).wrapping_add(carry);

		let (r1, carry) = limb::mul(x[0], y[1], r1, 0);
		let (r2, carry) = limb::mul(x[1], y[1], r2, carry);
		let r3 = r3.wrapping_add(x[2].wrapping_mul(y[1])).wrapping_add(carry);

		let (r2, carry) = limb::mul(x[0], y[2], r2, 0);
		let r3 = r3.wrapping_add(x[1].wrapping_mul(y[2])).wrapping_add(carry);

		let r3 = r3.wrapping_add(x[0].wrapping_mul(y[3]));

		Self { limbs: [r0, r1, r2, r3] }
	}

	/// (self * self) % 2**256
	///
	/// Same result as `self.mul(self)`. The symmetric cross products are computed once.
	pub const fn square(self) -> Self {
		let z = &self.limbs;

		let (r0, carry0) = limb::mul(z[0], z[0], 0, 0);
		let (r1, carry0) = limb::mul(z[0], z[1], carry0, 0);
		let (r2, carry0) = limb::mul(z[0], z[2], carry0, 0);

		let (r1, carry1) = limb::mul(z[0], z[1], r1, 0);
		let (r2, carry1) = limb::mul(z[1], z[1], r2, carry1);

		let (r2, carry2) = limb::mul(z[0], z[2], r2, 0);

		let r3 = z[0]
			.wrapping_mul(z[3])
			.wrapping_add(z[1].wrapping_mul(z[2]))
			.wrapping_mul(2)
			.wrapping_add(carry0)
			.wrapping_add(carry1)
			.wrapping_add(carry2);

		Self { limbs: [r0, r1, r2, r3] }
	}

	/// The full 512-bit product, least significant limb first.
	pub fn mul_wide(self, b: Self) -> [Limb; 2 * NLIMBS] {
		let mut r = [0; 2 * NLIMBS];
		for j in 0..NLIMBS {
			r[j + NLIMBS] = blocks::addmul_1(&mut r[j..j + NLIMBS], &self.limbs, b.limbs[j]);
		}
		r
	}

	/// Returns the wrapped product and whether the full product needs more than 256 bits.
	pub fn mul_overflow(self, b: Self) -> (Self, bool) {
		let p = self.mul_wide(b);
		let hi = p[NLIMBS] | p[NLIMBS + 1] | p[NLIMBS + 2] | p[NLIMBS + 3];
		(Self { limbs: [p[0], p[1], p[2], p[3]] }, hi != 0)
	}

	/// (self ** exponent) % 2**256
	pub const fn exp(self, exponent: Self) -> Self {
		let mut result = Self::ONE;
		let mut base = self;
		let n = exponent.bit_len();

		let mut i = 0;
		while i < n {
			if exponent.bit(i) {
				result = result.mul(base);
			}
			base = base.square();
			i += 1;
		}
		result
	}

	//----------------------------------------------------------------------------------------------
	// signed view

	#[inline]
	pub const fn is_negative(self) -> bool {
		(self.limbs[NLIMBS - 1] >> (LIMB_BITS - 1)) != 0
	}

	/// Two's complement negation.
	#[inline]
	pub const fn neg(self) -> Self {
		Self::ZERO.sub(self)
	}

	/// Absolute value of the signed interpretation. `SIGNED_MIN` maps to itself.
	#[inline]
	pub const fn abs(self) -> Self {
		if self.is_negative() { self.neg() } else { self }
	}

	/// -1, 0 or 1 according to the signed interpretation.
	pub const fn sign(self) -> i32 {
		if self.is_zero() {
			0
		} else if self.is_negative() {
			-1
		} else {
			1
		}
	}

	//----------------------------------------------------------------------------------------------
	// compare

	pub const fn cmp(self, b: Self) -> Ordering {
		let mut i = NLIMBS;
		while i > 0 {
			i -= 1;
			if self.limbs[i] != b.limbs[i] {
				return if self.limbs[i] < b.limbs[i] { Ordering::Less } else { Ordering::Greater };
			}
		}
		Ordering::Equal
	}

	#[inline]
	pub const fn lt(self, b: Self) -> bool {
		matches!(self.cmp(b), Ordering::Less)
	}

	#[inline]
	pub const fn gt(self, b: Self) -> bool {
		matches!(self.cmp(b), Ordering::Greater)
	}

	/// Signed comparison.
	pub const fn scmp(self, b: Self) -> Ordering {
		match (self.is_negative(), b.is_negative()) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			// same sign: the unsigned order of two's complement values matches
			_ => self.cmp(b),
		}
	}

	#[inline]
	pub const fn slt(self, b: Self) -> bool {
		matches!(self.scmp(b), Ordering::Less)
	}

	#[inline]
	pub const fn sgt(self, b: Self) -> bool {
		matches!(self.scmp(b), Ordering::Greater)
	}

	#[inline]
	pub const fn eq_u64(self, b: u64) -> bool {
		self.is_u64() && self.limbs[0] == b
	}

	#[inline]
	pub const fn lt_u64(self, b: u64) -> bool {
		self.is_u64() && self.limbs[0] < b
	}

	#[inline]
	pub const fn gt_u64(self, b: u64) -> bool {
		!self.is_u64() || self.limbs[0] > b
	}

	//----------------------------------------------------------------------------------------------
	// bytes

	/// The byte at position `n`, counting from the most significant byte. Positions past the
	/// last byte give zero.
	pub const fn byte(self, n: Self) -> Self {
		if n.gt_u64(Self::BYTES as u64 - 1) {
			return Self::ZERO;
		}
		let bit = (Self::BYTES as u32 - 1 - n.limbs[0] as u32) * 8;
		let b = (self.limbs[(bit / LIMB_BITS) as usize] >> (bit % LIMB_BITS)) & 0xff;
		Self::from_u64(b)
	}

	/// Treats byte `byte_index` (counting from the least significant byte) as the sign byte and
	/// copies its top bit into all more significant bits. Indices 31 and above leave the value
	/// unchanged.
	pub const fn sign_extend(self, byte_index: Self) -> Self {
		if byte_index.gt_u64(Self::BYTES as u64 - 2) {
			return self;
		}
		let sign_bit = byte_index.limbs[0] as u32 * 8 + 7;
		let mask = Self::MAX.shr(Self::BITS - 1 - sign_bit);
		if self.bit(sign_bit) { self.or_scalar(mask.not_scalar()) } else { self.and_scalar(mask) }
	}

	/// Swaps the byte order of the whole 256-bit value.
	pub const fn reverse_bytes(self) -> Self {
		let l = &self.limbs;
		Self { limbs: [l[3].swap_bytes(), l[2].swap_bytes(), l[1].swap_bytes(), l[0].swap_bytes()] }
	}

	/// floor(sqrt(self))
	///
	/// Newton iteration starting from a power of two that is not below the root. The sequence
	/// decreases until it reaches the root.
	pub fn sqrt(self) -> Self {
		if self.lt_u64(2) {
			return self;
		}
		let mut z1 = Self::ONE.shl((self.bit_len() + 1) / 2);
		loop {
			let z2 = self.div(z1).add(z1).shr(1);
			if !z2.lt(z1) {
				return z1;
			}
			z1 = z2;
		}
	}
}

//--------------------------------------------------------------------------------------------------
