use crate::fixed_size::{NLIMBS, U256};
use crate::limb::{LIMB_BITS, Limb};

impl U256 {
	/// (self << n) % 2**256. Shifts of 256 or more give zero.
	pub const fn shl(self, n: u32) -> Self {
		if n >= Self::BITS {
			return Self::ZERO;
		}
		let words = (n / LIMB_BITS) as usize;
		let bits = n % LIMB_BITS;
		let x = &self.limbs;
		let mut r = [0; NLIMBS];

		let mut i = words;
		if bits == 0 {
			// whole words only
			while i < NLIMBS {
				r[i] = x[i - words];
				i += 1;
			}
		} else {
			r[i] = x[0] << bits;
			i += 1;
			while i < NLIMBS {
				r[i] = (x[i - words] << bits) | (x[i - words - 1] >> (LIMB_BITS - bits));
				i += 1;
			}
		}

		Self { limbs: r }
	}

	/// self >> n, filling with zeros. Shifts of 256 or more give zero.
	pub const fn shr(self, n: u32) -> Self {
		self.shr_fill(n, 0)
	}

	/// Arithmetic shift right: the vacated high bits are copies of the sign bit. Shifts of 256 or
	/// more give zero for non-negative values and all ones for negative ones.
	pub const fn sar(self, n: u32) -> Self {
		let fill = if self.is_negative() { Limb::MAX } else { 0 };
		self.shr_fill(n, fill)
	}

	const fn shr_fill(self, n: u32, fill: Limb) -> Self {
		if n >= Self::BITS {
			return Self { limbs: [fill; NLIMBS] };
		}
		let words = (n / LIMB_BITS) as usize;
		let bits = n % LIMB_BITS;
		let x = &self.limbs;
		let mut r = [fill; NLIMBS];

		let top = NLIMBS - words;
		let mut i = 0;
		if bits == 0 {
			while i < top {
				r[i] = x[i + words];
				i += 1;
			}
		} else {
			while i + 1 < top {
				r[i] = (x[i + words] >> bits) | (x[i + words + 1] << (LIMB_BITS - bits));
				i += 1;
			}
			r[i] = (x[i + words] >> bits) | (fill << (LIMB_BITS - bits));
		}

		Self { limbs: r }
	}
}

//--------------------------------------------------------------------------------------------------
