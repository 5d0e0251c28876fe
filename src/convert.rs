//! Conversions to and from native integers, byte strings and `num-bigint` values.

use crate::error::Error;
use crate::fixed_size::{NLIMBS, U256};
use crate::limb::Limb;
use arrayvec::ArrayVec;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

const LIMB_BYTES: usize = std::mem::size_of::<Limb>();

impl U256 {
	/// Returns the low 64 bits and whether any higher bit was set.
	#[inline]
	pub const fn to_u64_checked(self) -> (u64, bool) {
		(self.limbs[0], !self.is_u64())
	}

	//----------------------------------------------------------------------------------------------
	// bytes

	pub const fn from_be_bytes(bytes: [u8; U256::BYTES]) -> Self {
		let mut limbs = [0; NLIMBS];
		let mut i = 0;
		while i < U256::BYTES {
			limbs[NLIMBS - 1 - i / LIMB_BYTES] |= (bytes[i] as Limb) << ((LIMB_BYTES - 1 - i % LIMB_BYTES) * 8);
			i += 1;
		}
		Self { limbs }
	}

	pub const fn to_be_bytes(self) -> [u8; U256::BYTES] {
		let mut bytes = [0; U256::BYTES];
		let mut i = 0;
		while i < U256::BYTES {
			bytes[i] = (self.limbs[NLIMBS - 1 - i / LIMB_BYTES] >> ((LIMB_BYTES - 1 - i % LIMB_BYTES) * 8)) as u8;
			i += 1;
		}
		bytes
	}

	pub const fn from_le_bytes(bytes: [u8; U256::BYTES]) -> Self {
		let mut limbs = [0; NLIMBS];
		let mut i = 0;
		while i < U256::BYTES {
			limbs[i / LIMB_BYTES] |= (bytes[i] as Limb) << ((i % LIMB_BYTES) * 8);
			i += 1;
		}
		Self { limbs }
	}

	pub const fn to_le_bytes(self) -> [u8; U256::BYTES] {
		let mut bytes = [0; U256::BYTES];
		let mut i = 0;
		while i < U256::BYTES {
			bytes[i] = (self.limbs[i / LIMB_BYTES] >> ((i % LIMB_BYTES) * 8)) as u8;
			i += 1;
		}
		bytes
	}

	/// Big-endian bytes of any length. Inputs longer than 32 bytes keep only their last 32 bytes,
	/// shorter ones are zero-extended on the left.
	pub fn from_be_slice(bytes: &[u8]) -> Self {
		Self::from_be_slice_checked(bytes).0
	}

	/// Like `from_be_slice`, also reports whether a dropped leading byte was non-zero.
	pub fn from_be_slice_checked(bytes: &[u8]) -> (Self, bool) {
		let (dropped, kept) = bytes.split_at(bytes.len().saturating_sub(U256::BYTES));
		let mut buf = [0; U256::BYTES];
		buf[U256::BYTES - kept.len()..].copy_from_slice(kept);
		(Self::from_be_bytes(buf), dropped.iter().any(|&b| b != 0))
	}

	/// The low 20 bytes, big-endian.
	pub fn to_be_bytes20(self) -> [u8; 20] {
		let mut r = [0; 20];
		r.copy_from_slice(&self.to_be_bytes()[U256::BYTES - 20..]);
		r
	}

	/// Big-endian bytes without leading zeros. Zero gives an empty buffer.
	pub fn to_be_bytes_trimmed(self) -> ArrayVec<u8, { U256::BYTES }> {
		let bytes = self.to_be_bytes();
		let skip = self.leading_zeros() as usize / 8;
		bytes[skip..].iter().copied().collect()
	}

	/// Writes the value big-endian, right-aligned into `dest`, zero-filling on the left. A `dest`
	/// shorter than 32 bytes receives the low `dest.len()` bytes.
	pub fn write_be_padded(self, dest: &mut [u8]) {
		let bytes = self.to_be_bytes();
		let n = dest.len().min(U256::BYTES);
		let (pad, tail) = dest.split_at_mut(dest.len() - n);
		pad.fill(0);
		tail.copy_from_slice(&bytes[U256::BYTES - n..]);
	}

	//----------------------------------------------------------------------------------------------
	// num-bigint

	/// Returns the low 256 bits of `b` and whether `b` needed more.
	pub fn from_biguint(b: &BigUint) -> (Self, bool) {
		let digits = b.to_u64_digits();
		let mut limbs = [0; NLIMBS];
		let n = digits.len().min(NLIMBS);
		limbs[..n].copy_from_slice(&digits[..n]);
		(Self { limbs }, digits.len() > NLIMBS)
	}

	/// Like `from_biguint` on the magnitude, negated (two's complement) when `b` is negative.
	pub fn from_bigint(b: &BigInt) -> (Self, bool) {
		let (value, overflow) = Self::from_biguint(b.magnitude());
		let value = if b.is_negative() { value.neg() } else { value };
		(value, overflow)
	}

	pub fn to_biguint(self) -> BigUint {
		BigUint::from_bytes_be(&self.to_be_bytes())
	}

	/// The value read as a two's complement signed integer.
	pub fn to_bigint_signed(self) -> BigInt {
		let magnitude = BigInt::from(self.abs().to_biguint());
		if self.is_negative() { -magnitude } else { magnitude }
	}
}

//--------------------------------------------------------------------------------------------------
// std conversions

macro_rules! impl_from_unsigned {
	($($t:ty),*) => {
		$(
			impl From<$t> for U256 {
				#[inline]
				fn from(value: $t) -> Self {
					Self::from_u64(value as u64)
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for U256 {
	#[inline]
	fn from(value: bool) -> Self {
		Self::from_u64(value as u64)
	}
}

impl From<u128> for U256 {
	#[inline]
	fn from(value: u128) -> Self {
		Self::from_limbs([value as Limb, (value >> 64) as Limb, 0, 0])
	}
}

impl From<[u8; U256::BYTES]> for U256 {
	#[inline]
	fn from(bytes: [u8; U256::BYTES]) -> Self {
		Self::from_be_bytes(bytes)
	}
}

impl From<U256> for [u8; U256::BYTES] {
	#[inline]
	fn from(value: U256) -> Self {
		value.to_be_bytes()
	}
}

impl From<U256> for BigUint {
	#[inline]
	fn from(value: U256) -> Self {
		value.to_biguint()
	}
}

impl TryFrom<U256> for u64 {
	type Error = Error;

	fn try_from(value: U256) -> Result<Self, Error> {
		match value.to_u64_checked() {
			(v, false) => Ok(v),
			_ => Err(Error::new_range_exceeded("value does not fit in u64")),
		}
	}
}

impl TryFrom<U256> for u128 {
	type Error = Error;

	fn try_from(value: U256) -> Result<Self, Error> {
		let l = value.limbs;
		if (l[2] | l[3]) != 0 {
			return Err(Error::new_range_exceeded("value does not fit in u128"));
		}
		Ok((l[0] as u128) | ((l[1] as u128) << 64))
	}
}

impl TryFrom<&BigUint> for U256 {
	type Error = Error;

	fn try_from(value: &BigUint) -> Result<Self, Error> {
		match Self::from_biguint(value) {
			(v, false) => Ok(v),
			_ => Err(Error::new_range_exceeded("value does not fit in 256 bits")),
		}
	}
}

//--------------------------------------------------------------------------------------------------
