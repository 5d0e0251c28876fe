//! Hexadecimal and decimal text.

use crate::error::{self, Error};
use crate::fixed_size::{NLIMBS, U256};
use crate::limb::{LIMB_BITS, Limb};
use arrayvec::{ArrayString, ArrayVec};

/// 2**256 - 1
pub const MAX_DECIMAL: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

const MAX_DECIMAL_DIGITS: usize = 78;
const MAX_HEX_DIGITS: usize = U256::BITS as usize / 4;

/// Decimal digits per chunk. 19 nines still fit in a limb.
const CHUNK_DIGITS: usize = 19;
const CHUNK_BASE: Limb = 10_000_000_000_000_000_000;

/// 10**0, 10**19, 10**38, 10**57 and 10**76
const CHUNK_MULTIPLIERS: [U256; 5] = [
	U256::ONE,
	U256::from_limbs([CHUNK_BASE, 0, 0, 0]),
	U256::from_limbs([687_399_551_400_673_280, 5_421_010_862_427_522_170, 0, 0]),
	U256::from_limbs([5_332_261_958_806_667_264, 17_004_971_331_911_604_867, 2_938_735_877_055_718_769, 0]),
	U256::from_limbs([0, 8_607_968_719_199_866_880, 532_749_306_367_912_313, 1_593_091_911_132_452_277]),
];

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn hex_value(c: u8) -> Option<Limb> {
	match c {
		b'0'..=b'9' => Some((c - b'0') as Limb),
		b'a'..=b'f' => Some((c - b'a' + 10) as Limb),
		b'A'..=b'F' => Some((c - b'A' + 10) as Limb),
		_ => None,
	}
}

impl U256 {
	//----------------------------------------------------------------------------------------------
	// hex

	/// Hex digits without prefix or leading zeros. Zero is "0".
	pub fn hex_digits(self) -> ArrayString<MAX_HEX_DIGITS> {
		let mut s = ArrayString::new();
		let n = (self.bit_len() as usize).div_ceil(4).max(1);
		for i in (0..n).rev() {
			let nibble = (self.limbs[i / 16] >> ((i % 16) * 4)) & 0xf;
			s.push(HEX_CHARS[nibble as usize] as char);
		}
		s
	}

	/// "0x" followed by the minimal lowercase hex digits. Zero is "0x0".
	pub fn to_hex(self) -> String {
		format!("0x{}", self.hex_digits())
	}

	/// Parses "0x" or "0X" followed by 1 to 64 hex digits without leading zeros.
	pub fn from_hex(s: &str) -> Result<Self, Error> {
		let bytes = s.as_bytes();
		error::assert(!bytes.is_empty(), || Error::new_syntax_error("empty hex string"))?;
		error::assert(bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X'), || {
			Error::new_syntax_error("hex string without 0x prefix")
		})?;
		let digits = &bytes[2..];
		error::assert(!digits.is_empty(), || Error::new_syntax_error("hex string \"0x\""))?;
		error::assert(digits.len() == 1 || digits[0] != b'0', || {
			Error::new_syntax_error("hex number with leading zero digits")
		})?;
		error::assert(digits.len() <= MAX_HEX_DIGITS, || Error::new_range_exceeded("hex number > 256 bits"))?;

		let mut limbs = [0; NLIMBS];
		for (i, &c) in digits.iter().rev().enumerate() {
			let Some(v) = hex_value(c) else {
				return Err(Error::new_syntax_error("invalid hex digit"));
			};
			limbs[i / 16] |= v << ((i % 16) * 4);
		}
		Ok(Self { limbs })
	}

	//----------------------------------------------------------------------------------------------
	// decimal

	/// Decimal digits without leading zeros. Zero is "0".
	pub fn decimal_digits(self) -> ArrayString<MAX_DECIMAL_DIGITS> {
		// least significant chunk first
		let mut chunks = ArrayVec::<Limb, { CHUNK_MULTIPLIERS.len() }>::new();
		let mut y = self;
		while !y.is_zero() {
			let (q, r) = y.div_rem(CHUNK_MULTIPLIERS[1]);
			chunks.push(r.low_u64());
			y = q;
		}

		// digits in reverse order
		let mut rev = ArrayVec::<u8, MAX_DECIMAL_DIGITS>::new();
		let top = chunks.len().saturating_sub(1);
		for (i, &chunk) in chunks.iter().enumerate() {
			let mut chunk = chunk;
			let mut n = 0;
			while chunk != 0 || (i < top && n < CHUNK_DIGITS) {
				rev.push(b'0' + (chunk % 10) as u8);
				chunk /= 10;
				n += 1;
			}
		}
		if rev.is_empty() {
			rev.push(b'0');
		}

		let mut s = ArrayString::new();
		for &d in rev.iter().rev() {
			s.push(d as char);
		}
		s
	}

	pub fn to_decimal(self) -> String {
		self.decimal_digits().to_string()
	}

	/// Decimal with `separator` between groups of three digits, e.g. "1,234,567".
	pub fn to_pretty_decimal(self, separator: char) -> String {
		let digits = self.decimal_digits();
		let mut s = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
		for (i, c) in digits.chars().enumerate() {
			if i > 0 && (digits.len() - i) % 3 == 0 {
				s.push(separator);
			}
			s.push(c);
		}
		s
	}

	/// Parses a decimal number: an optional single '+', then digits. Any number of leading zeros
	/// is accepted. Values above 2**256 - 1 are rejected with `RangeExceeded`.
	pub fn from_decimal(s: &str) -> Result<Self, Error> {
		let s = s.strip_prefix('+').unwrap_or(s);
		error::assert(!s.is_empty(), || Error::new_syntax_error("empty decimal string"))?;
		error::assert(s.bytes().all(|c| c.is_ascii_digit()), || Error::new_syntax_error("invalid decimal digit"))?;

		let s = match s.trim_start_matches('0') {
			"" => "0",
			t => t,
		};
		error::assert(
			s.len() < MAX_DECIMAL.len() || (s.len() == MAX_DECIMAL.len() && s <= MAX_DECIMAL),
			|| Error::new_range_exceeded("decimal number > 256 bits"),
		)?;

		// chunks of 19 digits from the right, each scaled by its power of 10**19
		let mut result = Self::ZERO;
		let mut end = s.len();
		let mut i = 0;
		while end > 0 {
			let start = end.saturating_sub(CHUNK_DIGITS);
			let chunk = s.as_bytes()[start..end].iter().fold(0, |acc: Limb, &c| acc * 10 + (c - b'0') as Limb);
			result = result.add(Self::from_u64(chunk).mul(CHUNK_MULTIPLIERS[i]));
			end = start;
			i += 1;
		}
		Ok(result)
	}

	/// `radix` 16 expects a "0x" prefix, 10 plain decimal, and 0 picks hex when the string starts
	/// with "0x" and decimal otherwise.
	pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
		match radix {
			0 if s.starts_with("0x") || s.starts_with("0X") => Self::from_hex(s),
			0 | 10 => Self::from_decimal(s),
			16 => Self::from_hex(s),
			_ => Err(Error::new_syntax_error("radix must be 0, 10 or 16")),
		}
	}
}

const _: () = assert!(LIMB_BITS == 64);

//--------------------------------------------------------------------------------------------------
// formatting traits

impl std::str::FromStr for U256 {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::from_str_radix(s, 0)
	}
}

impl std::fmt::Display for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.pad_integral(true, "", &self.decimal_digits())
	}
}

impl std::fmt::LowerHex for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.pad_integral(true, "0x", &self.hex_digits())
	}
}

impl std::fmt::UpperHex for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.pad_integral(true, "0x", &self.hex_digits().to_ascii_uppercase())
	}
}

impl std::fmt::Debug for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{}", self.hex_digits())
	}
}

//--------------------------------------------------------------------------------------------------
