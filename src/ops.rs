//! Operator traits. All arithmetic wraps modulo 2**256 and division by zero gives zero, exactly like
//! the named methods they forward to.

use crate::fixed_size::U256;
use std::cmp::Ordering;
use std::ops::{
	Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul,
	MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

macro_rules! impl_binary_op {
	($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:path) => {
		impl $op for U256 {
			type Output = U256;

			#[inline]
			fn $op_fn(self, rhs: U256) -> U256 {
				$method(self, rhs)
			}
		}

		impl $op<&U256> for U256 {
			type Output = U256;

			#[inline]
			fn $op_fn(self, rhs: &U256) -> U256 {
				$method(self, *rhs)
			}
		}

		impl $op<U256> for &U256 {
			type Output = U256;

			#[inline]
			fn $op_fn(self, rhs: U256) -> U256 {
				$method(*self, rhs)
			}
		}

		impl $op<&U256> for &U256 {
			type Output = U256;

			#[inline]
			fn $op_fn(self, rhs: &U256) -> U256 {
				$method(*self, *rhs)
			}
		}

		impl $assign for U256 {
			#[inline]
			fn $assign_fn(&mut self, rhs: U256) {
				*self = $method(*self, rhs);
			}
		}

		impl $assign<&U256> for U256 {
			#[inline]
			fn $assign_fn(&mut self, rhs: &U256) {
				*self = $method(*self, *rhs);
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, U256::add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, U256::sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, U256::mul);
impl_binary_op!(Div, div, DivAssign, div_assign, U256::div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, U256::rem);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, U256::and);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, U256::or);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, U256::xor);

impl Neg for U256 {
	type Output = U256;

	#[inline]
	fn neg(self) -> U256 {
		U256::neg(self)
	}
}

impl Not for U256 {
	type Output = U256;

	#[inline]
	fn not(self) -> U256 {
		U256::not(self)
	}
}

impl Shl<u32> for U256 {
	type Output = U256;

	#[inline]
	fn shl(self, n: u32) -> U256 {
		U256::shl(self, n)
	}
}

impl Shr<u32> for U256 {
	type Output = U256;

	#[inline]
	fn shr(self, n: u32) -> U256 {
		U256::shr(self, n)
	}
}

impl ShlAssign<u32> for U256 {
	#[inline]
	fn shl_assign(&mut self, n: u32) {
		*self = U256::shl(*self, n);
	}
}

impl ShrAssign<u32> for U256 {
	#[inline]
	fn shr_assign(&mut self, n: u32) {
		*self = U256::shr(*self, n);
	}
}

impl PartialOrd for U256 {
	#[inline]
	fn partial_cmp(&self, other: &U256) -> Option<Ordering> {
		Some(Ord::cmp(self, other))
	}
}

/// Unsigned order. See `U256::scmp` for the signed one.
impl Ord for U256 {
	#[inline]
	fn cmp(&self, other: &U256) -> Ordering {
		U256::cmp(*self, *other)
	}
}

impl std::iter::Sum for U256 {
	fn sum<I: Iterator<Item = U256>>(iter: I) -> U256 {
		iter.fold(U256::ZERO, U256::add)
	}
}

impl std::iter::Product for U256 {
	fn product<I: Iterator<Item = U256>>(iter: I) -> U256 {
		iter.fold(U256::ONE, U256::mul)
	}
}

//--------------------------------------------------------------------------------------------------
