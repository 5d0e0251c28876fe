//! Word-wise logic operations.
//!
//! There is a single semantic operation per operator with two interchangeable backends: plain
//! limb loops and, on x86_64 CPUs with AVX2, one 256-bit vector instruction. `Backend::detect()`
//! picks the fastest backend available at run time. The operator impls on `U256` go through it.

use crate::fixed_size::{NLIMBS, U256};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Backend {
	Scalar,
	#[cfg(target_arch = "x86_64")]
	Avx2,
}

impl Backend {
	/// All backends compiled into this build, usable or not.
	#[cfg(target_arch = "x86_64")]
	pub const ALL: &[Backend] = &[Backend::Scalar, Backend::Avx2];

	/// All backends compiled into this build, usable or not.
	#[cfg(not(target_arch = "x86_64"))]
	pub const ALL: &[Backend] = &[Backend::Scalar];

	#[inline]
	pub fn detect() -> Self {
		#[cfg(target_arch = "x86_64")]
		{
			if std::arch::is_x86_feature_detected!("avx2") {
				return Backend::Avx2;
			}
		}
		Backend::Scalar
	}

	/// Whether the current CPU can run this backend.
	pub fn is_available(self) -> bool {
		match self {
			Backend::Scalar => true,
			#[cfg(target_arch = "x86_64")]
			Backend::Avx2 => std::arch::is_x86_feature_detected!("avx2"),
		}
	}

	/// Panics if the current CPU cannot run this backend.
	#[inline]
	pub fn and(self, a: U256, b: U256) -> U256 {
		match self {
			Backend::Scalar => a.and_scalar(b),
			#[cfg(target_arch = "x86_64")]
			Backend::Avx2 => {
				assert!(self.is_available(), "AVX2 backend on a CPU without AVX2");
				// SAFETY: AVX2 support was checked above
				U256::from_limbs(unsafe { avx2::and(&a.limbs, &b.limbs) })
			},
		}
	}

	/// Panics if the current CPU cannot run this backend.
	#[inline]
	pub fn or(self, a: U256, b: U256) -> U256 {
		match self {
			Backend::Scalar => a.or_scalar(b),
			#[cfg(target_arch = "x86_64")]
			Backend::Avx2 => {
				assert!(self.is_available(), "AVX2 backend on a CPU without AVX2");
				// SAFETY: AVX2 support was checked above
				U256::from_limbs(unsafe { avx2::or(&a.limbs, &b.limbs) })
			},
		}
	}

	/// Panics if the current CPU cannot run this backend.
	#[inline]
	pub fn xor(self, a: U256, b: U256) -> U256 {
		match self {
			Backend::Scalar => a.xor_scalar(b),
			#[cfg(target_arch = "x86_64")]
			Backend::Avx2 => {
				assert!(self.is_available(), "AVX2 backend on a CPU without AVX2");
				// SAFETY: AVX2 support was checked above
				U256::from_limbs(unsafe { avx2::xor(&a.limbs, &b.limbs) })
			},
		}
	}

	/// Panics if the current CPU cannot run this backend.
	#[inline]
	pub fn not(self, a: U256) -> U256 {
		match self {
			Backend::Scalar => a.not_scalar(),
			#[cfg(target_arch = "x86_64")]
			Backend::Avx2 => {
				assert!(self.is_available(), "AVX2 backend on a CPU without AVX2");
				// SAFETY: AVX2 support was checked above
				U256::from_limbs(unsafe { avx2::not(&a.limbs) })
			},
		}
	}
}

//--------------------------------------------------------------------------------------------------
// scalar

impl U256 {
	pub const fn and_scalar(self, b: Self) -> Self {
		let mut r = [0; NLIMBS];
		let mut i = 0;
		while i < NLIMBS {
			r[i] = self.limbs[i] & b.limbs[i];
			i += 1;
		}
		Self { limbs: r }
	}

	pub const fn or_scalar(self, b: Self) -> Self {
		let mut r = [0; NLIMBS];
		let mut i = 0;
		while i < NLIMBS {
			r[i] = self.limbs[i] | b.limbs[i];
			i += 1;
		}
		Self { limbs: r }
	}

	pub const fn xor_scalar(self, b: Self) -> Self {
		let mut r = [0; NLIMBS];
		let mut i = 0;
		while i < NLIMBS {
			r[i] = self.limbs[i] ^ b.limbs[i];
			i += 1;
		}
		Self { limbs: r }
	}

	pub const fn not_scalar(self) -> Self {
		let mut r = [0; NLIMBS];
		let mut i = 0;
		while i < NLIMBS {
			r[i] = !self.limbs[i];
			i += 1;
		}
		Self { limbs: r }
	}

	#[inline]
	pub fn and(self, b: Self) -> Self {
		Backend::detect().and(self, b)
	}

	#[inline]
	pub fn or(self, b: Self) -> Self {
		Backend::detect().or(self, b)
	}

	#[inline]
	pub fn xor(self, b: Self) -> Self {
		Backend::detect().xor(self, b)
	}

	#[inline]
	pub fn not(self) -> Self {
		Backend::detect().not(self)
	}
}

//--------------------------------------------------------------------------------------------------
// avx2

#[cfg(target_arch = "x86_64")]
mod avx2 {
	use crate::fixed_size::NLIMBS;
	use crate::limb::Limb;
	use std::arch::x86_64::*;

	type Limbs = [Limb; NLIMBS];

	#[inline]
	#[target_feature(enable = "avx2")]
	unsafe fn load(a: &Limbs) -> __m256i {
		unsafe { _mm256_loadu_si256(a.as_ptr() as *const __m256i) }
	}

	#[inline]
	#[target_feature(enable = "avx2")]
	unsafe fn store(v: __m256i) -> Limbs {
		let mut r = [0; NLIMBS];
		unsafe { _mm256_storeu_si256(r.as_mut_ptr() as *mut __m256i, v) };
		r
	}

	#[target_feature(enable = "avx2")]
	pub unsafe fn and(a: &Limbs, b: &Limbs) -> Limbs {
		unsafe { store(_mm256_and_si256(load(a), load(b))) }
	}

	#[target_feature(enable = "avx2")]
	pub unsafe fn or(a: &Limbs, b: &Limbs) -> Limbs {
		unsafe { store(_mm256_or_si256(load(a), load(b))) }
	}

	#[target_feature(enable = "avx2")]
	pub unsafe fn xor(a: &Limbs, b: &Limbs) -> Limbs {
		unsafe { store(_mm256_xor_si256(load(a), load(b))) }
	}

	#[target_feature(enable = "avx2")]
	pub unsafe fn not(a: &Limbs) -> Limbs {
		unsafe { store(_mm256_xor_si256(load(a), _mm256_set1_epi64x(-1))) }
	}
}

//--------------------------------------------------------------------------------------------------
