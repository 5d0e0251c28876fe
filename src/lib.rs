//! Fixed-width 256-bit unsigned integers.
//!
//! `U256` is four 64-bit limbs, least significant first. Arithmetic wraps modulo 2**256, division
//! and modulo by zero give zero, and the signed operations (`sdiv`, `smod`, `sar`, `slt`, ...) read
//! the same bits as a two's complement value. Overflow is reported by the `*_overflow` variants.
//!
//! Modular multiplication can reuse a precomputed `Reciprocal` of the modulus; `ReciprocalCache`
//! shares reciprocals between threads.
//!
//! Only text parsing and cache configuration can fail. Both return `Error`.

#![allow(clippy::should_implement_trait)]

pub mod bitwise;
pub mod blocks;
pub mod div;
pub mod error;
pub mod fixed_size;
pub mod limb;
pub mod modular;
pub mod reciprocal_cache;
pub mod shift;

mod base_conv;
mod convert;
mod ops;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod reference;

pub use bitwise::Backend;
pub use error::{Error, ErrorKind};
pub use fixed_size::U256;
pub use limb::Limb;
pub use modular::{P256_MODULUS, P256_RECIPROCAL, Reciprocal};
pub use reciprocal_cache::{CacheConfig, CacheStats, ReciprocalCache};
