//! Set-associative cache of modulus reciprocals.
//!
//! The cache has `2**index_bits` sets of `ways` entries each. A modulus always lands in the same
//! set, chosen by the low bits of a hash of its limbs. Every set has its own reader/writer lock, so
//! lookups and insertions in different sets never contend.
//!
//! Inside a set, entries are ordered from newest to oldest. An insertion shifts the existing
//! entries down by one way and takes way zero; when the set is full, the oldest entry drops out.
//!
//! Optionally, one fixed modulus is answered from a precomputed reciprocal without locking.
//!
//! The cache never affects results. A lookup that races with an insertion may miss and the caller
//! simply computes the reciprocal again.

use crate::error::{self, Error};
use crate::fixed_size::U256;
use crate::modular::{P256_MODULUS, P256_RECIPROCAL, Reciprocal};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CacheConfig {
	/// log2 of the number of sets.
	pub index_bits: u32,

	/// Entries per set.
	pub ways: usize,

	/// A modulus answered without touching the sets.
	pub fixed_modulus: Option<U256>,
}

impl CacheConfig {
	pub const MAX_INDEX_BITS: u32 = 16;
	pub const MAX_WAYS: usize = 64;

	pub fn validate(&self) -> Result<(), Error> {
		error::assert(self.index_bits <= Self::MAX_INDEX_BITS, || {
			Error::new_invalid_config("index_bits must be at most 16")
		})?;
		error::assert(self.ways > 0, || Error::new_invalid_config("ways must be at least 1"))?;
		error::assert(self.ways <= Self::MAX_WAYS, || Error::new_invalid_config("ways must be at most 64"))?;
		error::assert(self.fixed_modulus != Some(U256::ZERO), || {
			Error::new_invalid_config("fixed modulus must not be zero")
		})?;
		Ok(())
	}

	#[inline]
	pub fn sets(&self) -> usize {
		1 << self.index_bits
	}
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self { index_bits: 8, ways: 5, fixed_modulus: None }
	}
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct CacheStats {
	pub hits: u64,
	pub misses: u64,
}

#[derive(Clone, Copy, Default)]
struct Entry {
	modulus: U256,
	reciprocal: Reciprocal,
}

pub struct ReciprocalCache {
	config: CacheConfig,

	// newest first; a zero modulus never gets in
	sets: Box<[RwLock<Vec<Entry>>]>,

	fixed: Option<Entry>,

	hits: AtomicU64,
	misses: AtomicU64,
}

/// Set index of `m` for a cache with `2**index_bits` sets.
pub fn set_index(m: &U256, index_bits: u32) -> usize {
	let l = &m.limbs;
	let mut h = l[0] ^ l[1].rotate_left(16) ^ l[2].rotate_left(32) ^ l[3].rotate_left(48);
	// splitmix64 finalizer
	h = (h ^ (h >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
	h = (h ^ (h >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
	h ^= h >> 31;
	(h & ((1 << index_bits) - 1)) as usize
}

impl ReciprocalCache {
	pub fn new(config: CacheConfig) -> Result<Self, Error> {
		config.validate()?;
		Ok(Self::new_unchecked(config))
	}

	/// Default geometry with `P256_MODULUS` as the fixed modulus.
	pub fn with_p256() -> Self {
		Self::new_unchecked(CacheConfig { fixed_modulus: Some(P256_MODULUS), ..CacheConfig::default() })
	}

	fn new_unchecked(config: CacheConfig) -> Self {
		let sets = (0..config.sets()).map(|_| RwLock::new(Vec::with_capacity(config.ways))).collect();
		let fixed = config.fixed_modulus.map(|modulus| {
			let reciprocal = if modulus == P256_MODULUS { P256_RECIPROCAL } else { Reciprocal::new(modulus) };
			Entry { modulus, reciprocal }
		});
		log::debug!(
			"reciprocal cache: {} sets x {} ways, fixed modulus {:?}",
			config.sets(),
			config.ways,
			config.fixed_modulus
		);
		Self { config, sets, fixed, hits: AtomicU64::new(0), misses: AtomicU64::new(0) }
	}

	#[inline]
	pub fn config(&self) -> &CacheConfig {
		&self.config
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats { hits: self.hits.load(Ordering::Relaxed), misses: self.misses.load(Ordering::Relaxed) }
	}

	/// Number of cached entries, not counting the fixed modulus.
	pub fn len(&self) -> usize {
		self.sets.iter().map(|set| set.read().unwrap_or_else(PoisonError::into_inner).len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Looks up the reciprocal of `m`. Lookups of the fixed modulus are not counted.
	pub fn get(&self, m: U256) -> Option<Reciprocal> {
		if let Some(fixed) = &self.fixed {
			if fixed.modulus == m {
				return Some(fixed.reciprocal);
			}
		}

		let set = self.sets[set_index(&m, self.config.index_bits)].read().unwrap_or_else(PoisonError::into_inner);
		match set.iter().find(|e| e.modulus == m) {
			Some(e) => {
				self.hits.fetch_add(1, Ordering::Relaxed);
				Some(e.reciprocal)
			},
			None => {
				self.misses.fetch_add(1, Ordering::Relaxed);
				None
			},
		}
	}

	/// Stores `reciprocal` as the reciprocal of `m`. A zero modulus is ignored. If `m` is already
	/// in its set, the entry is replaced in place.
	pub fn put(&self, m: U256, reciprocal: Reciprocal) {
		if m.is_zero() {
			return;
		}
		let index = set_index(&m, self.config.index_bits);
		let mut set = self.sets[index].write().unwrap_or_else(PoisonError::into_inner);

		if let Some(e) = set.iter_mut().find(|e| e.modulus == m) {
			e.reciprocal = reciprocal;
			return;
		}
		if set.len() == self.config.ways {
			if let Some(old) = set.pop() {
				log::trace!("reciprocal cache: set {index} full, evicting {:?}", old.modulus);
			}
		}
		log::trace!("reciprocal cache: inserting {m:?} into set {index}");
		set.insert(0, Entry { modulus: m, reciprocal });
	}

	/// Returns the cached reciprocal of `m`, computing and caching it on a miss.
	pub fn get_or_insert(&self, m: U256) -> Reciprocal {
		if let Some(r) = self.get(m) {
			return r;
		}
		let r = Reciprocal::new(m);
		self.put(m, r);
		r
	}
}

impl Default for ReciprocalCache {
	fn default() -> Self {
		Self::new_unchecked(CacheConfig::default())
	}
}

impl std::fmt::Debug for ReciprocalCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ReciprocalCache").field("config", &self.config).field("stats", &self.stats()).finish()
	}
}

//--------------------------------------------------------------------------------------------------
