//! Cross-module laws checked against the arbitrary precision model on edge values and random
//! operands.

use crate::fixed_size::U256;
use crate::modular::Reciprocal;
use crate::reciprocal_cache::{CacheConfig, ReciprocalCache};
use crate::reference;
use num_bigint::{BigInt, BigUint};
use rand::{SeedableRng, rngs::StdRng};

const ROUNDS: usize = 2000;

/// Edge values crossed with themselves, then random pairs.
fn pairs(seed: u64) -> Vec<(U256, U256)> {
	let edges = reference::edge_values();
	let mut v: Vec<(U256, U256)> = edges.iter().flat_map(|&x| edges.iter().map(move |&y| (x, y))).collect();
	let mut rng = StdRng::seed_from_u64(seed);
	for _ in 0..ROUNDS {
		v.push((reference::random_sized(&mut rng), reference::random_sized(&mut rng)));
	}
	v
}

#[test]
fn test_arithmetic_matches_model() {
	for (x, y) in pairs(1) {
		assert_eq!(x.add(y), reference::add(x, y));
		assert_eq!(x.sub(y), reference::sub(x, y));
		assert_eq!(x.mul(y), reference::mul(x, y));
		assert_eq!(x.square(), reference::mul(x, x));

		let (sum, overflow) = x.add_overflow(y);
		assert_eq!(sum, reference::add(x, y));
		assert_eq!(overflow, reference::big(x) + reference::big(y) > reference::big(U256::MAX));

		let (diff, borrow) = x.sub_overflow(y);
		assert_eq!(diff, reference::sub(x, y));
		assert_eq!(borrow, reference::big(x) < reference::big(y));

		let (prod, overflow) = x.mul_overflow(y);
		assert_eq!(prod, reference::mul(x, y));
		assert_eq!(overflow, reference::big(x) * reference::big(y) > reference::big(U256::MAX));
	}
}

#[test]
fn test_exp_matches_model() {
	let mut rng = StdRng::seed_from_u64(2);
	for _ in 0..200 {
		let x = reference::random_sized(&mut rng);
		let e = reference::random_sized(&mut rng);
		assert_eq!(x.exp(e), reference::exp(x, e));
	}
	for x in reference::edge_values() {
		for e in [U256::ZERO, U256::ONE, U256::from_u64(2), U256::from_u64(255), U256::MAX] {
			assert_eq!(x.exp(e), reference::exp(x, e));
		}
	}
}

#[test]
fn test_comparison_matches_model() {
	for (x, y) in pairs(3) {
		assert_eq!(x.cmp(y), reference::big(x).cmp(&reference::big(y)));
		assert_eq!(x.scmp(y), reference::signed(x).cmp(&reference::signed(y)));
		assert_eq!(x.lt(y), reference::big(x) < reference::big(y));
		assert_eq!(x.gt(y), reference::big(x) > reference::big(y));
		assert_eq!(x.slt(y), reference::signed(x) < reference::signed(y));
		assert_eq!(x.sgt(y), reference::signed(x) > reference::signed(y));
		assert_eq!(x < y, x.lt(y));
		assert_eq!(x == y, reference::big(x) == reference::big(y));
		assert_eq!(x.is_zero(), reference::is_zero(x));
	}
}

#[test]
fn test_signed_helpers_match_model() {
	for x in reference::edge_values() {
		assert_eq!(x.neg(), reference::from_signed(&-reference::signed(x)));
		assert_eq!(x.is_negative(), reference::signed(x) < BigInt::from(0));
		let abs = reference::signed(x);
		let abs = if abs < BigInt::from(0) { -abs } else { abs };
		assert_eq!(x.abs(), reference::from_signed(&abs));
	}
}

#[test]
fn test_byte_and_sign_extend_match_model() {
	let mut rng = StdRng::seed_from_u64(4);
	for _ in 0..200 {
		let x = reference::random(&mut rng);
		let bytes = reference::big(x).to_bytes_be();
		let mut padded = vec![0_u8; 32 - bytes.len()];
		padded.extend_from_slice(&bytes);
		for n in 0..34_u64 {
			let expected = if n < 32 { padded[n as usize] } else { 0 };
			assert_eq!(x.byte(U256::from_u64(n)), U256::from_u64(expected as u64));
		}

		for b in 0..32_u64 {
			let got = x.sign_extend(U256::from_u64(b));
			if b >= 31 {
				assert_eq!(got, x);
				continue;
			}
			let bits = 8 * (b as u32 + 1);
			let low = reference::shr(reference::shl(x, 256 - bits), 256 - bits);
			let expected = if x.bit(bits - 1) { reference::or(low, reference::shl(U256::MAX, bits)) } else { low };
			assert_eq!(got, expected);
		}
	}
}

#[test]
fn test_sqrt_matches_model() {
	let mut rng = StdRng::seed_from_u64(5);
	for x in reference::edge_values() {
		assert_eq!(x.sqrt(), reference::sqrt(x));
	}
	for _ in 0..500 {
		let x = reference::random_sized(&mut rng);
		assert_eq!(x.sqrt(), reference::sqrt(x));
	}
}

#[test]
fn test_division_laws() {
	for (x, y) in pairs(6) {
		let (q, r) = x.div_rem(y);
		if y.is_zero() {
			assert_eq!((q, r), (U256::ZERO, U256::ZERO));
			continue;
		}
		assert_eq!(q.mul(y).add(r), x);
		assert!(r.lt(y));
		assert_eq!((q, r), reference::div_rem(x, y));
		assert_eq!(x.sdiv(y), reference::sdiv(x, y));
		assert_eq!(x.smod(y), reference::smod(x, y));
		assert_eq!(x.add_mod(y, y), reference::add_mod(x, y, y));
	}
}

#[test]
fn test_modular_matches_model() {
	let mut rng = StdRng::seed_from_u64(7);
	let cache = ReciprocalCache::default();
	for _ in 0..ROUNDS {
		let x = reference::random_sized(&mut rng);
		let y = reference::random_sized(&mut rng);
		let m = reference::random_sized(&mut rng);
		let expected = reference::mul_mod(x, y, m);
		assert_eq!(x.mul_mod(y, m), expected);
		assert_eq!(x.mul_mod_with_reciprocal(y, m, &Reciprocal::new(m)), expected);
		assert_eq!(x.mul_mod_cached(y, m, &cache), expected);
		assert_eq!(x.add_mod(y, m), reference::add_mod(x, y, m));
	}
}

// Every operation takes its operands by value, so the destination of the compound form may be
// either operand.
#[test]
fn test_aliasing() {
	let ops: [(fn(U256, U256) -> U256, fn(&mut U256, U256)); 8] = [
		(U256::add, |z, y| *z += y),
		(U256::sub, |z, y| *z -= y),
		(U256::mul, |z, y| *z *= y),
		(U256::div, |z, y| *z /= y),
		(U256::rem, |z, y| *z %= y),
		(U256::and, |z, y| *z &= y),
		(U256::or, |z, y| *z |= y),
		(U256::xor, |z, y| *z ^= y),
	];
	for (x, y) in pairs(8).into_iter().step_by(7) {
		for (op, op_assign) in ops {
			let expected = op(x, y);

			let mut z = x;
			op_assign(&mut z, y);
			assert_eq!(z, expected);

			let mut z = x;
			z = op(z, y);
			assert_eq!(z, expected);

			let mut z = y;
			z = op(x, z);
			assert_eq!(z, expected);

			let mut z = x;
			let w = z;
			op_assign(&mut z, w);
			assert_eq!(z, op(x, x));
		}
	}
}

#[test]
fn test_operands_unchanged() {
	let cache = ReciprocalCache::default();
	for (x, y) in pairs(9).into_iter().step_by(5) {
		let (x0, y0) = (x, y);
		let _ = x.add(y);
		let _ = x.mul(y);
		let _ = x.div_rem(y);
		let _ = x.sdiv(y);
		let _ = x.mul_mod_cached(y, y, &cache);
		let _ = x.sar(y.low_u64() as u32 % 300);
		assert_eq!(x.limbs, x0.limbs);
		assert_eq!(y.limbs, y0.limbs);
	}
}

#[test]
fn test_round_trips() {
	let mut values = reference::edge_values();
	let mut rng = StdRng::seed_from_u64(10);
	for _ in 0..500 {
		values.push(reference::random_sized(&mut rng));
	}
	for v in values {
		assert_eq!(U256::from_be_bytes(v.to_be_bytes()), v);
		assert_eq!(U256::from_be_slice(&v.to_be_bytes_trimmed()), v);
		assert_eq!(U256::from_biguint(&v.to_biguint()), (v, false));
		assert_eq!(U256::from_bigint(&v.to_bigint_signed()), (v, false));
		assert_eq!(U256::from_hex(&v.to_hex()), Ok(v));
		assert_eq!(U256::from_decimal(&v.to_decimal()), Ok(v));
		assert_eq!(v.to_string().parse::<U256>(), Ok(v));
		assert_eq!(v.to_biguint(), reference::big(v));
		assert_eq!(v.to_decimal(), reference::big(v).to_string());
	}
}

#[test]
fn test_cache_transparency_under_contention() {
	reference::init_logging();
	let cache = ReciprocalCache::new(CacheConfig { index_bits: 1, ways: 2, fixed_modulus: None }).unwrap();
	let mut rng = StdRng::seed_from_u64(11);
	let moduli: Vec<U256> = (0..16).map(|_| reference::random(&mut rng).add_u64(1)).collect();

	std::thread::scope(|s| {
		for t in 0..4_u64 {
			let cache = &cache;
			let moduli = &moduli;
			s.spawn(move || {
				let mut rng = StdRng::seed_from_u64(100 + t);
				for i in 0..500 {
					let m = moduli[(i * 7 + t as usize) % moduli.len()];
					let x = reference::random(&mut rng);
					let y = reference::random(&mut rng);
					let expected = reference::mul_mod(x, y, m);
					assert_eq!(x.mul_mod_cached(y, m, cache), expected);
					if let Some(r) = cache.get(m) {
						assert_eq!(x.mul_mod_with_reciprocal(y, m, &r), expected);
					}
				}
			});
		}
	});
	assert!(cache.len() <= 4);
}

//--------------------------------------------------------------------------------------------------
// scenarios

#[test]
fn test_all_ones_plus_one() {
	assert_eq!(U256::MAX.add_overflow(U256::ONE), (U256::ZERO, true));
}

#[test]
fn test_divide_by_zero_is_zero() {
	assert_eq!(U256::from_u64(100).div(U256::ZERO), U256::ZERO);
	assert_eq!(U256::from_u64(100).rem(U256::ZERO), U256::ZERO);
	assert_eq!(U256::from_u64(100).sdiv(U256::ZERO), U256::ZERO);
	assert_eq!(U256::from_u64(100).smod(U256::ZERO), U256::ZERO);
}

#[test]
fn test_shift_to_top_bit() {
	assert_eq!(U256::ONE.shl(255), U256::from_limbs([0, 0, 0, 1 << 63]));
	assert_eq!(U256::ONE.shl(256), U256::ZERO);
}

#[test]
fn test_sar_of_minus_one() {
	for n in 0..=300 {
		assert_eq!(U256::MAX.sar(n), U256::MAX);
	}
}

#[test]
fn test_signed_min_divided_by_minus_one() {
	assert_eq!(U256::SIGNED_MIN.sdiv(U256::MAX), U256::SIGNED_MIN);
	assert_eq!(U256::SIGNED_MIN.sdiv(U256::MAX), reference::sdiv(U256::SIGNED_MIN, U256::MAX));
	assert_eq!(U256::SIGNED_MIN.smod(U256::MAX), U256::ZERO);
}

#[test]
fn test_evicted_modulus_recomputes() {
	reference::init_logging();
	let ways = 3;
	let cache = ReciprocalCache::new(CacheConfig { index_bits: 0, ways, fixed_modulus: None }).unwrap();
	let moduli: Vec<U256> = (0..ways as u64 + 1).map(|i| U256::from_u64(1_000_003 + 2 * i)).collect();
	for &m in &moduli {
		cache.put(m, Reciprocal::new(m));
	}
	assert_eq!(cache.len(), ways);
	assert_eq!(cache.get(moduli[0]), None);
	for &m in &moduli[1..] {
		assert_eq!(cache.get(m), Some(Reciprocal::new(m)));
	}

	let x = U256::MAX;
	let y = U256::from_u64(123_456_789);
	let before = cache.stats();
	assert_eq!(x.mul_mod_cached(y, moduli[0], &cache), reference::mul_mod(x, y, moduli[0]));
	assert_eq!(cache.stats().misses, before.misses + 1);
	assert_eq!(cache.get(moduli[0]), Some(Reciprocal::new(moduli[0])));
	assert_eq!(cache.get(moduli[1]), None);
	assert_eq!(BigUint::from(x.mul_mod(y, moduli[0])), reference::big(reference::mul_mod(x, y, moduli[0])));
}
