//! Random-number source for the sampler.
//!
//! Draws are bit-for-bit compatible with CPython's `random.Random`: same
//! Mersenne Twister, same seeding from a numeric seed and the same rejection
//! sampling for bounded integers. A sample taken with a given seed therefore
//! selects the same records as a reservoir sampler built on Python's `random`
//! module.

use log::debug;
use rand::{Rng, RngCore};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

// Modulus of Python's numeric hash on 64-bit platforms.
const HASH_MODULUS: u64 = (1 << 61) - 1;
const HASH_BITS: i64 = 61;

/// Uniform integer draws over a closed range.
pub trait UniformDraw{
    /// Returns an integer uniformly distributed in `[0, upper]`, both ends inclusive.
    fn draw_inclusive(&mut self, upper: u64) -> u64;
}

/// MT19937, 32-bit output.
#[derive(Clone)]
pub struct Mt19937{
    state: [u32; N],
    index: usize,
}

impl Mt19937{
    fn from_init_genrand(seed: u32) -> Self{
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N{
            state[i] = 1_812_433_253u32
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        Mt19937{state, index: N}
    }

    /// Seeds from a key of 32-bit words (`init_by_array`).
    pub fn from_key(key: &[u32]) -> Self{
        let mut mt = Self::from_init_genrand(19_650_218);
        let s = &mut mt.state;
        let key_len = key.len().max(1);
        let (mut i, mut j) = (1usize, 0usize);

        for _ in 0..N.max(key_len){
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            let word = key.get(j).copied().unwrap_or(0);
            s[i] = (s[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(word)
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N{
                s[0] = s[N - 1];
                i = 1;
            }
            if j >= key_len{
                j = 0;
            }
        }
        for _ in 0..N - 1{
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            s[i] = (s[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N{
                s[0] = s[N - 1];
                i = 1;
            }
        }
        s[0] = 0x8000_0000; // MSB is 1, assuring non-zero initial array
        mt
    }

    /// Seeds the generator the way `random.Random(seed)` does for a float seed.
    pub fn from_seed(seed: f64) -> Self{
        let key = seed_key(seed);
        debug!("Seeding Mersenne Twister from {} with key {:?}", seed, key);
        Self::from_key(&key)
    }

    /// Seeds from the operating system's entropy through the thread RNG.
    pub fn from_entropy() -> Self{
        let mut key = [0u32; N];
        rand::rng().fill(&mut key[..]);
        debug!("Seeding Mersenne Twister from entropy");
        Self::from_key(&key)
    }

    fn generate(&mut self){
        for k in 0..N{
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.state[k] = self.state[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    pub fn next_word(&mut self) -> u32{
        if self.index >= N{
            self.generate();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Integer with `k` random bits, `k <= 64`. Words are consumed little-endian.
    pub fn getrandbits(&mut self, k: u32) -> u64{
        debug_assert!(k <= 64);
        if k == 0{
            return 0;
        }
        if k <= 32{
            return (self.next_word() >> (32 - k)) as u64;
        }
        let low = self.next_word() as u64;
        let high = (self.next_word() >> (64 - k)) as u64;
        (high << 32) | low
    }

    /// Integer uniformly distributed in `[0, n)`. `n` must be positive.
    pub fn below(&mut self, n: u64) -> u64{
        debug_assert!(n > 0);
        let k = u64::BITS - n.leading_zeros();
        let mut r = self.getrandbits(k);
        while r >= n{
            r = self.getrandbits(k);
        }
        r
    }
}

impl UniformDraw for Mt19937{
    fn draw_inclusive(&mut self, upper: u64) -> u64{
        match upper.checked_add(1){
            Some(n) => self.below(n),
            None => self.getrandbits(64),
        }
    }
}

impl RngCore for Mt19937{
    fn next_u32(&mut self) -> u32{
        self.next_word()
    }

    fn next_u64(&mut self) -> u64{
        self.getrandbits(64)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]){
        for chunk in dst.chunks_mut(4){
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

// Python's hash() of a finite float: the exact rational value reduced modulo 2^61 - 1.
fn python_float_hash(seed: f64) -> i64{
    if seed == 0.0{
        return 0;
    }
    let bits = seed.to_bits();
    let negative = bits >> 63 == 1;
    let biased_exp = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exp) = if biased_exp == 0{
        (fraction, -1074) // subnormal
    } else {
        (fraction | (1 << 52), biased_exp - 1075)
    };

    // 2^61 = 1 (mod 2^61 - 1), so 2^exp reduces to 2^(exp mod 61)
    let shift = exp.rem_euclid(HASH_BITS) as u32;
    let x = ((mantissa as u128 * (1u128 << shift)) % HASH_MODULUS as u128) as i64;
    let x = if negative { -x } else { x };
    if x == -1 { -2 } else { x }
}

// Key words for init_by_array: the hash as an unsigned 64-bit integer, least significant word first.
fn seed_key(seed: f64) -> Vec<u32>{
    let mut n = python_float_hash(seed) as u64;
    if n == 0{
        return vec![0];
    }
    let mut key = Vec::with_capacity(2);
    while n > 0{
        key.push(n as u32);
        n >>= 32;
    }
    key
}

#[cfg(test)]
mod tests{
    use super::*;

    // Reference values below were produced with CPython's random.Random.

    #[test]
    fn reference_words_for_integer_key(){
        // random.Random(5489).getrandbits(32)
        let mut mt = Mt19937::from_key(&[5489]);
        assert_eq!(mt.next_word(), 3_382_763_572);
        assert_eq!(mt.next_word(), 956_215_839);
    }

    #[test]
    fn reference_words_for_float_seed(){
        let mut mt = Mt19937::from_seed(1.0);
        assert_eq!(mt.next_u32(), 577_090_037);
        assert_eq!(mt.next_u32(), 2_444_712_010);
        assert_eq!(mt.next_u32(), 3_639_700_191);
    }

    #[test]
    fn reference_bounded_draws(){
        let uppers = [1u64, 3, 4, 9, 999, (1 << 40) - 1, 6];
        let expected: [(f64, [u64; 7]); 5] = [
            (1.0, [0, 0, 2, 1, 507, 991_110_786_884, 3]),
            (0.0, [1, 3, 0, 4, 988, 1_067_347_797_602, 3]),
            (2.5, [1, 2, 1, 0, 344, 759_266_973_909, 6]),
            (-3.0, [1, 2, 1, 0, 653, 114_562_450_180, 0]),
            (0.1, [0, 1, 3, 6, 236, 865_058_200_695, 5]),
        ];
        for (seed, values) in expected.iter(){
            let mut mt = Mt19937::from_seed(*seed);
            let drawn: Vec<u64> = uppers.iter().map(|&u| mt.draw_inclusive(u)).collect();
            assert_eq!(drawn, values.to_vec(), "seed {}", seed);
        }
    }

    #[test]
    fn float_hash_matches_python(){
        assert_eq!(python_float_hash(1.0), 1);
        assert_eq!(python_float_hash(-1.0), -2);
        assert_eq!(python_float_hash(-3.0), -3);
        assert_eq!(python_float_hash(0.5), 1 << 60);
        assert_eq!(python_float_hash(2.5), 1_152_921_504_606_846_978);
        assert_eq!(python_float_hash(1e20), 848_750_603_811_160_107);
    }

    #[test]
    fn separate_generators_do_not_share_state(){
        let mut a = Mt19937::from_seed(7.0);
        let mut b = Mt19937::from_seed(7.0);
        let _ = Mt19937::from_seed(8.0).next_word();
        for _ in 0..1000{
            assert_eq!(a.below(1_000_000), b.below(1_000_000));
        }
    }

    #[test]
    fn draws_stay_in_range(){
        let mut mt = Mt19937::from_entropy();
        for upper in [0u64, 1, 2, 7, 100, u32::MAX as u64, u64::MAX]{
            for _ in 0..100{
                assert!(mt.draw_inclusive(upper) <= upper);
            }
        }
    }
}
