//! Randomization of big integers
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use alloc::vec;

use rand::prelude::*;

use crate::BigInt;
use crate::BigUint;
use crate::Sign::*;
use crate::big_digit::{BITS, BigDigit};

use num_traits::Zero;

/// A trait for sampling random big integers.
///
/// The `rand` feature must be enabled to use this.
pub trait RandBigInt {
    /// Generate a random [`BigUint`] of the given bit size.
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint;

    /// Generate a random [`BigInt`] of the given bit size.
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt;

    /// Generate a random [`BigUint`] less than the given bound. Fails
    /// when the bound is zero.
    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint;

    /// Generate a random [`BigUint`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint;

    /// Generate a random [`BigInt`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

fn gen_bits<R: Rng + ?Sized>(rng: &mut R, data: &mut [BigDigit], rem: u64) {
    // `fill` is faster than many `random::<u32>` calls
    rng.fill(data);
    if rem > 0 {
        let last = data.len() - 1;
        data[last] >>= BITS as u64 - rem;
    }
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint {
        let digits = bit_size / BITS as u64;
        let rem = bit_size % BITS as u64;
        let len = usize::try_from(digits + (rem > 0) as u64).unwrap_or(usize::MAX);
        let mut data = vec![0 as BigDigit; len];
        gen_bits(self, &mut data, rem);
        BigUint::new(data)
    }

    fn gen_bigint(&mut self, bit_size: u64) -> BigInt {
        loop {
            let biguint = self.gen_biguint(bit_size);
            // Zero has a single representation, so half of its draws are
            // retried to keep it as likely as any other value.
            let sign = if biguint.is_zero() {
                if self.random() {
                    continue;
                } else {
                    Plus
                }
            } else if self.random() {
                Plus
            } else {
                Minus
            };
            return BigInt::from_biguint(sign, biguint);
        }
    }

    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint {
        assert!(!bound.is_zero());
        let bits = bound.bits();
        loop {
            let n = self.gen_biguint(bits);
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint {
        assert!(*lbound < *ubound);
        if lbound.is_zero() {
            self.gen_biguint_below(ubound)
        } else {
            lbound + self.gen_biguint_below(&(ubound - lbound))
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(*lbound < *ubound);
        if lbound.is_zero() {
            BigInt::from(self.gen_biguint_below(ubound.magnitude()))
        } else if ubound.is_zero() {
            lbound + BigInt::from(self.gen_biguint_below(lbound.magnitude()))
        } else {
            let delta = ubound - lbound;
            lbound + BigInt::from(self.gen_biguint_below(delta.magnitude()))
        }
    }
}

/// A random distribution for [`BigUint`] and [`BigInt`] values of a particular bit size.
///
/// The `rand` feature must be enabled to use this.
#[derive(Clone, Copy, Debug)]
pub struct RandomBits {
    bits: u64,
}

impl RandomBits {
    #[inline]
    pub fn new(bits: u64) -> RandomBits {
        RandomBits { bits }
    }
}

impl Distribution<BigUint> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint(self.bits)
    }
}

impl Distribution<BigInt> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint(self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_gen_biguint_bits() {
        let mut rng = rng();
        for bits in [0u64, 1, 31, 32, 33, 64, 100, 257] {
            for _ in 0..20 {
                let n = rng.gen_biguint(bits);
                assert!(n.bits() <= bits);
                assert_eq!(n.digits().last() == Some(&0), n.is_zero());
            }
        }
    }

    #[test]
    fn test_gen_below_and_range() {
        let mut rng = rng();
        let bound = BigUint::from_slice(&[7, 0, 3]);
        let low = BigUint::from_slice(&[5, 9]);
        for _ in 0..50 {
            assert!(rng.gen_biguint_below(&bound) < bound);
            let n = rng.gen_biguint_range(&low, &bound);
            assert!(low <= n && n < bound);
        }
    }

    #[test]
    fn test_gen_bigint_range() {
        let mut rng = rng();
        let cases = [(-100i64, 100i64), (-1 << 40, 0), (0, 1 << 40), (-5, -1), (3, 4)];
        for (lo, hi) in cases {
            let (l, u) = (BigInt::from(lo), BigInt::from(hi));
            for _ in 0..50 {
                let n = rng.gen_bigint_range(&l, &u);
                assert!(l <= n && n < u, "{} not in [{}, {})", n, l, u);
            }
        }
    }

    #[test]
    fn test_random_bits_signs() {
        let mut rng = rng();
        let dist = RandomBits::new(70);
        let values: alloc::vec::Vec<BigInt> = (0..64).map(|_| dist.sample(&mut rng)).collect();
        assert!(values.iter().any(|n| n.sign() == Minus));
        assert!(values.iter().any(|n| n.sign() == Plus));
        assert!(values.iter().all(|n| n.bits() <= 70));
    }

    #[test]
    #[should_panic]
    fn test_gen_below_zero_bound() {
        rng().gen_biguint_below(&BigUint::zero());
    }
}
