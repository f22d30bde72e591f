use core::iter::Sum;
use core::ops::{Add, AddAssign};

use num_traits::{CheckedAdd, Zero};

use super::BigUint;
use crate::big_digit::{self, BigDigit, DoubleBigDigit};

/// Adds `a + b + acc`, returning the low limb and leaving the carry in `acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the carry.
///
/// This is used when the data `Vec` might need to resize to push a non-zero carry, so we perform
/// the addition first hoping that it will fit.
///
/// The caller _must_ ensure that `a` is at least as long as `b`.
#[inline]
pub fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as BigDigit
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
pub fn add2(a: &mut [BigDigit], b: &[BigDigit]) {
    let carry = __add2(a, b);

    assert!(carry == 0, "carry overflow during addition");
}

forward_all_binop_to_val_ref_commutative!(impl Add for BigUint, add);
forward_val_assign!(impl AddAssign for BigUint, add_assign);

impl<'a> Add<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn add(mut self, other: &BigUint) -> BigUint {
        self += other;
        self
    }
}

impl<'a> AddAssign<&'a BigUint> for BigUint {
    #[inline]
    fn add_assign(&mut self, other: &BigUint) {
        let self_len = self.data.len();
        let carry = if self_len < other.data.len() {
            let lo_carry = __add2(&mut self.data[..], &other.data[..self_len]);
            self.data.extend_from_slice(&other.data[self_len..]);
            __add2(&mut self.data[self_len..], &[lo_carry])
        } else {
            __add2(&mut self.data[..], &other.data[..])
        };
        if carry != 0 {
            self.data.push(carry);
        }
    }
}

impl Add<BigDigit> for BigUint {
    type Output = BigUint;

    #[inline]
    fn add(mut self, other: BigDigit) -> BigUint {
        self += other;
        self
    }
}

impl AddAssign<BigDigit> for BigUint {
    #[inline]
    fn add_assign(&mut self, other: BigDigit) {
        if other != 0 {
            let carry = __add2(&mut self.data[..], &[other]);
            if carry != 0 {
                self.data.push(carry);
            }
        }
    }
}

impl CheckedAdd for BigUint {
    #[inline]
    fn checked_add(&self, v: &BigUint) -> Option<BigUint> {
        Some(self + v)
    }
}

impl<T> Sum<T> for BigUint
where
    BigUint: Add<T, Output = BigUint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc() {
        let mut carry = 0;
        assert_eq!(adc(!0, 1, &mut carry), 0);
        assert_eq!(carry, 1);
        assert_eq!(adc(!0, !0, &mut carry), !0);
        assert_eq!(carry, 1);
        assert_eq!(adc(1, 2, &mut carry), 4);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add2_propagates_carry() {
        let mut a = [!0, !0, 0];
        add2(&mut a, &[1]);
        assert_eq!(a, [0, 0, 1]);
    }

    #[test]
    fn test_add_grows_by_one_limb() {
        let a = BigUint::from_slice(&[!0, !0]);
        let b = BigUint::from_slice(&[1]);
        assert_eq!((&a + &b).digits(), &[0, 0, 1]);
        assert_eq!((&b + &a).digits(), &[0, 0, 1]);
    }

    #[test]
    fn test_add_zero() {
        let a = BigUint::from_slice(&[3, 9]);
        assert_eq!(&a + BigUint::zero(), a);
        assert_eq!(BigUint::zero() + &a, a);
        assert_eq!(BigUint::zero() + BigUint::zero(), BigUint::zero());
    }

    #[test]
    fn test_add_digit() {
        let mut a = BigUint::from_slice(&[!0]);
        a += 1u32;
        assert_eq!(a.digits(), &[0, 1]);
        assert_eq!((BigUint::zero() + 0u32).digits(), &[0]);
    }

    #[test]
    fn test_sum() {
        let values = [
            BigUint::from_slice(&[!0]),
            BigUint::from_slice(&[1]),
            BigUint::from_slice(&[0, 2]),
        ];
        let total: BigUint = values.iter().sum();
        assert_eq!(total.digits(), &[0, 3]);
    }
}
