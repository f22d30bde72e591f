use core::iter::Product;
use core::ops::{Mul, MulAssign};

use num_traits::{CheckedMul, One, Zero};
use smallvec::smallvec;

use super::{BigUint, __add2};
use crate::big_digit::{self, BigDigit, DoubleBigDigit};

/// Computes `a + b * c + acc`, returning the low limb and leaving the carry
/// in `acc`.
///
/// With `R = 2^32` the sum is at most `R^2 - 1`, so it never overflows the
/// double-width accumulator.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b) * DoubleBigDigit::from(c);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Three argument multiply accumulate:
/// acc += b * c
pub fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    if carry != 0 {
        let final_carry = __add2(a_hi, &[carry as BigDigit]);
        assert_eq!(final_carry, 0, "carry overflow during multiplication!");
    }
}

/// Three argument multiply accumulate:
/// acc += b * c
///
/// Schoolbook convolution: every limb of the shorter operand scales the
/// longer one into `acc`, shifted to its position. `acc` must have room for
/// `b.len() + c.len() + 1` limbs.
pub fn mac3(acc: &mut [BigDigit], b: &[BigDigit], c: &[BigDigit]) {
    let (x, y) = if b.len() < c.len() { (b, c) } else { (c, b) };

    for (i, xi) in x.iter().enumerate() {
        mac_digit(&mut acc[i..], y, *xi);
    }
}

/// Schoolbook product of two magnitudes.
pub fn mul3(x: &[BigDigit], y: &[BigDigit]) -> BigUint {
    let len = x.len() + y.len() + 1;
    let mut prod = BigUint {
        data: smallvec![0; len],
    };

    mac3(&mut prod.data[..], x, y);
    prod.normalized()
}

/// In-place multiplication by a single limb.
pub fn scalar_mul(a: &mut BigUint, b: BigDigit) {
    match b {
        0 => a.set_zero(),
        1 => {}
        _ => {
            let mut carry = 0;
            for a in a.data.iter_mut() {
                *a = mac_with_carry(0, *a, b, &mut carry);
            }
            if carry != 0 {
                a.data.push(carry as BigDigit);
            }
            a.normalize();
        }
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigUint, mul);
forward_val_assign!(impl MulAssign for BigUint, mul_assign);

impl<'a, 'b> Mul<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn mul(self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        mul3(&self.data[..], &other.data[..])
    }
}

impl<'a> MulAssign<&'a BigUint> for BigUint {
    #[inline]
    fn mul_assign(&mut self, other: &'a BigUint) {
        *self = &*self * other
    }
}

impl Mul<BigDigit> for BigUint {
    type Output = BigUint;

    #[inline]
    fn mul(mut self, other: BigDigit) -> BigUint {
        self *= other;
        self
    }
}

impl MulAssign<BigDigit> for BigUint {
    #[inline]
    fn mul_assign(&mut self, other: BigDigit) {
        scalar_mul(self, other);
    }
}

impl CheckedMul for BigUint {
    #[inline]
    fn checked_mul(&self, v: &BigUint) -> Option<BigUint> {
        Some(self * v)
    }
}

impl<T> Product<T> for BigUint
where
    BigUint: Mul<T, Output = BigUint>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(One::one(), |a, b| a * b)
    }
}
