use core::iter::Product;
use core::ops::{Mul, MulAssign};

use num_traits::{CheckedMul, One, Zero};

use super::BigInt;

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);
forward_val_assign!(impl MulAssign for BigInt, mul_assign);

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// A zero factor short-circuits to zero without running the
    /// convolution.
    #[inline]
    fn mul(self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return Zero::zero();
        }
        BigInt::from_biguint(self.sign * other.sign, &self.data * &other.data)
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl<T> Product<T> for BigInt
where
    BigInt: Mul<T, Output = BigInt>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(One::one(), |a, b| a * b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign::{Minus, Plus};
    use alloc::string::ToString;

    #[test]
    fn test_mul_signs() {
        assert_eq!(BigInt::from(-7) * BigInt::from(-3), BigInt::from(21));
        assert_eq!(BigInt::from(-7) * BigInt::from(3), BigInt::from(-21));
        assert_eq!(BigInt::from(7) * BigInt::from(-3), BigInt::from(-21));
        assert_eq!(BigInt::from(7) * BigInt::from(3), BigInt::from(21));
    }

    #[test]
    fn test_mul_zero_is_positive() {
        let z = BigInt::from(-5) * BigInt::zero();
        assert!(z.is_zero());
        assert_eq!(z.sign(), Plus);
        let mut m = BigInt::from_slice(Minus, &[1, 2]);
        m *= BigInt::zero();
        assert_eq!(m, BigInt::zero());
    }

    #[test]
    fn test_mul_large() {
        let a: BigInt = "123456789123456789123456789".parse().unwrap();
        let b = BigInt::from(2);
        assert_eq!((&a * &b).to_string(), "246913578246913578246913578");
        assert_eq!((&b * &a).to_string(), "246913578246913578246913578");
    }

    #[test]
    fn test_product() {
        let p: BigInt = [-2, 3, -4].iter().map(|&n| BigInt::from(n)).product();
        assert_eq!(p, BigInt::from(24));
    }
}
