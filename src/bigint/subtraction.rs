use core::mem;
use core::ops::{Sub, SubAssign};

use num_traits::CheckedSub;

use super::BigInt;

forward_val_val_binop!(impl Sub for BigInt, sub);
forward_ref_ref_binop!(impl Sub for BigInt, sub);
forward_val_assign!(impl SubAssign for BigInt, sub_assign);

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = BigInt;

    /// Adds the negated operand.
    #[inline]
    fn sub(self, other: &BigInt) -> BigInt {
        self.add_signed(-other.sign, &other.data)
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: BigInt) -> BigInt {
        -(other - self)
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        let n = mem::take(self);
        *self = n - other;
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        Some(self - v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_sub() {
        let cases: [(i64, i64, i64); 6] = [
            (5, 3, 2),
            (3, 5, -2),
            (-5, 3, -8),
            (-5, -3, -2),
            (5, -3, 8),
            (4, 4, 0),
        ];
        for (a, b, c) in cases {
            let (a, b, c) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
            assert_eq!(&a - &b, c);
            assert_eq!(&a - b.clone(), c);
            assert_eq!(a.clone() - b.clone(), c);
            let mut d = a.clone();
            d -= &b;
            assert_eq!(d, c);
        }
    }

    #[test]
    fn test_sub_zero() {
        let a = BigInt::from(-17);
        assert_eq!(&a - &BigInt::zero(), a);
        assert_eq!(BigInt::zero() - &a, BigInt::from(17));
        assert_eq!((&a - &a).sign(), crate::Sign::Plus);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            BigInt::from(1).checked_sub(&BigInt::from(2)),
            Some(BigInt::from(-1))
        );
    }
}
