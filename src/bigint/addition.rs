use core::cmp::Ordering::{Equal, Greater, Less};
use core::iter::Sum;
use core::mem;
use core::ops::{Add, AddAssign};

use num_traits::{CheckedAdd, Zero};

use super::{BigInt, Sign};
use crate::biguint::BigUint;

impl BigInt {
    /// Adds a signed magnitude to `self`.
    ///
    /// Equal signs add magnitudes and keep the sign. Different signs
    /// subtract the smaller magnitude from the larger, and the result takes
    /// the sign of the larger; a tie is zero.
    pub(crate) fn add_signed(self, other_sign: Sign, other: &BigUint) -> BigInt {
        if other.is_zero() {
            return self;
        }
        if self.sign == other_sign {
            return BigInt::from_biguint(self.sign, self.data + other);
        }
        match self.data.cmp(other) {
            Less => BigInt::from_biguint(other_sign, other - self.data),
            Greater => BigInt::from_biguint(self.sign, self.data - other),
            Equal => Zero::zero(),
        }
    }
}

forward_all_binop_to_val_ref_commutative!(impl Add for BigInt, add);
forward_val_assign!(impl AddAssign for BigInt, add_assign);

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: &BigInt) -> BigInt {
        self.add_signed(other.sign, &other.data)
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        let n = mem::take(self);
        *self = n + other;
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl<T> Sum<T> for BigInt
where
    BigInt: Add<T, Output = BigInt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}
