use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_integer::Integer;
use num_traits::{CheckedDiv, CheckedRem, Zero};

use super::BigInt;
use crate::Error;

impl BigInt {
    /// Truncating division with remainder.
    ///
    /// The quotient's sign is the product of the operand signs and the
    /// remainder takes the sign of `self`, so `self == q * other + r` and
    /// `|r| < |other|`. A zero divisor is [`Error::DivisionByZero`].
    pub fn try_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_rem(other))
    }

    /// Truncating division, failing with [`Error::DivisionByZero`].
    #[inline]
    pub fn try_div(&self, other: &BigInt) -> Result<BigInt, Error> {
        self.try_div_rem(other).map(|(q, _)| q)
    }

    /// Truncating remainder, failing with [`Error::DivisionByZero`].
    #[inline]
    pub fn try_rem(&self, other: &BigInt) -> Result<BigInt, Error> {
        self.try_div_rem(other).map(|(_, r)| r)
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);
forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);
forward_val_assign!(impl DivAssign for BigInt, div_assign);
forward_val_assign!(impl RemAssign for BigInt, rem_assign);

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        let (q, _) = self.div_rem(other);
        q
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        let (_, r) = self.div_rem(other);
        r
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, v: &BigInt) -> Option<BigInt> {
        self.try_rem(v).ok()
    }
}
