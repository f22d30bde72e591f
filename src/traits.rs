use num_traits::{Signed, ToPrimitive};

use crate::{BigInt, BigUint, Sign};

/// A generic trait for converting a value to a [`BigInt`].
///
/// Returns `None` only for values with no integer counterpart.
pub trait ToBigInt {
    /// Converts the value of `self` to a [`BigInt`].
    fn to_bigint(&self) -> Option<BigInt>;
}

/// A generic trait for converting a value to a [`BigUint`].
///
/// Returns `None` for negative values.
pub trait ToBigUint {
    /// Converts the value of `self` to a [`BigUint`].
    fn to_biguint(&self) -> Option<BigUint>;
}

impl ToBigInt for BigInt {
    #[inline]
    fn to_bigint(&self) -> Option<BigInt> {
        Some(self.clone())
    }
}

impl ToBigInt for BigUint {
    #[inline]
    fn to_bigint(&self) -> Option<BigInt> {
        Some(BigInt::from_biguint(Sign::Plus, self.clone()))
    }
}

impl ToBigUint for BigUint {
    #[inline]
    fn to_biguint(&self) -> Option<BigUint> {
        Some(self.clone())
    }
}

impl ToBigUint for BigInt {
    #[inline]
    fn to_biguint(&self) -> Option<BigUint> {
        if self.is_negative() {
            None
        } else {
            Some(self.magnitude().clone())
        }
    }
}

macro_rules! impl_to_bigint {
    ($T:ty) => {
        impl ToBigInt for $T {
            #[inline]
            fn to_bigint(&self) -> Option<BigInt> {
                Some(BigInt::from(*self))
            }
        }
    };
}

impl_to_bigint!(isize);
impl_to_bigint!(i8);
impl_to_bigint!(i16);
impl_to_bigint!(i32);
impl_to_bigint!(i64);
impl_to_bigint!(i128);
impl_to_bigint!(usize);
impl_to_bigint!(u8);
impl_to_bigint!(u16);
impl_to_bigint!(u32);
impl_to_bigint!(u64);
impl_to_bigint!(u128);

macro_rules! impl_to_biguint {
    ($T:ty) => {
        impl ToBigUint for $T {
            #[inline]
            fn to_biguint(&self) -> Option<BigUint> {
                self.to_u128().map(BigUint::from)
            }
        }
    };
}

impl_to_biguint!(isize);
impl_to_biguint!(i8);
impl_to_biguint!(i16);
impl_to_biguint!(i32);
impl_to_biguint!(i64);
impl_to_biguint!(i128);
impl_to_biguint!(usize);
impl_to_biguint!(u8);
impl_to_biguint!(u16);
impl_to_biguint!(u32);
impl_to_biguint!(u64);
impl_to_biguint!(u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_biguint() {
        assert_eq!(5i8.to_biguint(), Some(BigUint::from(5u32)));
        assert_eq!((-5i64).to_biguint(), None);
        assert_eq!(u128::MAX.to_biguint(), Some(BigUint::from(u128::MAX)));
        assert_eq!(BigInt::from(-1).to_biguint(), None);
        assert_eq!(BigInt::from(9).to_biguint(), Some(BigUint::from(9u32)));
    }

    #[test]
    fn test_to_bigint() {
        assert_eq!((-5i64).to_bigint(), Some(BigInt::from(-5)));
        assert_eq!(i128::MIN.to_bigint(), Some(BigInt::from(i128::MIN)));
        assert_eq!(
            BigUint::from(7u32).to_bigint(),
            Some(BigInt::from(7))
        );
    }
}
