use num_traits::{Pow, Signed};

use super::{BigInt, Minus, Plus};
use crate::Error;

macro_rules! pow_impl {
    ($T:ty) => {
        impl Pow<$T> for BigInt {
            type Output = BigInt;

            /// A negative base keeps its sign only for odd exponents.
            #[inline]
            fn pow(self, exp: $T) -> BigInt {
                let sign = if self.sign == Minus && exp % 2 == 1 { Minus } else { Plus };
                BigInt::from_biguint(sign, Pow::pow(self.data, exp))
            }
        }

        impl<'b> Pow<&'b $T> for BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: &$T) -> BigInt {
                Pow::pow(self, *exp)
            }
        }

        impl<'a> Pow<$T> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: $T) -> BigInt {
                let sign = if self.sign == Minus && exp % 2 == 1 { Minus } else { Plus };
                BigInt::from_biguint(sign, Pow::pow(&self.data, exp))
            }
        }

        impl<'a, 'b> Pow<&'b $T> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: &$T) -> BigInt {
                Pow::pow(self, *exp)
            }
        }
    };
}

pow_impl!(u8);
pow_impl!(u16);
pow_impl!(u32);
pow_impl!(u64);
pow_impl!(usize);

impl BigInt {
    /// Truncated integer square root, failing with [`Error::NegativeSqrt`]
    /// for a negative value.
    pub fn try_sqrt(&self) -> Result<BigInt, Error> {
        if self.is_negative() {
            return Err(Error::NegativeSqrt);
        }
        Ok(BigInt::from(self.data.sqrt()))
    }

    /// Raises `self` to a native exponent by square-and-multiply.
    #[inline]
    pub fn power(&self, exp: u64) -> BigInt {
        Pow::pow(self, exp)
    }

    /// Integer square root of a non-negative value.
    ///
    /// Panics on a negative value; see [`BigInt::try_sqrt`].
    pub fn sqrt(&self) -> BigInt {
        match self.try_sqrt() {
            Ok(root) => root,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_pow_sign() {
        assert_eq!(BigInt::from(-2).power(3), BigInt::from(-8));
        assert_eq!(BigInt::from(-2).power(4), BigInt::from(16));
        assert_eq!(BigInt::from(-2).power(0), BigInt::one());
        assert_eq!(BigInt::zero().power(0), BigInt::one());
        assert_eq!(Pow::pow(BigInt::from(-3), 3u8), BigInt::from(-27));
        assert_eq!(Pow::pow(&BigInt::from(10), &2usize), BigInt::from(100));
    }

    #[test]
    fn test_pow_exponent_addition() {
        let x = BigInt::from(-123_456_789);
        for (a, b) in [(0u64, 5u64), (3, 4), (7, 9), (1, 16)] {
            assert_eq!(x.power(a + b), x.power(a) * x.power(b));
        }
    }

    #[test]
    fn test_try_sqrt() {
        assert_eq!(BigInt::from(64).try_sqrt(), Ok(BigInt::from(8)));
        assert_eq!(BigInt::from(65).try_sqrt(), Ok(BigInt::from(8)));
        assert_eq!(BigInt::zero().try_sqrt(), Ok(BigInt::zero()));
        assert_eq!(BigInt::from(-4).try_sqrt(), Err(Error::NegativeSqrt));
    }

    #[test]
    #[should_panic(expected = "square root of negative number")]
    fn test_sqrt_negative_panics() {
        BigInt::from(-1).sqrt();
    }
}
