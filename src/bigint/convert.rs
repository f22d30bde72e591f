use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};

use super::{BigInt, Minus, Plus, Sign};
use crate::Error;
use crate::biguint::BigUint;

impl BigInt {
    /// Builds a value from a sign and decimal digit values, most
    /// significant first.
    ///
    /// Any value above nine, or an empty sequence, is
    /// [`Error::InvalidNumber`].
    pub fn from_decimal_digits(sign: Sign, digits: &[u8]) -> Result<BigInt, Error> {
        BigUint::from_decimal_digits(digits).map(|data| BigInt::from_biguint(sign, data))
    }

    /// Canonical decimal text: a leading `-` only for negative values,
    /// `"0"` for zero.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.data.to_decimal_string();
        match self.sign {
            Minus => {
                let mut s = String::with_capacity(digits.len() + 1);
                s.push('-');
                s.push_str(&digits);
                s
            }
            Plus => digits,
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optional `+` or `-` followed by decimal digits only.
    fn from_str(s: &str) -> Result<BigInt, Error> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Minus, rest),
            None => (Plus, s),
        };
        if sign == Minus && digits.starts_with('+') {
            return Err(Error::InvalidNumber);
        }
        let data: BigUint = digits.parse()?;
        Ok(BigInt::from_biguint(sign, data))
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    /// Only radix 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, Error> {
        if radix != 10 {
            return Err(Error::InvalidNumber);
        }
        s.parse()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign == Plus, "", &self.data.to_decimal_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<BigUint> for BigInt {
    #[inline]
    fn from(n: BigUint) -> Self {
        BigInt::from_biguint(Plus, n)
    }
}

impl From<i64> for BigInt {
    #[inline]
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Minus } else { Plus };
        BigInt::from_biguint(sign, BigUint::from(n.unsigned_abs()))
    }
}

impl From<i128> for BigInt {
    #[inline]
    fn from(n: i128) -> Self {
        let sign = if n < 0 { Minus } else { Plus };
        BigInt::from_biguint(sign, BigUint::from(n.unsigned_abs()))
    }
}

macro_rules! impl_bigint_from_int {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as i64)
            }
        }
    };
}

impl_bigint_from_int!(i8);
impl_bigint_from_int!(i16);
impl_bigint_from_int!(i32);
impl_bigint_from_int!(isize);

macro_rules! impl_bigint_from_uint {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from_biguint(Plus, BigUint::from(n))
            }
        }
    };
}

impl_bigint_from_uint!(u8);
impl_bigint_from_uint!(u16);
impl_bigint_from_uint!(u32);
impl_bigint_from_uint!(u64);
impl_bigint_from_uint!(u128);
impl_bigint_from_uint!(usize);

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        let m = self.data.to_u128()?;
        match self.sign {
            Plus => i128::try_from(m).ok(),
            Minus if m == 1 << 127 => Some(i128::MIN),
            Minus => i128::try_from(m).ok().map(|n| -n),
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        match self.sign {
            Plus => self.data.to_u64(),
            Minus => None,
        }
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Plus => self.data.to_u128(),
            Minus => None,
        }
    }
}
