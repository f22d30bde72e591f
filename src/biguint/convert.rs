use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};
use smallvec::SmallVec;

use super::{BigUint, div_rem_digit, scalar_mul};
use crate::Error;
use crate::big_digit::{self, BigDigit, DEC_CHUNK, DEC_CHUNK_DIGITS};

impl BigUint {
    /// Builds a magnitude from decimal digit values, most significant
    /// first.
    ///
    /// The running total is multiplied by ten and the next digit added;
    /// this is done nine digits at a time so each step is a single-limb
    /// multiply-add. Any value above nine, or an empty sequence, is
    /// [`Error::InvalidNumber`].
    pub fn from_decimal_digits(digits: &[u8]) -> Result<BigUint, Error> {
        if digits.is_empty() || digits.iter().any(|&d| d > 9) {
            return Err(Error::InvalidNumber);
        }

        let head = match digits.len() % DEC_CHUNK_DIGITS {
            0 => DEC_CHUNK_DIGITS,
            head => head,
        };

        let mut n = BigUint::zero();
        let (first, rest) = digits.split_at(head);
        n += chunk_value(first);
        for chunk in rest.chunks(DEC_CHUNK_DIGITS) {
            scalar_mul(&mut n, DEC_CHUNK);
            n += chunk_value(chunk);
        }
        Ok(n)
    }

    /// Canonical decimal text, `"0"` for zero.
    ///
    /// Digits are peeled off the least significant end by repeated division
    /// by ten, a limb-sized power of ten per long division.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut digits: Vec<u8> = Vec::with_capacity(self.data.len() * 10);
        let mut n = self.clone();
        while !n.is_zero() {
            let (q, mut chunk) = div_rem_digit(n, DEC_CHUNK);
            for _ in 0..DEC_CHUNK_DIGITS {
                digits.push(b'0' + (chunk % 10) as u8);
                chunk /= 10;
            }
            n = q;
        }

        while digits.len() > 1 && digits[digits.len() - 1] == b'0' {
            digits.pop();
        }
        digits.iter().rev().map(|&d| char::from(d)).collect()
    }
}

fn chunk_value(chunk: &[u8]) -> BigDigit {
    chunk
        .iter()
        .fold(0, |acc, &d| acc * 10 + BigDigit::from(d))
}

/// Strips an optional leading `+` and maps the rest to digit values.
fn parse_unsigned(s: &str) -> Result<BigUint, Error> {
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: Vec<u8> = s
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            _ => Err(Error::InvalidNumber),
        })
        .collect::<Result<_, _>>()?;
    BigUint::from_decimal_digits(&digits)
}

impl FromStr for BigUint {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<BigUint, Error> {
        parse_unsigned(s)
    }
}

impl Num for BigUint {
    type FromStrRadixErr = Error;

    /// Only radix 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigUint, Error> {
        if radix != 10 {
            return Err(Error::InvalidNumber);
        }
        parse_unsigned(s)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<u64> for BigUint {
    #[inline]
    fn from(mut n: u64) -> Self {
        let mut data: SmallVec<[BigDigit; big_digit::VEC_SIZE]> = SmallVec::new();
        while n != 0 {
            data.push(n as BigDigit);
            n >>= big_digit::BITS;
        }
        BigUint { data }.normalized()
    }
}

impl From<u128> for BigUint {
    #[inline]
    fn from(mut n: u128) -> Self {
        let mut data: SmallVec<[BigDigit; big_digit::VEC_SIZE]> = SmallVec::new();
        while n != 0 {
            data.push(n as BigDigit);
            n >>= big_digit::BITS;
        }
        BigUint { data }.normalized()
    }
}

macro_rules! impl_biguint_from_uint {
    ($T:ty) => {
        impl From<$T> for BigUint {
            #[inline]
            fn from(n: $T) -> Self {
                BigUint::from(n as u64)
            }
        }
    };
}

impl_biguint_from_uint!(u8);
impl_biguint_from_uint!(u16);
impl_biguint_from_uint!(u32);
impl_biguint_from_uint!(usize);

impl FromPrimitive for BigUint {
    #[inline]
    fn from_i64(n: i64) -> Option<BigUint> {
        if n >= 0 {
            Some(BigUint::from(n as u64))
        } else {
            None
        }
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigUint> {
        if n >= 0 {
            Some(BigUint::from(n as u128))
        } else {
            None
        }
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigUint> {
        Some(BigUint::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigUint> {
        Some(BigUint::from(n))
    }
}

impl ToPrimitive for BigUint {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| i64::try_from(n).ok())
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| i128::try_from(n).ok())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        if self.data.len() > 128 / big_digit::BITS {
            return None;
        }
        let mut ret: u128 = 0;
        for &digit in self.data.iter().rev() {
            ret = (ret << big_digit::BITS) | u128::from(digit);
        }
        Some(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_from_u64() {
        assert_eq!(BigUint::from(0u64).digits(), &[0]);
        assert_eq!(BigUint::from(1u64 << 32).digits(), &[0, 1]);
        assert_eq!(BigUint::from(u64::MAX).digits(), &[!0, !0]);
        assert_eq!(BigUint::from(u128::MAX).digits(), &[!0, !0, !0, !0]);
    }

    #[test]
    fn test_to_primitive() {
        let n = BigUint::from(u64::MAX);
        assert_eq!(n.to_u64(), Some(u64::MAX));
        assert_eq!(n.to_i64(), None);
        assert_eq!(n.to_u128(), Some(u128::from(u64::MAX)));
        assert_eq!(BigUint::from_slice(&[1, 2, 3, 4, 5]).to_u128(), None);
        assert_eq!(BigUint::zero().to_u32(), Some(0));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(BigUint::from_i64(-1), None);
        assert_eq!(BigUint::from_i64(12), Some(BigUint::from(12u8)));
        assert_eq!(BigUint::from_i128(-5), None);
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(BigUint::zero().to_decimal_string(), "0");
        assert_eq!(BigUint::from(7u32).to_decimal_string(), "7");
        assert_eq!(BigUint::from(1_000_000_000u32).to_decimal_string(), "1000000000");
        assert_eq!(BigUint::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(BigUint::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(alloc::format!("{:>6}", BigUint::from(42u32)), "    42");
        assert_eq!(alloc::format!("{:06}", BigUint::from(42u32)), "000042");
        assert_eq!(alloc::format!("{:?}", BigUint::from(42u32)), "42");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0".parse::<BigUint>(), Ok(BigUint::zero()));
        assert_eq!("+17".parse::<BigUint>(), Ok(BigUint::from(17u32)));
        assert_eq!("000123".parse::<BigUint>(), Ok(BigUint::from(123u32)));
        assert_eq!(
            "18446744073709551616".parse::<BigUint>(),
            Ok(BigUint::from_slice(&[0, 0, 1]))
        );
        assert_eq!("".parse::<BigUint>(), Err(Error::InvalidNumber));
        assert_eq!("+".parse::<BigUint>(), Err(Error::InvalidNumber));
        assert_eq!("-1".parse::<BigUint>(), Err(Error::InvalidNumber));
        assert_eq!("12a".parse::<BigUint>(), Err(Error::InvalidNumber));
        assert_eq!("1 2".parse::<BigUint>(), Err(Error::InvalidNumber));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(BigUint::from_str_radix("255", 10), Ok(BigUint::from(255u32)));
        assert_eq!(BigUint::from_str_radix("ff", 16), Err(Error::InvalidNumber));
    }

    #[test]
    fn test_from_decimal_digits() {
        assert_eq!(
            BigUint::from_decimal_digits(&[1, 2, 3]),
            Ok(BigUint::from(123u32))
        );
        assert_eq!(
            BigUint::from_decimal_digits(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            Ok(BigUint::from(1_000_000_000u32))
        );
        assert_eq!(BigUint::from_decimal_digits(&[]), Err(Error::InvalidNumber));
        assert_eq!(BigUint::from_decimal_digits(&[1, 10]), Err(Error::InvalidNumber));
    }

    #[test]
    fn test_decimal_round_trip() {
        let text = "123456789012345678901234567890123456789012345678901234567890";
        let n: BigUint = text.parse().unwrap();
        assert_eq!(n.to_decimal_string(), text);
    }
}
