//! Fluent in-place arithmetic over [`BigInt`].
//!
//! An [`Accumulator`] is either holding a value or poisoned with the first
//! [`Error`] any step produced. Once poisoned every later step is a no-op,
//! so a chain can be written without checking each link and inspected once
//! at the end.

use alloc::borrow::Cow;
use alloc::string::String;
use core::cmp::Ordering::{self, Equal, Greater, Less};
use core::fmt;
use core::mem;

use num_traits::Zero;

use crate::Error;
use crate::bigint::{BigInt, Sign};
use crate::biguint::BigUint;

/// A value that can be coerced into a [`BigInt`] operand.
///
/// Coercion happens once, at the boundary of each [`Accumulator`] step.
/// Text that is not a decimal integer, or a poisoned accumulator, coerces
/// to its error.
pub trait Operand<'a> {
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error>;
}

impl<'a> Operand<'a> for &'a BigInt {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl<'a> Operand<'a> for BigInt {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        Ok(Cow::Owned(self))
    }
}

impl<'a> Operand<'a> for BigUint {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        Ok(Cow::Owned(BigInt::from(self)))
    }
}

impl<'a> Operand<'a> for &'a str {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        self.parse().map(Cow::Owned)
    }
}

impl<'a> Operand<'a> for &'a String {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        self.as_str().into_operand()
    }
}

impl<'a> Operand<'a> for &'a Accumulator {
    #[inline]
    fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
        self.value().map(Cow::Borrowed)
    }
}

macro_rules! impl_operand_for_primitive {
    ($($T:ty),*) => {$(
        impl<'a> Operand<'a> for $T {
            #[inline]
            fn into_operand(self) -> Result<Cow<'a, BigInt>, Error> {
                Ok(Cow::Owned(BigInt::from(self)))
            }
        }
    )*};
}

impl_operand_for_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A mutable integer with chained arithmetic and a poisoned error state.
///
/// Every step mutates the receiver and returns it, so operations chain:
///
/// ```rust
/// use num_bigint_exact::Accumulator;
///
/// let mut acc = Accumulator::new(-7);
/// acc.add(3);
/// assert_eq!(acc.to_decimal_string(), "-4");
///
/// let mut acc = Accumulator::new(53);
/// acc.modulo(14);
/// assert_eq!(acc.to_decimal_string(), "11");
///
/// let mut acc = Accumulator::new(64);
/// acc.sqrt();
/// assert_eq!(acc.to_decimal_string(), "8");
/// ```
///
/// A failing step stores its error and later steps leave it in place:
///
/// ```rust
/// use num_bigint_exact::{Accumulator, Error};
///
/// let mut acc = Accumulator::new(10);
/// acc.divide(0).sqrt().add("not a number");
/// assert_eq!(acc.error(), Some(Error::DivisionByZero));
/// assert_eq!(acc.to_decimal_string(), "division by zero");
/// ```
#[derive(Clone, Debug)]
pub struct Accumulator {
    value: Result<BigInt, Error>,
    remainder: Option<BigInt>,
}

impl Default for Accumulator {
    #[inline]
    fn default() -> Accumulator {
        Accumulator::from(BigInt::zero())
    }
}

impl From<BigInt> for Accumulator {
    #[inline]
    fn from(n: BigInt) -> Accumulator {
        Accumulator {
            value: Ok(n),
            remainder: None,
        }
    }
}

impl From<Error> for Accumulator {
    #[inline]
    fn from(err: Error) -> Accumulator {
        Accumulator {
            value: Err(err),
            remainder: None,
        }
    }
}

impl From<Accumulator> for Result<BigInt, Error> {
    #[inline]
    fn from(acc: Accumulator) -> Result<BigInt, Error> {
        acc.value
    }
}

// Named after the operations they perform, not the operator traits.
#[allow(clippy::should_implement_trait)]
impl Accumulator {
    /// Starts from any operand. Malformed text starts poisoned with
    /// [`Error::InvalidNumber`].
    pub fn new<'a, T: Operand<'a>>(value: T) -> Accumulator {
        Accumulator {
            value: value.into_operand().map(Cow::into_owned),
            remainder: None,
        }
    }

    /// Starts from a sign and decimal digit values, most significant
    /// first. Any value above nine poisons the result.
    pub fn from_decimal_digits(sign: Sign, digits: &[u8]) -> Accumulator {
        Accumulator {
            value: BigInt::from_decimal_digits(sign, digits),
            remainder: None,
        }
    }

    /// Runs one step on the held value.
    ///
    /// The remainder side channel is cleared first, and a poisoned
    /// accumulator skips the step entirely.
    fn apply<F>(&mut self, op: F) -> &mut Self
    where
        F: FnOnce(BigInt) -> Result<(BigInt, Option<BigInt>), Error>,
    {
        self.remainder = None;
        let current = match &mut self.value {
            Ok(n) => mem::take(n),
            Err(_) => return self,
        };
        match op(current) {
            Ok((n, remainder)) => {
                self.value = Ok(n);
                self.remainder = remainder;
            }
            Err(err) => {
                log::debug!("accumulator poisoned: {}", err);
                self.value = Err(err);
            }
        }
        self
    }

    fn apply_with<'a, T, F>(&mut self, other: T, op: F) -> &mut Self
    where
        T: Operand<'a>,
        F: FnOnce(BigInt, &BigInt) -> Result<(BigInt, Option<BigInt>), Error>,
    {
        let rhs = other.into_operand();
        self.apply(|n| {
            let rhs = rhs?;
            op(n, &*rhs)
        })
    }

    /// `self += other`
    pub fn add<'a, T: Operand<'a>>(&mut self, other: T) -> &mut Self {
        self.apply_with(other, |n, rhs| Ok((n + rhs, None)))
    }

    /// `self -= other`
    pub fn subtract<'a, T: Operand<'a>>(&mut self, other: T) -> &mut Self {
        self.apply_with(other, |n, rhs| Ok((n - rhs, None)))
    }

    /// `self *= other`
    ///
    /// A zero factor leaves a positive zero in the receiver; the receiver
    /// is returned either way.
    pub fn multiply<'a, T: Operand<'a>>(&mut self, other: T) -> &mut Self {
        self.apply_with(other, |n, rhs| Ok((n * rhs, None)))
    }

    /// Truncating division. The quotient replaces the value and the
    /// remainder, signed like the dividend, is kept until the next step
    /// (see [`Accumulator::remainder`]).
    ///
    /// A zero divisor poisons with [`Error::DivisionByZero`].
    pub fn divide<'a, T: Operand<'a>>(&mut self, other: T) -> &mut Self {
        self.apply_with(other, |n, rhs| {
            let (q, r) = n.try_div_rem(rhs)?;
            Ok((q, Some(r)))
        })
    }

    /// Replaces the value with the remainder of a truncating division, so
    /// the result takes the sign of the dividend.
    pub fn modulo<'a, T: Operand<'a>>(&mut self, other: T) -> &mut Self {
        self.apply_with(other, |n, rhs| Ok((n.try_rem(rhs)?, None)))
    }

    /// Raises the value to `exp` by square-and-multiply.
    pub fn power(&mut self, exp: u64) -> &mut Self {
        self.apply(|n| Ok((n.power(exp), None)))
    }

    /// Integer square root, truncated. A negative value poisons with
    /// [`Error::NegativeSqrt`].
    pub fn sqrt(&mut self) -> &mut Self {
        self.apply(|n| Ok((n.try_sqrt()?, None)))
    }

    /// Clears the sign.
    pub fn abs(&mut self) -> &mut Self {
        self.apply(|mut n| {
            n.set_abs();
            Ok((n, None))
        })
    }

    /// The held value, or the error that poisoned it.
    #[inline]
    pub fn value(&self) -> Result<&BigInt, Error> {
        self.value.as_ref().map_err(|err| *err)
    }

    #[inline]
    pub fn into_result(self) -> Result<BigInt, Error> {
        self.value
    }

    #[inline]
    pub fn error(&self) -> Option<Error> {
        self.value.as_ref().err().copied()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.value.is_err()
    }

    /// The remainder of the most recent step, if it was a
    /// [`divide`](Accumulator::divide). Any other step clears it.
    #[inline]
    pub fn remainder(&self) -> Option<&BigInt> {
        self.remainder.as_ref()
    }

    /// `true` only for a held zero; a poisoned accumulator is not zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(&self.value, Ok(n) if n.is_zero())
    }

    /// Compares against any operand. Either side being an error is
    /// reported instead of an ordering.
    pub fn compare<'a, T: Operand<'a>>(&self, other: T) -> Result<Ordering, Error> {
        let lhs = self.value()?;
        let rhs = other.into_operand()?;
        Ok(lhs.compare(&*rhs))
    }

    pub fn equals<'a, T: Operand<'a>>(&self, other: T) -> Result<bool, Error> {
        self.compare(other).map(|ord| ord == Equal)
    }

    pub fn less_than<'a, T: Operand<'a>>(&self, other: T) -> Result<bool, Error> {
        self.compare(other).map(|ord| ord == Less)
    }

    pub fn less_or_equal<'a, T: Operand<'a>>(&self, other: T) -> Result<bool, Error> {
        self.compare(other).map(|ord| ord != Greater)
    }

    pub fn greater_than<'a, T: Operand<'a>>(&self, other: T) -> Result<bool, Error> {
        self.compare(other).map(|ord| ord == Greater)
    }

    pub fn greater_or_equal<'a, T: Operand<'a>>(&self, other: T) -> Result<bool, Error> {
        self.compare(other).map(|ord| ord != Less)
    }

    /// Decimal text of the value, or the marker text of the error.
    pub fn to_decimal_string(&self) -> String {
        match &self.value {
            Ok(n) => n.to_decimal_string(),
            Err(err) => String::from(err.marker()),
        }
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Ok(n) => fmt::Display::fmt(n, f),
            Err(err) => f.pad(err.marker()),
        }
    }
}
