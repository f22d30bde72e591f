use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal, Greater, Less};
use core::ops::{Mul, Neg, Not};

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::big_digit::BigDigit;
use crate::biguint::BigUint;

mod addition;
mod convert;
mod division;
mod multiplication;
mod power;
mod subtraction;

#[cfg(feature = "serde")]
mod serde;

pub use self::Sign::{Minus, Plus};

/// A Sign is a [`BigInt`]'s composing element.
///
/// Zero carries `Plus`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            Plus => Minus,
        }
    }
}

impl Not for Sign {
    type Output = Sign;

    #[inline]
    fn not(self) -> Sign {
        -self
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        if self == other { Plus } else { Minus }
    }
}

/// A big signed integer type.
///
/// The sign is `Plus` whenever the magnitude is zero, so structural
/// equality is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) data: BigUint,
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        self.compare(other)
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::from_biguint(Plus, Zero::zero())
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.set_zero();
        self.sign = Plus;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.is_zero()
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from_biguint(Plus, One::one())
    }

    #[inline]
    fn set_one(&mut self) {
        self.data.set_one();
        self.sign = Plus;
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.data.is_one()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.data.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt::from_biguint(Plus, self.data.clone())
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        if self.is_zero() {
            Zero::zero()
        } else {
            BigInt::from_biguint(self.sign, One::one())
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Plus && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Minus
    }
}

impl Integer for BigInt {
    /// Truncating division: the quotient rounds toward zero and the
    /// remainder takes the sign of `self`.
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d_ui, r_ui) = crate::biguint::div_rem_ref(&self.data, &other.data);
        let d = BigInt::from_biguint(self.sign * other.sign, d_ui);
        let r = BigInt::from_biguint(self.sign, r_ui);
        (d, r)
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (d, _) = self.div_mod_floor(other);
        d
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let (_, m) = self.div_mod_floor(other);
        m
    }

    /// Flooring division: the remainder takes the sign of `other`.
    fn div_mod_floor(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d, r) = self.div_rem(other);
        if !r.is_zero() && r.sign != other.sign {
            (d - BigInt::one(), r + other)
        } else {
            (d, r)
        }
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`.
    ///
    /// The result is always positive.
    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::from(self.data.gcd(&other.data))
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        BigInt::from(self.data.lcm(&other.data))
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        self.data.is_multiple_of(&other.data)
    }

    /// Returns `true` if the number is divisible by `2`.
    #[inline]
    fn is_even(&self) -> bool {
        self.data.is_even()
    }

    /// Returns `true` if the number is not divisible by `2`.
    #[inline]
    fn is_odd(&self) -> bool {
        self.data.is_odd()
    }
}

impl BigInt {
    /// Creates and initializes a `BigInt`.
    ///
    /// The base 2<sup>32</sup> digits are ordered least significant digit first.
    #[inline]
    pub fn new(sign: Sign, digits: Vec<BigDigit>) -> BigInt {
        BigInt::from_biguint(sign, BigUint::new(digits))
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// A zero magnitude always gets the sign `Plus`.
    #[inline]
    pub fn from_biguint(sign: Sign, data: BigUint) -> BigInt {
        let sign = if data.is_zero() { Plus } else { sign };
        BigInt { sign, data }
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// The base 2<sup>32</sup> digits are ordered least significant digit first.
    #[inline]
    pub fn from_slice(sign: Sign, slice: &[BigDigit]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_slice(slice))
    }

    /// Returns the sign of the `BigInt` as a [`Sign`].
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the magnitude of the `BigInt` as a [`BigUint`].
    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        &self.data
    }

    /// Splits the `BigInt` into its sign and magnitude.
    #[inline]
    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.data)
    }

    /// Converts this `BigInt` into a [`BigUint`], if it's not negative.
    #[inline]
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self.sign {
            Plus => Some(self.data.clone()),
            Minus => None,
        }
    }

    /// Determines the fewest bits necessary to express the magnitude.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.data.bits()
    }

    /// Signed three-way comparison.
    ///
    /// Different signs decide outright; equal signs compare magnitudes,
    /// reversed for negative values.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        let mag = self.data.cmp(&other.data);
        match self.sign {
            Plus => mag,
            Minus => mag.reverse(),
        }
    }

    /// `self == other`
    #[inline]
    pub fn equals(&self, other: &BigInt) -> bool {
        self.compare(other) == Equal
    }

    /// `self < other`
    #[inline]
    pub fn less_than(&self, other: &BigInt) -> bool {
        self.compare(other) == Less
    }

    /// `self <= other`
    #[inline]
    pub fn less_or_equal(&self, other: &BigInt) -> bool {
        self.compare(other) != Greater
    }

    /// `self > other`
    #[inline]
    pub fn greater_than(&self, other: &BigInt) -> bool {
        self.compare(other) == Greater
    }

    /// `self >= other`
    #[inline]
    pub fn greater_or_equal(&self, other: &BigInt) -> bool {
        self.compare(other) != Less
    }

    /// Clears the sign in place.
    #[inline]
    pub fn set_abs(&mut self) {
        self.sign = Plus;
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.data);
        self.sign = Plus;
    }
}
