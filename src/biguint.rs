use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal};
use core::mem;

use num_integer::Integer;
use num_traits::{One, Zero};
use smallvec::{SmallVec, smallvec};

use crate::big_digit::{self, BigDigit, VEC_SIZE};

mod addition;
mod convert;
mod division;
mod multiplication;
mod power;
mod shift;
mod sqrt;
mod subtraction;

#[cfg(feature = "serde")]
mod serde;
mod zeroize;

pub use self::addition::{__add2, adc, add2};
pub use self::division::{div_rem, div_rem_digit, div_rem_ref, rem_digit};
pub use self::multiplication::{mac_digit, mac_with_carry, mac3, mul3, scalar_mul};
pub use self::shift::{biguint_shl, biguint_shr};
pub use self::subtraction::{__sub2rev, sbb, sub_sign, sub2, sub2rev};

/// A big unsigned integer type.
///
/// The value is `data[0] + data[1] * R + data[2] * R^2 + ...` with the
/// radix `R = 2^32`. The limb vector is always canonical: it never ends in
/// a zero limb, except for zero itself, which is the single limb `[0]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    pub(crate) data: SmallVec<[BigDigit; VEC_SIZE]>,
}

/// Three-way comparison of two canonical magnitudes.
///
/// A longer magnitude is larger; equal lengths are compared limb by limb
/// from the most significant end.
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Equal => a.iter().rev().cmp(b.iter().rev()),
        other => other,
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    #[inline]
    fn cmp(&self, other: &BigUint) -> Ordering {
        cmp_slice(&self.data[..], &other.data[..])
    }
}

impl Default for BigUint {
    #[inline]
    fn default() -> BigUint {
        Zero::zero()
    }
}

impl Zero for BigUint {
    #[inline]
    fn zero() -> BigUint {
        BigUint { data: smallvec![0] }
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.clear();
        self.data.push(0);
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data[..] == [0]
    }
}

impl One for BigUint {
    #[inline]
    fn one() -> BigUint {
        BigUint { data: smallvec![1] }
    }

    #[inline]
    fn set_one(&mut self) {
        self.data.clear();
        self.data.push(1);
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.data[..] == [1]
    }
}

impl Integer for BigUint {
    #[inline]
    fn div_rem(&self, other: &BigUint) -> (BigUint, BigUint) {
        div_rem_ref(self, other)
    }

    #[inline]
    fn div_floor(&self, other: &BigUint) -> BigUint {
        let (d, _) = div_rem_ref(self, other);
        d
    }

    #[inline]
    fn mod_floor(&self, other: &BigUint) -> BigUint {
        let (_, m) = div_rem_ref(self, other);
        m
    }

    #[inline]
    fn div_mod_floor(&self, other: &BigUint) -> (BigUint, BigUint) {
        div_rem_ref(self, other)
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`.
    ///
    /// The result is always positive.
    #[inline]
    fn gcd(&self, other: &BigUint) -> BigUint {
        crate::algorithms::gcd(self, other)
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    #[inline]
    fn lcm(&self, other: &BigUint) -> BigUint {
        if self.is_zero() && other.is_zero() {
            return BigUint::zero();
        }
        self / self.gcd(other) * other
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigUint) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    /// Returns `true` if the number is divisible by `2`.
    #[inline]
    fn is_even(&self) -> bool {
        self.data[0] & 1 == 0
    }

    /// Returns `true` if the number is not divisible by `2`.
    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl BigUint {
    /// Creates and initializes a `BigUint`.
    ///
    /// The base 2<sup>32</sup> digits are ordered least significant digit first.
    #[inline]
    pub fn new(digits: Vec<BigDigit>) -> BigUint {
        BigUint {
            data: SmallVec::from_vec(digits),
        }
        .normalized()
    }

    /// Creates and initializes a `BigUint`.
    ///
    /// The base 2<sup>32</sup> digits are ordered least significant digit first.
    #[inline]
    pub fn from_slice(slice: &[BigDigit]) -> BigUint {
        BigUint {
            data: SmallVec::from_slice(slice),
        }
        .normalized()
    }

    /// Assign a value to a `BigUint`.
    ///
    /// The base 2<sup>32</sup> digits are ordered least significant digit first.
    #[inline]
    pub fn assign_from_slice(&mut self, slice: &[BigDigit]) {
        self.data.clear();
        self.data.extend_from_slice(slice);
        self.normalize();
    }

    /// The canonical limbs, least significant first.
    #[inline]
    pub fn digits(&self) -> &[BigDigit] {
        &self.data[..]
    }

    /// Determines the fewest bits necessary to express the `BigUint`.
    pub fn bits(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        let top = self.data[self.data.len() - 1];
        let zeros = u64::from(top.leading_zeros());
        self.data.len() as u64 * big_digit::BITS as u64 - zeros
    }

    /// Strips trailing zero limbs, keeping at least one limb.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while self.data.len() > 1 && self.data[self.data.len() - 1] == 0 {
            self.data.pop();
        }
        if self.data.is_empty() {
            self.data.push(0);
        }
    }

    /// Returns a normalized `BigUint`.
    #[inline]
    pub(crate) fn normalized(mut self) -> BigUint {
        self.normalize();
        self
    }

    /// Swaps the limbs out, leaving zero behind.
    #[inline]
    pub(crate) fn take(&mut self) -> BigUint {
        mem::take(self)
    }
}
