use core::cmp::{self, Ordering};
use core::ops::{Sub, SubAssign};

use num_traits::{CheckedSub, Zero};

use super::{BigUint, cmp_slice};
use crate::big_digit::{self, BigDigit, SignedDoubleBigDigit};
use crate::bigint::Sign::{self, Minus, Plus};

/// Subtracts `b` and the borrow in `acc` from `a`, returning the low limb
/// and leaving the new borrow (`0` or `-1`) in `acc`.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, acc: &mut SignedDoubleBigDigit) -> BigDigit {
    *acc += SignedDoubleBigDigit::from(a);
    *acc -= SignedDoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Two argument subtraction of raw slices, `a -= b`.
///
/// Panics if `b` is larger than `a`.
pub fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let mut borrow = 0;

    let len = cmp::min(a.len(), b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    for (a, b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    // note: we're _required_ to fail on underflow
    assert!(
        borrow == 0 && b_hi.iter().all(|x| *x == 0),
        "Cannot subtract b from a because b is larger than a."
    );
}

/// Reverse subtraction of equal-length slices, `b = a - b`, returning the
/// outstanding borrow.
///
/// `b` is overwritten with the difference: its storage serves as the
/// scratch buffer for the result.
#[inline]
pub fn __sub2rev(a: &[BigDigit], b: &mut [BigDigit]) -> BigDigit {
    debug_assert!(a.len() == b.len());

    let mut borrow = 0;
    for (ai, bi) in a.iter().zip(b) {
        *bi = sbb(*ai, *bi, &mut borrow);
    }

    (borrow != 0) as BigDigit
}

/// Reverse subtraction, `b = a - b`.
///
/// `b` is overwritten with the difference and must be at least as long as
/// `a`. Panics if `b` is larger than `a`.
pub fn sub2rev(a: &[BigDigit], b: &mut [BigDigit]) {
    debug_assert!(b.len() >= a.len());

    let len = cmp::min(a.len(), b.len());
    let (a_lo, a_hi) = a.split_at(len);
    let (b_lo, b_hi) = b.split_at_mut(len);

    let borrow = __sub2rev(a_lo, b_lo);

    assert!(a_hi.is_empty());

    // note: we're _required_ to fail on underflow
    assert!(
        borrow == 0 && b_hi.iter().all(|x| *x == 0),
        "Cannot subtract b from a because b is larger than a."
    );
}

/// Subtracts the smaller magnitude from the larger one, returning the
/// difference and the sign it carries as `a - b`.
///
/// Equal magnitudes give zero with sign `Plus`.
pub fn sub_sign(a: &[BigDigit], b: &[BigDigit]) -> (Sign, BigUint) {
    match cmp_slice(a, b) {
        Ordering::Greater => {
            let mut a = BigUint::from_slice(a);
            sub2(&mut a.data[..], b);
            (Plus, a.normalized())
        }
        Ordering::Less => {
            let mut b = BigUint::from_slice(b);
            sub2(&mut b.data[..], a);
            (Minus, b.normalized())
        }
        Ordering::Equal => (Plus, Zero::zero()),
    }
}

forward_val_val_binop!(impl Sub for BigUint, sub);
forward_ref_ref_binop!(impl Sub for BigUint, sub);
forward_val_assign!(impl SubAssign for BigUint, sub_assign);

impl<'a> Sub<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn sub(mut self, other: &BigUint) -> BigUint {
        self -= other;
        self
    }
}

impl<'a> SubAssign<&'a BigUint> for BigUint {
    fn sub_assign(&mut self, other: &'a BigUint) {
        sub2(&mut self.data[..], &other.data[..]);
        self.normalize();
    }
}

impl<'a> Sub<BigUint> for &'a BigUint {
    type Output = BigUint;

    /// Reuses the storage of the right-hand operand for the difference.
    fn sub(self, mut other: BigUint) -> BigUint {
        let other_len = other.data.len();
        if other_len < self.data.len() {
            let lo_borrow = __sub2rev(&self.data[..other_len], &mut other.data[..]);
            other.data.extend_from_slice(&self.data[other_len..]);
            if lo_borrow != 0 {
                sub2(&mut other.data[other_len..], &[1]);
            }
        } else {
            sub2rev(&self.data[..], &mut other.data[..]);
        }
        other.normalized()
    }
}

impl Sub<BigDigit> for BigUint {
    type Output = BigUint;

    #[inline]
    fn sub(mut self, other: BigDigit) -> BigUint {
        self -= other;
        self
    }
}

impl SubAssign<BigDigit> for BigUint {
    fn sub_assign(&mut self, other: BigDigit) {
        sub2(&mut self.data[..], &[other]);
        self.normalize();
    }
}

impl CheckedSub for BigUint {
    #[inline]
    fn checked_sub(&self, v: &BigUint) -> Option<BigUint> {
        match self.cmp(v) {
            Ordering::Less => None,
            Ordering::Equal => Some(Zero::zero()),
            Ordering::Greater => Some(self - v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbb() {
        let mut borrow = 0;
        assert_eq!(sbb(0, 1, &mut borrow), !0);
        assert_eq!(borrow, -1);
        assert_eq!(sbb(5, 1, &mut borrow), 3);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn test_sub2_borrows_across_limbs() {
        let mut a = [0, 0, 1];
        sub2(&mut a, &[1]);
        assert_eq!(a, [!0, !0, 0]);
    }

    #[test]
    #[should_panic(expected = "Cannot subtract b from a because b is larger than a.")]
    fn test_sub2_underflow() {
        let mut a = [1, 0];
        sub2(&mut a, &[0, 1]);
    }

    #[test]
    fn test_sub2rev_overwrites_operand() {
        let a = [5, 1];
        let mut b = [6, 0];
        sub2rev(&a, &mut b);
        assert_eq!(b, [!0, 0]);
    }

    #[test]
    fn test_sub_trims_to_canonical() {
        let a = BigUint::from_slice(&[0, 0, 1]);
        let b = BigUint::from_slice(&[!0, !0]);
        assert_eq!((&a - &b).digits(), &[1]);
        assert_eq!((&a - b.clone()).digits(), &[1]);
        assert_eq!((a.clone() - &a).digits(), &[0]);
    }

    #[test]
    fn test_sub_ref_val_shorter_operand() {
        let a = BigUint::from_slice(&[0, 5, 7]);
        let b = BigUint::from_slice(&[1]);
        assert_eq!((&a - b).digits(), &[!0, 4, 7]);
    }

    #[test]
    fn test_sub_digit() {
        let a = BigUint::from_slice(&[0, 1]);
        assert_eq!((a - 1u32).digits(), &[!0]);
    }

    #[test]
    fn test_sub_sign() {
        let (sign, diff) = sub_sign(&[3], &[5]);
        assert_eq!(sign, Minus);
        assert_eq!(diff.digits(), &[2]);
        let (sign, diff) = sub_sign(&[0, 1], &[1]);
        assert_eq!(sign, Plus);
        assert_eq!(diff.digits(), &[!0]);
        let (sign, diff) = sub_sign(&[4, 4], &[4, 4]);
        assert_eq!(sign, Plus);
        assert!(diff.is_zero());
    }

    #[test]
    fn test_checked_sub() {
        let a = BigUint::from_slice(&[3]);
        let b = BigUint::from_slice(&[4]);
        assert_eq!(a.checked_sub(&b), None);
        assert_eq!(b.checked_sub(&a), Some(BigUint::from_slice(&[1])));
        assert_eq!(a.checked_sub(&a), Some(BigUint::zero()));
    }
}
