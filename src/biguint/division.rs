use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{Div, DivAssign, Rem, RemAssign};

use log::trace;
use num_traits::{CheckedDiv, CheckedRem, One, Zero};
use smallvec::SmallVec;

use super::{BigUint, biguint_shl, biguint_shr, cmp_slice, mac_with_carry, sbb};
use crate::Error;
use crate::big_digit::{self, BigDigit, DoubleBigDigit, VEC_SIZE};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
#[inline]
fn div_wide(hi: BigDigit, lo: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(hi < divisor);

    let lhs = big_digit::to_doublebigdigit(hi, lo);
    let rhs = DoubleBigDigit::from(divisor);
    ((lhs / rhs) as BigDigit, (lhs % rhs) as BigDigit)
}

/// Long division by a single limb.
///
/// Consumes `a` and overwrites its limbs with the quotient, most significant
/// first, carrying the partial remainder down.
pub fn div_rem_digit(mut a: BigUint, b: BigDigit) -> (BigUint, BigDigit) {
    if b == 0 {
        panic!("attempt to divide by zero")
    }

    let mut rem = 0;

    for d in a.data.iter_mut().rev() {
        let (q, r) = div_wide(rem, *d, b);
        *d = q;
        rem = r;
    }

    (a.normalized(), rem)
}

/// Remainder of the division by a single limb, leaving `a` untouched.
pub fn rem_digit(a: &BigUint, b: BigDigit) -> BigDigit {
    if b == 0 {
        panic!("attempt to divide by zero")
    }

    let mut rem: DoubleBigDigit = 0;
    for &digit in a.data.iter().rev() {
        rem = (rem << big_digit::BITS) | DoubleBigDigit::from(digit);
        rem %= DoubleBigDigit::from(b);
    }

    rem as BigDigit
}

/// Division with remainder, reusing the dividend's storage where possible.
pub fn div_rem(mut u: BigUint, d: &BigUint) -> (BigUint, BigUint) {
    if d.is_zero() {
        panic!("attempt to divide by zero")
    }
    if u.is_zero() {
        return (Zero::zero(), Zero::zero());
    }

    match u.cmp(d) {
        Less => return (Zero::zero(), u),
        Equal => {
            u.set_one();
            return (u, Zero::zero());
        }
        Greater => {}
    }

    if d.data.len() == 1 {
        if d.data[0] == 1 {
            return (u, Zero::zero());
        }
        let (div, rem) = div_rem_digit(u, d.data[0]);
        return (div, BigUint::from(rem));
    }

    div_rem_core(&u, d)
}

/// Division with remainder of borrowed operands.
///
/// Returns `(q, r)` with `u = q * d + r` and `r < d`. Panics if `d` is zero.
pub fn div_rem_ref(u: &BigUint, d: &BigUint) -> (BigUint, BigUint) {
    if d.is_zero() {
        panic!("attempt to divide by zero")
    }
    if u.is_zero() {
        return (Zero::zero(), Zero::zero());
    }

    match u.cmp(d) {
        Less => return (Zero::zero(), u.clone()),
        Equal => return (One::one(), Zero::zero()),
        Greater => {}
    }

    if d.data.len() == 1 {
        if d.data[0] == 1 {
            return (u.clone(), Zero::zero());
        }
        let (div, rem) = div_rem_digit(u.clone(), d.data[0]);
        return (div, BigUint::from(rem));
    }

    div_rem_core(u, d)
}

/// Multi-limb division by quotient-digit estimation.
///
/// Both operands are first shifted left so the divisor's top limb has its
/// high bit set; the quotient is unchanged and the remainder is shifted
/// back at the end. Requires `u > d` and `d.data.len() >= 2`.
///
/// A window `rest` slides over the dividend from the top. After each
/// dividend limb is pushed into it, `rest < d * R`, so the quotient digit
/// fits a limb. That digit is found by repeated under-estimation: the trial
/// digit divides the two top limbs of `rest` by the divisor's top limb plus
/// one, so `approx * d` never exceeds `rest`, and the rounds continue until
/// `rest < d`.
fn div_rem_core(u: &BigUint, d: &BigUint) -> (BigUint, BigUint) {
    debug_assert!(d.data.len() >= 2);

    let shift = d.data[d.data.len() - 1].leading_zeros() as usize;
    let a = biguint_shl(u, shift);
    let mut b = biguint_shl(d, shift).data;
    let n = b.len();
    debug_assert_eq!(n, d.data.len());

    // one zero limb past the top, so the window and the divisor line up
    b.push(0);
    let b_top = DoubleBigDigit::from(b[n - 1]) + 1;

    let q_len = a.data.len() - n + 1;
    let mut q: SmallVec<[BigDigit; VEC_SIZE]> = smallvec::smallvec![0; q_len];

    let mut rest: SmallVec<[BigDigit; VEC_SIZE]> = SmallVec::with_capacity(n + 1);
    rest.extend_from_slice(&a.data[q_len..]);

    for j in (0..q_len).rev() {
        rest.insert(0, a.data[j]);
        rest.resize(n + 1, 0);

        let mut digit: BigDigit = 0;
        let mut rounds = 0u32;
        loop {
            let top = big_digit::to_doublebigdigit(rest[n], rest[n - 1]);
            let mut approx = top / b_top;

            // The biased estimate is zero whenever the top limbs tie; the
            // lower limbs decide whether one more divisor fits.
            if approx == 0
                && rest[n] == 0
                && rest[n - 1] == b[n - 1]
                && cmp_slice(&rest[..n], &b[..n]) != Less
            {
                approx = 1;
            }

            if approx == 0 {
                break;
            }

            sub_mul_digit(&mut rest, &b, approx as BigDigit);
            digit += approx as BigDigit;
            rounds += 1;
        }

        trace!("quotient digit {} = {:#x} after {} rounds", j, digit, rounds);
        q[j] = digit;

        debug_assert_eq!(rest[n], 0);
        rest.pop();
    }

    let q = BigUint { data: q }.normalized();
    let r = biguint_shr(&BigUint { data: rest }.normalized(), shift);
    (q, r)
}

/// `acc -= b * c` on equal-length slices. The caller guarantees the product
/// does not exceed `acc`.
fn sub_mul_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    debug_assert_eq!(acc.len(), b.len());

    let mut carry: DoubleBigDigit = 0;
    let mut borrow = 0;
    for (x, &y) in acc.iter_mut().zip(b) {
        let prod = mac_with_carry(0, y, c, &mut carry);
        *x = sbb(*x, prod, &mut borrow);
    }

    debug_assert!(carry == 0 && borrow == 0, "quotient digit overshot");
}

impl BigUint {
    /// Division with remainder, failing with [`Error::DivisionByZero`] for
    /// a zero divisor.
    pub fn try_div_rem(&self, other: &BigUint) -> Result<(BigUint, BigUint), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(div_rem_ref(self, other))
    }
}

forward_val_ref_binop_to_ref_ref!(impl Rem for BigUint, rem);
forward_ref_val_binop_to_ref_ref!(impl Rem for BigUint, rem);
forward_val_assign!(impl DivAssign for BigUint, div_assign);
forward_val_assign!(impl RemAssign for BigUint, rem_assign);

impl Div<BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: BigUint) -> BigUint {
        let (q, _) = div_rem(self, &other);
        q
    }
}

impl<'a> Div<&'a BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: &BigUint) -> BigUint {
        let (q, _) = div_rem(self, other);
        q
    }
}

impl<'a> Div<BigUint> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: BigUint) -> BigUint {
        let (q, _) = div_rem_ref(self, &other);
        q
    }
}

impl<'a, 'b> Div<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: &BigUint) -> BigUint {
        let (q, _) = div_rem_ref(self, other);
        q
    }
}

impl<'a> DivAssign<&'a BigUint> for BigUint {
    #[inline]
    fn div_assign(&mut self, other: &'a BigUint) {
        *self = self.take() / other;
    }
}

impl Rem<BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn rem(self, other: BigUint) -> BigUint {
        let (_, r) = div_rem(self, &other);
        r
    }
}

impl<'a, 'b> Rem<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn rem(self, other: &BigUint) -> BigUint {
        if other.data.len() == 1 {
            return BigUint::from(rem_digit(self, other.data[0]));
        }
        let (_, r) = div_rem_ref(self, other);
        r
    }
}

impl<'a> RemAssign<&'a BigUint> for BigUint {
    #[inline]
    fn rem_assign(&mut self, other: &BigUint) {
        *self = &*self % other;
    }
}

impl Div<BigDigit> for BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: BigDigit) -> BigUint {
        let (q, _) = div_rem_digit(self, other);
        q
    }
}

impl Rem<BigDigit> for BigUint {
    type Output = BigUint;

    #[inline]
    fn rem(self, other: BigDigit) -> BigUint {
        BigUint::from(rem_digit(&self, other))
    }
}

impl CheckedDiv for BigUint {
    #[inline]
    fn checked_div(&self, v: &BigUint) -> Option<BigUint> {
        if v.is_zero() {
            return None;
        }
        Some(self / v)
    }
}

impl CheckedRem for BigUint {
    #[inline]
    fn checked_rem(&self, v: &BigUint) -> Option<BigUint> {
        if v.is_zero() {
            return None;
        }
        Some(self % v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(u: &BigUint, d: &BigUint) -> (BigUint, BigUint) {
        let (q, r) = div_rem_ref(u, d);
        assert!(r < *d, "remainder {:?} not below divisor {:?}", r.digits(), d.digits());
        assert_eq!(&(&q * d) + &r, *u);
        assert_eq!(div_rem(u.clone(), d), (q.clone(), r.clone()));
        (q, r)
    }

    #[test]
    fn test_div_wide() {
        assert_eq!(div_wide(1, 0, 2), (1 << 31, 0));
        assert_eq!(div_wide(0, 7, 2), (3, 1));
    }

    #[test]
    fn test_div_rem_digit() {
        let a = BigUint::from_slice(&[1, 1]);
        let (q, r) = div_rem_digit(a, 2);
        assert_eq!(q.digits(), &[1 << 31]);
        assert_eq!(r, 1);

        let (q, r) = div_rem_digit(BigUint::from(53u32), 14);
        assert_eq!(q, BigUint::from(3u32));
        assert_eq!(r, 11);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_rem_digit_zero() {
        div_rem_digit(BigUint::one(), 0);
    }

    #[test]
    fn test_rem_digit() {
        let a = BigUint::from_slice(&[5, 3, 9]);
        assert_eq!(rem_digit(&a, 10), div_rem_digit(a.clone(), 10).1);
        assert_eq!(rem_digit(&BigUint::zero(), 7), 0);
    }

    #[test]
    fn test_relation_cases() {
        let small = BigUint::from_slice(&[1, 2]);
        let big = BigUint::from_slice(&[1, 3]);
        assert_eq!(div_rem_ref(&small, &big), (BigUint::zero(), small.clone()));
        assert_eq!(div_rem_ref(&big, &big), (BigUint::one(), BigUint::zero()));
        assert_eq!(div_rem(big.clone(), &big), (BigUint::one(), BigUint::zero()));
        assert_eq!(
            div_rem_ref(&BigUint::zero(), &big),
            (BigUint::zero(), BigUint::zero())
        );
    }

    #[test]
    fn test_div_by_one() {
        let a = BigUint::from_slice(&[9, 8, 7]);
        assert_eq!(div_rem_ref(&a, &BigUint::one()), (a.clone(), BigUint::zero()));
    }

    #[test]
    fn test_multi_limb_divisor() {
        let u = BigUint::from_slice(&[0x89ab_cdef, 0x0123_4567, 0xfedc_ba98, 0x7654_3210]);
        let d = BigUint::from_slice(&[0x1111_1111, 0x2222]);
        check(&u, &d);
    }

    #[test]
    fn test_top_limb_tie() {
        // rest and divisor agree on every limb but the lowest
        let d = BigUint::from_slice(&[5, 0x8000_0000]);
        let u = BigUint::from_slice(&[7, 5, 0x8000_0000]);
        let (q, r) = check(&u, &d);
        assert_eq!(q.digits(), &[0, 1]);
        assert_eq!(r.digits(), &[7]);
    }

    #[test]
    fn test_max_quotient_digit() {
        // (R^3 - 1) / (R^2 - 1) forces the largest possible digits
        let u = BigUint::from_slice(&[!0, !0, !0]);
        let d = BigUint::from_slice(&[!0, !0]);
        let (q, r) = check(&u, &d);
        assert_eq!(q.digits(), &[0, 1]);
        assert_eq!(r.digits(), &[!0]);
    }

    #[test]
    fn test_small_top_limb_divisor() {
        // a divisor whose top limb is 1 needs the widest normalization shift
        let d = BigUint::from_slice(&[!0, 1]);
        let u = BigUint::from_slice(&[3, !0, !0, !0, 12]);
        check(&u, &d);
    }

    #[test]
    fn test_exact_division() {
        let d = BigUint::from_slice(&[0xdead_beef, 0xfeed_f00d, 42]);
        let q = BigUint::from_slice(&[17, 0, 0xffff_0000, 9]);
        let u = &d * &q;
        assert_eq!(check(&u, &d), (q, BigUint::zero()));
    }

    #[test]
    fn test_power_of_radix() {
        let u = BigUint::from_slice(&[0, 0, 0, 1]);
        let d = BigUint::from_slice(&[0, 1]);
        assert_eq!(check(&u, &d).0.digits(), &[0, 0, 1]);
    }

    #[test]
    fn test_try_div_rem() {
        let a = BigUint::from(100u32);
        assert_eq!(a.try_div_rem(&BigUint::zero()), Err(Error::DivisionByZero));
        assert_eq!(
            a.try_div_rem(&BigUint::from(7u32)),
            Ok((BigUint::from(14u32), BigUint::from(2u32)))
        );
    }

    #[test]
    fn test_checked_div_rem() {
        let a = BigUint::from(100u32);
        assert_eq!(a.checked_div(&BigUint::zero()), None);
        assert_eq!(a.checked_rem(&BigUint::zero()), None);
        assert_eq!(a.checked_rem(&BigUint::from(7u32)), Some(BigUint::from(2u32)));
    }

    #[test]
    fn test_operators() {
        let a = BigUint::from_slice(&[1, 2, 3]);
        let b = BigUint::from_slice(&[4, 5]);
        let (q, r) = div_rem_ref(&a, &b);
        assert_eq!(&a / &b, q);
        assert_eq!(a.clone() / b.clone(), q);
        assert_eq!(&a % &b, r);
        assert_eq!(a.clone() % &b, r);
        let mut c = a.clone();
        c /= &b;
        assert_eq!(c, q);
        let mut c = a.clone();
        c %= b;
        assert_eq!(c, r);
        assert_eq!(a.clone() / 10u32, div_rem_digit(a.clone(), 10).0);
        assert_eq!(a.clone() % 10u32, BigUint::from(rem_digit(&a, 10)));
    }
}
