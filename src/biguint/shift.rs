use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;
use smallvec::{SmallVec, smallvec};

use super::BigUint;
use crate::big_digit::{self, BigDigit, VEC_SIZE};

/// Shifts a magnitude left by `bits`, i.e. multiplies it by `2^bits`.
pub fn biguint_shl(n: &BigUint, bits: usize) -> BigUint {
    if n.is_zero() {
        return n.clone();
    }

    let n_unit = bits / big_digit::BITS;
    let n_bits = bits % big_digit::BITS;

    let mut data: SmallVec<[BigDigit; VEC_SIZE]> = smallvec![0; n_unit];
    data.extend_from_slice(&n.data[..]);

    if n_bits > 0 {
        let mut carry = 0;
        for elem in data[n_unit..].iter_mut() {
            let new_carry = *elem >> (big_digit::BITS - n_bits);
            *elem = (*elem << n_bits) | carry;
            carry = new_carry;
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    BigUint { data }
}

/// Shifts a magnitude right by `bits`, i.e. divides it by `2^bits`,
/// discarding the bits shifted out.
pub fn biguint_shr(n: &BigUint, bits: usize) -> BigUint {
    let n_unit = bits / big_digit::BITS;
    if n_unit >= n.data.len() {
        return Zero::zero();
    }

    let mut data: SmallVec<[BigDigit; VEC_SIZE]> = SmallVec::from_slice(&n.data[n_unit..]);

    let n_bits = bits % big_digit::BITS;
    if n_bits > 0 {
        let mut borrow = 0;
        for elem in data.iter_mut().rev() {
            let new_borrow = *elem << (big_digit::BITS - n_bits);
            *elem = (*elem >> n_bits) | borrow;
            borrow = new_borrow;
        }
    }

    BigUint { data }.normalized()
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shl(self, rhs: usize) -> BigUint {
        biguint_shl(&self, rhs)
    }
}

impl<'a> Shl<usize> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn shl(self, rhs: usize) -> BigUint {
        biguint_shl(self, rhs)
    }
}

impl ShlAssign<usize> for BigUint {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        *self = biguint_shl(self, rhs);
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shr(self, rhs: usize) -> BigUint {
        biguint_shr(&self, rhs)
    }
}

impl<'a> Shr<usize> for &'a BigUint {
    type Output = BigUint;

    #[inline]
    fn shr(self, rhs: usize) -> BigUint {
        biguint_shr(self, rhs)
    }
}

impl ShrAssign<usize> for BigUint {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        *self = biguint_shr(self, rhs);
    }
}
