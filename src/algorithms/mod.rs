//! Low-level algorithms for big integer arithmetic.
//!
//! The limb kernels behind [`BigUint`](crate::BigUint) and
//! [`BigInt`](crate::BigInt), exposed for direct use on digit slices.
//! Every slice is least significant limb first.

#![allow(clippy::many_single_char_names)]

// --- addition ---
pub use crate::biguint::{__add2, adc, add2};

// --- subtraction ---
pub use crate::biguint::{__sub2rev, sbb, sub_sign, sub2, sub2rev};

// --- multiplication ---
pub use crate::biguint::{mac_digit, mac_with_carry, mac3, mul3, scalar_mul};

// --- division ---
pub use crate::biguint::{div_rem, div_rem_digit, div_rem_ref, rem_digit};

// --- shift ---
pub use crate::biguint::{biguint_shl, biguint_shr};

// --- comparison ---
pub use crate::biguint::cmp_slice;

mod gcd;

pub use self::gcd::*;
