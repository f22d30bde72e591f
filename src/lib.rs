//! Arbitrary-precision signed integers with exact arithmetic.
//!
//! [`BigUint`] holds an unsigned magnitude as a vector of 32-bit limbs,
//! least-significant first. [`BigInt`] pairs a magnitude with a [`Sign`].
//! Both implement the usual operator traits together with the
//! [`num_traits`] and [`num_integer`] integrations, and every result is
//! exact: there is no rounding anywhere.
//!
//! Fallible operations (parsing, division, square root) return
//! `Result<_, Error>`. The [`Accumulator`] offers the fluent in-place
//! style instead, where a failure poisons the value and every later step
//! is skipped until the caller inspects it.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint_exact::{Accumulator, BigInt};
//!
//! let product = BigInt::from(-7) * BigInt::from(-3);
//! assert_eq!(product.to_string(), "21");
//!
//! let mut acc = Accumulator::new(5);
//! acc.add(97).subtract(53).add(434).multiply(5435423).add(321453);
//! acc.multiply(21).divide(2).power(2);
//! assert_eq!(acc.to_decimal_string(), "760056543044267246001");
//!
//! let mut broken = Accumulator::new(10);
//! broken.divide(0).add(1);
//! assert_eq!(broken.to_decimal_string(), "division by zero");
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`Error`].
//! - `rand`: random sampling through [`RandBigInt`].
//! - `serde`: limb-sequence serialization.
//! - `zeroize`: wiping of limb storage.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod accumulator;
mod bigint;
mod biguint;
mod error;
mod traits;

pub mod algorithms;

#[cfg(feature = "rand")]
mod bigrand;

pub use crate::accumulator::{Accumulator, Operand};
pub use crate::bigint::{BigInt, Sign};
pub use crate::biguint::BigUint;
pub use crate::error::Error;
pub use crate::traits::{ToBigInt, ToBigUint};

#[cfg(feature = "rand")]
pub use crate::bigrand::{RandBigInt, RandomBits};

/// Radix policy of the limb representation.
///
/// The radix is `2^32`: the largest power of two whose square still fits
/// the native 64-bit arithmetic, so a limb product plus two carries never
/// loses precision.
pub mod big_digit {
    /// A limb of the representation.
    pub type BigDigit = u32;

    /// Twice the width of a limb, wide enough for a limb product plus carry.
    pub type DoubleBigDigit = u64;

    /// Signed double width, used to carry borrows through subtraction.
    pub type SignedDoubleBigDigit = i64;

    /// Bits per limb.
    pub const BITS: usize = 32;

    /// The radix `R`.
    pub const BASE: DoubleBigDigit = 1 << BITS;

    const LO_MASK: DoubleBigDigit = (1 << BITS) - 1;

    /// Largest power of ten below the radix, used to move decimal text in
    /// chunks instead of one digit at a time.
    pub(crate) const DEC_CHUNK: BigDigit = 1_000_000_000;

    /// Number of decimal digits in [`DEC_CHUNK`].
    pub(crate) const DEC_CHUNK_DIGITS: usize = 9;

    /// Inline limb capacity before spilling to the heap.
    pub(crate) const VEC_SIZE: usize = 8;

    const _: () = assert!(2 * BITS <= DoubleBigDigit::BITS as usize);
    const _: () = assert!((DEC_CHUNK as DoubleBigDigit) * 10 > BASE);

    #[inline]
    fn get_hi(n: DoubleBigDigit) -> BigDigit {
        (n >> BITS) as BigDigit
    }

    #[inline]
    fn get_lo(n: DoubleBigDigit) -> BigDigit {
        (n & LO_MASK) as BigDigit
    }

    /// Split one [`DoubleBigDigit`] into two [`BigDigit`]s, high first.
    #[inline]
    pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        (get_hi(n), get_lo(n))
    }

    /// Join two [`BigDigit`]s into one [`DoubleBigDigit`].
    #[inline]
    pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
        DoubleBigDigit::from(lo) | (DoubleBigDigit::from(hi) << BITS)
    }
}
