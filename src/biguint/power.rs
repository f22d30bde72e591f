use num_traits::{One, Pow, Zero};

use super::BigUint;

/// Square-and-multiply: an odd exponent moves one factor of `base` into
/// the accumulator, an even one squares `base` and halves the exponent.
fn pow_u64(base: BigUint, exp: u64) -> BigUint {
    match exp {
        0 => return BigUint::one(),
        1 => return base,
        _ => {}
    }
    if base.is_zero() || base.is_one() {
        return base;
    }

    let mut base = base;
    let mut exp = exp;
    let mut acc = BigUint::one();
    while exp > 0 {
        if exp & 1 == 1 {
            acc = &acc * &base;
            exp -= 1;
        } else {
            base = &base * &base;
            exp >>= 1;
        }
    }
    acc
}

macro_rules! pow_impl {
    ($T:ty) => {
        impl Pow<$T> for BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: $T) -> BigUint {
                pow_u64(self, exp as u64)
            }
        }

        impl<'b> Pow<&'b $T> for BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: &$T) -> BigUint {
                Pow::pow(self, *exp)
            }
        }

        impl<'a> Pow<$T> for &'a BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: $T) -> BigUint {
                if exp == 0 {
                    return BigUint::one();
                }
                Pow::pow(self.clone(), exp)
            }
        }

        impl<'a, 'b> Pow<&'b $T> for &'a BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: &$T) -> BigUint {
                Pow::pow(self, *exp)
            }
        }
    };
}

pow_impl!(u8);
pow_impl!(u16);
pow_impl!(u32);
pow_impl!(u64);
pow_impl!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_small() {
        let two = BigUint::from(2u32);
        assert_eq!(Pow::pow(&two, 0u32), BigUint::one());
        assert_eq!(Pow::pow(&two, 1u32), two);
        assert_eq!(Pow::pow(&two, 10u32), BigUint::from(1024u32));
        assert_eq!(Pow::pow(&two, 64u32).digits(), &[0, 0, 1]);
    }

    #[test]
    fn test_pow_zero_and_one() {
        assert!(Pow::pow(BigUint::zero(), 5u8).is_zero());
        assert_eq!(Pow::pow(BigUint::zero(), 0u8), BigUint::one());
        assert!(Pow::pow(BigUint::one(), 1_000_000u64).is_one());
    }

    #[test]
    fn test_pow_splits_exponent() {
        let x = BigUint::from_slice(&[0x1234_5678, 9]);
        let a = Pow::pow(&x, 7u32);
        let b = Pow::pow(&x, 12u32);
        assert_eq!(Pow::pow(&x, 19u32), &a * &b);
    }

    #[test]
    fn test_pow_by_reference_exponent() {
        let three = BigUint::from(3u32);
        assert_eq!(Pow::pow(&three, &4usize), BigUint::from(81u32));
    }
}
