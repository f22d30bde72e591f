use core::mem;

use num_traits::Zero;

use crate::BigUint;
use crate::big_digit::BigDigit;
use crate::biguint::{div_rem, rem_digit};

/// Greatest common divisor of two magnitudes by Euclid's algorithm.
///
/// `gcd(a, 0) == a` and `gcd(0, 0) == 0`. Once the smaller operand fits a
/// single limb the remaining steps run on native digits.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = if a >= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };

    while !b.is_zero() {
        if let [digit] = b.digits() {
            let digit = *digit;
            return BigUint::from(gcd_digit(digit, rem_digit(&a, digit)));
        }
        let (_, r) = div_rem(mem::take(&mut a), &b);
        a = mem::replace(&mut b, r);
    }
    a
}

fn gcd_digit(mut a: BigDigit, mut b: BigDigit) -> BigDigit {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_small() {
        let cases: [(u64, u64, u64); 6] = [
            (0, 0, 0),
            (0, 9, 9),
            (12, 0, 12),
            (12, 18, 6),
            (17, 5, 1),
            (1 << 40, 1 << 36, 1 << 36),
        ];
        for (a, b, g) in cases {
            let (a, b) = (BigUint::from(a), BigUint::from(b));
            assert_eq!(gcd(&a, &b), BigUint::from(g));
            assert_eq!(gcd(&b, &a), BigUint::from(g));
        }
    }

    #[test]
    fn test_gcd_multi_limb() {
        let p = BigUint::from(4_294_967_291u64);
        let q = BigUint::from(1_000_000_007u64);
        let r = BigUint::from(998_244_353u64);
        let a = &p * &q * &r * &r;
        let b = &p * &r * &BigUint::from(3u32);
        assert_eq!(gcd(&a, &b), &p * &r);
    }
}
