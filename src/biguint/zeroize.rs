#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use super::BigUint;

impl Zeroize for BigUint {
    /// Overwrites every limb, then leaves the canonical zero behind.
    fn zeroize(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.data.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_zeroize_leaves_zero() {
        let mut n = BigUint::from_slice(&[1, 2, 3]);
        n.zeroize();
        assert!(n.is_zero());
        assert_eq!(n.digits(), &[0]);
    }
}
