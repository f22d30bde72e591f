use log::trace;
use num_traits::{One, Zero};

use super::{BigUint, biguint_shl, div_rem_ref};

impl BigUint {
    /// Returns the truncated principal square root of `self`, the largest
    /// `r` with `r * r <= self`.
    ///
    /// Newton's iteration `x' = (x + self / x) / 2`, started from a power of
    /// two at or above the root. From there the estimates decrease
    /// strictly until they reach the floor of the root, which is where the
    /// iteration stops.
    pub fn sqrt(&self) -> BigUint {
        if self.is_zero() || self.is_one() {
            return self.clone();
        }

        // 2^ceil(bits / 2) >= sqrt(self)
        let mut x = biguint_shl(&BigUint::one(), self.bits().div_ceil(2) as usize);
        let mut steps = 0u32;
        loop {
            let (q, _) = div_rem_ref(self, &x);
            let y = (&x + q) >> 1;
            steps += 1;
            if y >= x {
                trace!("sqrt converged after {} Newton steps", steps);
                return x;
            }
            x = y;
        }
    }
}
