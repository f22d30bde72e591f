use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{BigInt, Minus, Plus};
use crate::biguint::BigUint;

impl Serialize for BigInt {
    /// Serializes as a `(sign, magnitude)` tuple with the sign as `-1` or
    /// `1`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sign: i8 = match self.sign {
            Minus => -1,
            Plus => 1,
        };
        (sign, &self.data).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (sign, data): (i8, BigUint) = Deserialize::deserialize(deserializer)?;
        let sign = match sign {
            -1 => Minus,
            1 => Plus,
            other => {
                return Err(D::Error::custom(format_args!(
                    "invalid sign {}, expected -1 or 1",
                    other
                )));
            }
        };
        Ok(BigInt::from_biguint(sign, data))
    }
}
