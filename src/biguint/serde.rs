use core::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::BigUint;
use crate::big_digit::{BigDigit, VEC_SIZE};

impl Serialize for BigUint {
    /// Serializes the canonical limbs, least significant first.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data[..].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(U32Visitor)
    }
}

struct U32Visitor;

impl<'de> Visitor<'de> for U32Visitor {
    type Value = BigUint;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of unsigned 32-bit limbs")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        // cap the preallocation, the hint is untrusted input
        let len = seq.size_hint().unwrap_or(0).min(1024);
        let mut data: SmallVec<[BigDigit; VEC_SIZE]> = SmallVec::with_capacity(len);

        while let Some(value) = seq.next_element::<u32>()? {
            data.push(value);
        }

        Ok(BigUint { data }.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use serde_test::{Token, assert_de_tokens, assert_tokens};

    #[test]
    fn test_tokens() {
        let n = BigUint::from_slice(&[5, 1]);
        assert_tokens(
            &n,
            &[
                Token::Seq { len: Some(2) },
                Token::U32(5),
                Token::U32(1),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_normalizes() {
        assert_de_tokens(
            &BigUint::zero(),
            &[Token::Seq { len: Some(0) }, Token::SeqEnd],
        );
        assert_de_tokens(
            &BigUint::from_slice(&[9]),
            &[
                Token::Seq { len: Some(3) },
                Token::U32(9),
                Token::U32(0),
                Token::U32(0),
                Token::SeqEnd,
            ],
        );
    }
}
