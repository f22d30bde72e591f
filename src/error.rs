use thiserror::Error;

/// The ways an integer operation can fail.
///
/// The `Display` form of each variant is its marker text, which is also
/// what an [`Accumulator`](crate::Accumulator) renders once poisoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Text or a digit sequence that is not a decimal integer.
    #[error("invalid number")]
    InvalidNumber,

    /// A divide or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The square root of a negative integer.
    #[error("square root of negative number")]
    NegativeSqrt,
}

impl Error {
    /// The marker text for this error.
    pub fn marker(&self) -> &'static str {
        match self {
            Error::InvalidNumber => "invalid number",
            Error::DivisionByZero => "division by zero",
            Error::NegativeSqrt => "square root of negative number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_marker_matches_display() {
        for err in [Error::InvalidNumber, Error::DivisionByZero, Error::NegativeSqrt] {
            assert_eq!(err.to_string(), err.marker());
        }
    }
}
