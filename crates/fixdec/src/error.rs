use thiserror::Error as ThisError;

///
/// DecimalError
///
/// Failure of a fallible construction, conversion or arithmetic step.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecimalError {
    #[error("value out of range for {repr} with {digits} fractional digits")]
    Overflow { repr: &'static str, digits: u32 },

    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("non-finite floating point value")]
    NonFinite,

    #[error(transparent)]
    Parse(#[from] ParseDecimalError),
}

impl DecimalError {
    pub(crate) const fn overflow(repr: &'static str, digits: u32) -> Self {
        Self::Overflow { repr, digits }
    }

    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(
            self,
            Self::Overflow { .. } | Self::Parse(ParseDecimalError::OutOfRange)
        )
    }
}

///
/// ParseDecimalError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseDecimalError {
    #[error("cannot parse decimal from empty string")]
    Empty,

    #[error("invalid digit '{found}' at position {position}")]
    InvalidDigit { found: char, position: usize },

    #[error("too many fractional digits: found {found}, at most {max} allowed")]
    TooManyFractionalDigits { found: usize, max: u32 },

    #[error("number out of range for the decimal representation")]
    OutOfRange,
}
