use crate::{decimal::Decimal, repr::Repr};
use serde::Serialize;

///
/// RoundStyle
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStyle {
    Indeterminate,
    TowardZero,
    ToNearest,
    TowardInfinity,
    TowardNegInfinity,
}

///
/// DenormStyle
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenormStyle {
    Indeterminate,
    Absent,
    Present,
}

///
/// NumericLimits
///
/// Static description of a decimal type's numeric properties.
/// `min`, `lowest` and `max` bound the *integer part*: the representation
/// bounds divided by the scalar.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NumericLimits<T> {
    pub is_specialized: bool,
    pub is_signed: bool,
    pub is_integer: bool,
    pub is_exact: bool,
    pub has_infinity: bool,
    pub has_quiet_nan: bool,
    pub has_signaling_nan: bool,
    pub has_denorm: DenormStyle,
    pub has_denorm_loss: bool,
    pub round_style: RoundStyle,
    pub is_bounded: bool,
    pub is_modulo: bool,
    pub digits: u32,
    pub digits10: u32,
    pub radix: u32,
    pub traps: bool,
    pub tinyness_before: bool,
    pub min: T,
    pub lowest: T,
    pub max: T,
}

impl<T> NumericLimits<T> {
    /// Convert the bound fields, keeping every flag.
    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> NumericLimits<U> {
        NumericLimits {
            is_specialized: self.is_specialized,
            is_signed: self.is_signed,
            is_integer: self.is_integer,
            is_exact: self.is_exact,
            has_infinity: self.has_infinity,
            has_quiet_nan: self.has_quiet_nan,
            has_signaling_nan: self.has_signaling_nan,
            has_denorm: self.has_denorm,
            has_denorm_loss: self.has_denorm_loss,
            round_style: self.round_style,
            is_bounded: self.is_bounded,
            is_modulo: self.is_modulo,
            digits: self.digits,
            digits10: self.digits10,
            radix: self.radix,
            traps: self.traps,
            tinyness_before: self.tinyness_before,
            min: f(self.min),
            lowest: f(self.lowest),
            max: f(self.max),
        }
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Decimal<DIGITS, T, BASE> {
    /// Numeric limits for this decimal type.
    #[must_use]
    pub fn limits() -> NumericLimits<T> {
        let scalar = Self::scalar_wide();
        let min = T::from_wide_saturating(T::MIN_WIDE / scalar);

        NumericLimits {
            is_specialized: true,
            is_signed: T::SIGNED,
            is_integer: DIGITS == 0,
            is_exact: true,
            has_infinity: false,
            has_quiet_nan: false,
            has_signaling_nan: false,
            has_denorm: DenormStyle::Absent,
            has_denorm_loss: false,
            round_style: RoundStyle::TowardZero,
            is_bounded: true,
            // overflow is an error, never a wrap
            is_modulo: false,
            digits: T::BITS - u32::from(T::SIGNED),
            digits10: T::DIGITS10,
            radix: 2,
            traps: true,
            tinyness_before: false,
            min,
            lowest: min,
            max: T::from_wide_saturating(T::MAX_WIDE / scalar),
        }
    }
}

///
/// TESTS
///
