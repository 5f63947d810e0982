use crate::{decimal::Decimal, error::DecimalError, repr::Repr};
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero,
};

macro_rules! impl_int_conversions {
    ($($int:ty),* $(,)?) => {
        $(
            impl<const DIGITS: u32, T: Repr, const BASE: u32> TryFrom<$int>
                for Decimal<DIGITS, T, BASE>
            {
                type Error = DecimalError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    Self::from_int(value)
                }
            }

            impl<const DIGITS: u32, T: Repr, const BASE: u32> TryFrom<Decimal<DIGITS, T, BASE>>
                for $int
            {
                type Error = DecimalError;

                /// Truncates toward zero.
                fn try_from(value: Decimal<DIGITS, T, BASE>) -> Result<Self, Self::Error> {
                    value
                        .to_int()
                        .ok_or(DecimalError::overflow(stringify!($int), DIGITS))
                }
            }
        )*
    };
}

impl_int_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<const DIGITS: u32, T: Repr, const BASE: u32> TryFrom<f64> for Decimal<DIGITS, T, BASE> {
    type Error = DecimalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> TryFrom<f32> for Decimal<DIGITS, T, BASE> {
    type Error = DecimalError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f32(value)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> From<Decimal<DIGITS, T, BASE>> for f64 {
    fn from(value: Decimal<DIGITS, T, BASE>) -> Self {
        value.to_f64()
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> From<Decimal<DIGITS, T, BASE>> for f32 {
    fn from(value: Decimal<DIGITS, T, BASE>) -> Self {
        value.to_f32()
    }
}

///
/// num-traits
///

impl<const DIGITS: u32, T: Repr, const BASE: u32> Zero for Decimal<DIGITS, T, BASE> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> One for Decimal<DIGITS, T, BASE> {
    fn one() -> Self {
        Self::from_scaled(Self::scalar())
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Bounded for Decimal<DIGITS, T, BASE> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> CheckedAdd for Decimal<DIGITS, T, BASE> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Self::checked_add(*self, *v)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> CheckedSub for Decimal<DIGITS, T, BASE> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Self::checked_sub(*self, *v)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> CheckedMul for Decimal<DIGITS, T, BASE> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Self::checked_mul(*self, *v)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> CheckedDiv for Decimal<DIGITS, T, BASE> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Self::checked_div(*self, *v)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> ToPrimitive for Decimal<DIGITS, T, BASE> {
    fn to_i64(&self) -> Option<i64> {
        self.to_int()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_int()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_int()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_int()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Self::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(*self))
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> FromPrimitive for Decimal<DIGITS, T, BASE> {
    fn from_i64(n: i64) -> Option<Self> {
        Self::from_int(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::from_int(n).ok()
    }

    fn from_i128(n: i128) -> Option<Self> {
        Self::from_int(n).ok()
    }

    fn from_u128(n: u128) -> Option<Self> {
        Self::from_int(n).ok()
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::from_f32(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_f64(n).ok()
    }
}

///
/// TESTS
///
