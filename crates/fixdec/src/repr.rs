use num_traits::PrimInt;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

mod sealed {
    pub trait Sealed {}
}

///
/// Repr
///
/// Primitive integer backing a `Decimal`.
///
/// Every operation widens to `i128`, works there, and narrows back through
/// `from_wide`, so the 64-bit types are the widest supported.
///

pub trait Repr:
    PrimInt
    + Debug
    + Display
    + Default
    + Hash
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + sealed::Sealed
    + 'static
{
    /// Type name used in diagnostics.
    const NAME: &'static str;

    const SIGNED: bool;
    const BITS: u32;

    /// Number of base-10 digits representable without change.
    const DIGITS10: u32;

    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    const MIN_WIDE: i128;
    const MAX_WIDE: i128;

    fn to_wide(self) -> i128;

    /// Narrow from `i128`; `None` when out of range.
    fn from_wide(wide: i128) -> Option<Self>;

    /// Narrow from `i128`, clamping to `MIN`/`MAX`.
    #[must_use]
    fn from_wide_saturating(wide: i128) -> Self {
        if wide < Self::MIN_WIDE {
            Self::MIN
        } else if wide > Self::MAX_WIDE {
            Self::MAX
        } else {
            Self::from_wide(wide).unwrap_or(Self::ZERO)
        }
    }
}

macro_rules! impl_repr {
    ($($ty:ty => ($signed:expr, $digits10:expr)),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Repr for $ty {
                const NAME: &'static str = stringify!($ty);
                const SIGNED: bool = $signed;
                const BITS: u32 = <$ty>::BITS;
                const DIGITS10: u32 = $digits10;
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                #[allow(clippy::cast_lossless)]
                const MIN_WIDE: i128 = <$ty>::MIN as i128;
                #[allow(clippy::cast_lossless)]
                const MAX_WIDE: i128 = <$ty>::MAX as i128;

                #[allow(clippy::cast_lossless)]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                fn from_wide(wide: i128) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_repr! {
    i8 => (true, 2),
    i16 => (true, 4),
    i32 => (true, 9),
    i64 => (true, 18),
    u8 => (false, 2),
    u16 => (false, 4),
    u32 => (false, 9),
    u64 => (false, 19),
}

#[cfg(target_pointer_width = "64")]
impl_repr! {
    isize => (true, 18),
    usize => (false, 19),
}

#[cfg(target_pointer_width = "32")]
impl_repr! {
    isize => (true, 9),
    usize => (false, 9),
}

///
/// TESTS
///
