use crate::{error::DecimalError, repr::Repr};
use num_traits::{PrimInt, ToPrimitive};

/// `base^digits` in `i128`; fails const evaluation on overflow.
#[allow(clippy::cast_lossless)]
const fn scalar_wide(base: u32, digits: u32) -> i128 {
    let mut value: i128 = 1;
    let mut i = 0;

    while i < digits {
        value = match value.checked_mul(base as i128) {
            Some(next) => next,
            None => panic!("decimal scalar overflows i128"),
        };
        i += 1;
    }

    value
}

///
/// Decimal
///
/// Fixed-point number with `DIGITS` fractional digits in radix `BASE`.
/// Stores a single `T` holding value × BASE^DIGITS
/// (e.g. `Decimal<2>` stores 1.25 as 125).
///
/// Constructors:
/// - `from_scaled(raw)`: raw scaled integer (no scaling)
/// - `from_int(n)`: scales by the scalar, fails on overflow
/// - `from_f64(v)` / `from_f32(v)`: rounds half away from zero
/// - `from_str` / `from_str_rounded`: text, exact or rounded
///
/// Multiplication and division truncate toward zero. Values with different
/// digit counts or representations meet only through `rescale`/`with_repr`.
///
/// `BASE` must be within `2..=36` and `BASE^DIGITS` must fit `T`; any
/// constructor or bound constant of a shape breaking either rule fails to
/// compile.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Decimal<const DIGITS: u32, T: Repr = i32, const BASE: u32 = 10> {
    scaled: T,
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Decimal<DIGITS, T, BASE> {
    const SCALAR_WIDE: i128 = scalar_wide(BASE, DIGITS);

    const VALID: () = {
        assert!(BASE >= 2 && BASE <= 36, "decimal base must be within 2..=36");
        assert!(
            Self::SCALAR_WIDE <= T::MAX_WIDE,
            "decimal scalar does not fit the representation type"
        );
    };

    pub const ZERO: Self = Self::from_scaled(T::ZERO);

    /// Smallest representable value (scaled = `T::MIN`).
    pub const MIN: Self = Self::from_scaled(T::MIN);

    /// Largest representable value (scaled = `T::MAX`).
    pub const MAX: Self = Self::from_scaled(T::MAX);

    ///
    /// CONSTRUCTORS
    ///

    /// Construct from a raw scaled integer. No scaling applied.
    #[must_use]
    pub const fn from_scaled(scaled: T) -> Self {
        let () = Self::VALID;

        Self { scaled }
    }

    /// Construct from a whole number, scaling by `BASE^DIGITS`.
    pub fn from_int<I: PrimInt>(value: I) -> Result<Self, DecimalError> {
        let wide = value.to_i128().ok_or_else(Self::overflow)?;
        let scaled = wide
            .checked_mul(Self::scalar_wide())
            .ok_or_else(Self::overflow)?;

        Self::from_wide(scaled)
    }

    /// Construct from an `f64`, rounding half away from zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_f64(value: f64) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite);
        }

        Self::from_rounded_float((value * Self::scalar_wide() as f64).round())
    }

    /// Construct from an `f32`. The product is taken in `f32` precision.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_f32(value: f32) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite);
        }

        let scaled = (value * Self::scalar_wide() as f32).round();

        Self::from_rounded_float(<f64 as From<f32>>::from(scaled))
    }

    fn from_rounded_float(scaled: f64) -> Result<Self, DecimalError> {
        let wide = scaled.to_i128().ok_or_else(Self::overflow)?;

        Self::from_wide(wide)
    }

    ///
    /// ACCESSORS
    ///

    /// `BASE^DIGITS` as the representation type.
    #[must_use]
    pub fn scalar() -> T {
        T::from_wide_saturating(Self::scalar_wide())
    }

    /// The raw scaled integer.
    #[must_use]
    pub const fn scaled(self) -> T {
        self.scaled
    }

    #[must_use]
    pub const fn digits() -> u32 {
        DIGITS
    }

    #[must_use]
    pub const fn base() -> u32 {
        BASE
    }

    ///
    /// CONVERSIONS
    ///

    /// Move to another digit count.
    ///
    /// Widening is exact and fails on overflow; narrowing truncates toward zero.
    pub fn rescale<const TARGET: u32>(self) -> Result<Decimal<TARGET, T, BASE>, DecimalError> {
        let from = Self::scalar_wide();
        let to = Decimal::<TARGET, T, BASE>::scalar_wide();

        let wide = if TARGET >= DIGITS {
            self.wide()
                .checked_mul(to / from)
                .ok_or_else(Decimal::<TARGET, T, BASE>::overflow)?
        } else {
            self.wide() / (from / to)
        };

        Decimal::<TARGET, T, BASE>::from_wide(wide)
    }

    /// Same value in another representation type.
    pub fn with_repr<U: Repr>(self) -> Result<Decimal<DIGITS, U, BASE>, DecimalError> {
        Decimal::<DIGITS, U, BASE>::from_wide(self.wide())
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.wide() as f64 / Self::scalar_wide() as f64
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f32(self) -> f32 {
        self.wide() as f32 / Self::scalar_wide() as f32
    }

    /// Integer part as `I`, truncated toward zero; `None` if it does not fit.
    #[must_use]
    pub fn to_int<I: PrimInt>(self) -> Option<I> {
        num_traits::cast::<i128, I>(self.wide() / Self::scalar_wide())
    }

    ///
    /// METHODS
    ///

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.scaled == T::ZERO
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.scaled < T::ZERO
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn trunc(self) -> Self {
        let scalar = Self::scalar_wide();

        Self::from_scaled(T::from_wide_saturating(self.wide() / scalar * scalar))
    }

    /// Fractional part, carrying the sign of `self`.
    #[must_use]
    pub fn fract(self) -> Self {
        Self::from_scaled(T::from_wide_saturating(self.wide() % Self::scalar_wide()))
    }

    /// `-1`, `0` or `1` with the sign of `self`.
    #[must_use]
    pub fn signum(self) -> Self {
        Self::from_scaled(T::from_wide_saturating(
            self.wide().signum() * Self::scalar_wide(),
        ))
    }

    ///
    /// INTERNAL
    ///

    pub(crate) const fn scalar_wide() -> i128 {
        let () = Self::VALID;

        Self::SCALAR_WIDE
    }

    pub(crate) fn wide(self) -> i128 {
        self.scaled.to_wide()
    }

    pub(crate) fn from_wide(wide: i128) -> Result<Self, DecimalError> {
        T::from_wide(wide)
            .map(Self::from_scaled)
            .ok_or_else(Self::overflow)
    }

    pub(crate) const fn overflow() -> DecimalError {
        DecimalError::overflow(T::NAME, DIGITS)
    }
}

///
/// TESTS
///
