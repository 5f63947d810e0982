use crate::{decimal::Decimal, error::DecimalError, repr::Repr};
use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// `a * b / c` truncated toward zero, without intermediate overflow for
/// 64-bit operands. `None` when the quotient leaves `i128` or `c == 0`.
fn mul_div(a: i128, b: i128, c: i128) -> Option<i128> {
    if c == 0 {
        return None;
    }

    let negative = (a < 0) ^ (b < 0) ^ (c < 0);
    let (a, b, c) = (a.unsigned_abs(), b.unsigned_abs(), c.unsigned_abs());

    // a * b / c == (a / c) * b + (a % c) * b / c
    let whole = (a / c).checked_mul(b)?;
    let part = (a % c).checked_mul(b)? / c;
    let magnitude = i128::try_from(whole.checked_add(part)?).ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Decimal<DIGITS, T, BASE> {
    ///
    /// FALLIBLE
    ///

    pub fn try_add(self, rhs: Self) -> Result<Self, DecimalError> {
        Self::from_wide(self.wide() + rhs.wide())
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self, DecimalError> {
        Self::from_wide(self.wide() - rhs.wide())
    }

    /// Fixed-point multiply: `(a * b) / scalar`, truncated toward zero.
    pub fn try_mul(self, rhs: Self) -> Result<Self, DecimalError> {
        let wide =
            mul_div(self.wide(), rhs.wide(), Self::scalar_wide()).ok_or_else(Self::overflow)?;

        Self::from_wide(wide)
    }

    /// Fixed-point divide: `(a * scalar) / b`, truncated toward zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DecimalError> {
        if rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        let wide =
            mul_div(self.wide(), Self::scalar_wide(), rhs.wide()).ok_or_else(Self::overflow)?;

        Self::from_wide(wide)
    }

    /// `0 - self`; fails for the minimum of a signed representation and for
    /// any non-zero unsigned value.
    pub fn try_neg(self) -> Result<Self, DecimalError> {
        Self::from_wide(-self.wide())
    }

    pub fn try_abs(self) -> Result<Self, DecimalError> {
        Self::from_wide(self.wide().abs())
    }

    ///
    /// CHECKED
    ///

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }

    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }

    /// Checked division; `None` on division by zero or overflow.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div(rhs).ok()
    }

    #[must_use]
    pub fn checked_neg(self) -> Option<Self> {
        self.try_neg().ok()
    }

    ///
    /// SATURATING
    ///

    /// Saturating addition.
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::from_scaled(T::from_wide_saturating(self.wide() + rhs.wide()))
    }

    /// Saturating subtraction.
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_scaled(T::from_wide_saturating(self.wide() - rhs.wide()))
    }

    /// Saturating multiplication.
    #[must_use]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        match mul_div(self.wide(), rhs.wide(), Self::scalar_wide()) {
            Some(wide) => Self::from_scaled(T::from_wide_saturating(wide)),
            None if self.is_negative() != rhs.is_negative() => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Absolute value; panics on overflow like the primitive `abs`.
    #[must_use]
    #[track_caller]
    pub fn abs(self) -> Self {
        match self.try_abs() {
            Ok(value) => value,
            Err(err) => panic!("attempt to take absolute value of decimal: {err}"),
        }
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $try:ident, $verb:literal) => {
        impl<const DIGITS: u32, T: Repr, const BASE: u32> $op for Decimal<DIGITS, T, BASE> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                match self.$try(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!(concat!("attempt to ", $verb, " decimals: {}"), err),
                }
            }
        }

        impl<const DIGITS: u32, T: Repr, const BASE: u32> $assign for Decimal<DIGITS, T, BASE> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, try_add, "add");
impl_binary_op!(Sub, sub, SubAssign, sub_assign, try_sub, "subtract");
impl_binary_op!(Mul, mul, MulAssign, mul_assign, try_mul, "multiply");
impl_binary_op!(Div, div, DivAssign, div_assign, try_div, "divide");

impl<const DIGITS: u32, T: Repr, const BASE: u32> Neg for Decimal<DIGITS, T, BASE> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self::Output {
        match self.try_neg() {
            Ok(value) => value,
            Err(err) => panic!("attempt to negate decimal: {err}"),
        }
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Sum for Decimal<DIGITS, T, BASE> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, const DIGITS: u32, T: Repr, const BASE: u32> Sum<&'a Decimal<DIGITS, T, BASE>>
    for Decimal<DIGITS, T, BASE>
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Product for Decimal<DIGITS, T, BASE> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::from_scaled(Self::scalar()), Mul::mul)
    }
}

impl<'a, const DIGITS: u32, T: Repr, const BASE: u32> Product<&'a Decimal<DIGITS, T, BASE>>
    for Decimal<DIGITS, T, BASE>
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    type D2 = Decimal<2>;

    #[test]
    fn mul_div_truncates_toward_zero() {
        assert_eq!(mul_div(123, -120, 100), Some(-147));
        assert_eq!(mul_div(-123, -120, 100), Some(147));
        assert_eq!(mul_div(7, 1, 2), Some(3));
        assert_eq!(mul_div(7, 1, -2), Some(-3));
        assert_eq!(mul_div(1, 1, 0), None);
    }

    #[test]
    fn mul_div_handles_wide_operands() {
        let max = i128::from(u64::MAX);

        assert_eq!(mul_div(max, max, max), Some(max));
        assert_eq!(mul_div(i128::MAX, 2, 1), None);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            D2::from_scaled(100).try_div(D2::ZERO),
            Err(DecimalError::DivisionByZero)
        );
        assert_eq!(D2::from_scaled(100).checked_div(D2::ZERO), None);
    }

    #[test]
    #[should_panic(expected = "attempt to divide decimals")]
    fn division_operator_panics_on_zero() {
        let _ = D2::from_scaled(100) / D2::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to add decimals")]
    fn add_operator_panics_on_overflow() {
        let _ = D2::MAX + D2::from_scaled(1);
    }

    #[test]
    fn unsigned_negation() {
        type U = Decimal<2, u32>;

        assert_eq!(U::ZERO.try_neg(), Ok(U::ZERO));
        assert!(U::from_scaled(1).try_neg().is_err());
    }

    #[test]
    fn signed_minimum_cannot_be_negated() {
        assert!(D2::MIN.checked_neg().is_none());
        assert!(D2::MIN.try_abs().is_err());
        assert_eq!(D2::from_scaled(-5).abs(), D2::from_scaled(5));
    }

    #[test]
    fn saturating_ops_clamp() {
        let big = D2::from_scaled(i32::MAX - 1);
        let small = D2::from_scaled(i32::MIN + 1);

        assert_eq!(big.saturating_add(D2::from_scaled(10)), D2::MAX);
        assert_eq!(small.saturating_sub(D2::from_scaled(10)), D2::MIN);
        assert_eq!(big.saturating_mul(D2::from_scaled(-1_000)), D2::MIN);
        assert_eq!(big.saturating_mul(big), D2::MAX);
        assert_eq!(
            D2::from_scaled(150).saturating_mul(D2::from_scaled(200)),
            D2::from_scaled(300)
        );
    }

    #[test]
    fn sum_and_product() {
        let values = [
            D2::from_scaled(150),
            D2::from_scaled(200),
            D2::from_scaled(-50),
        ];

        assert_eq!(values.iter().sum::<D2>(), D2::from_scaled(300));
        assert_eq!(values.into_iter().product::<D2>(), D2::from_scaled(-150));
        assert_eq!(std::iter::empty::<D2>().product::<D2>(), D2::from_scaled(100));
    }
}
