//! Downstream package that links `fixdec` the way an external user would.

use fixdec::{Decimal, DecimalError};

/// Render one value of each digit count, separated by spaces.
pub fn sample_line() -> Result<String, DecimalError> {
    Ok(format!(
        "{} {} {} {} {} {} {}",
        Decimal::<0>::from_f64(5.2)?,
        Decimal::<1>::from_f64(7.0)?,
        Decimal::<2>::from_f64(4.06)?,
        Decimal::<3>::from_f64(4.06)?,
        Decimal::<5>::from_int(0)?,
        Decimal::<2>::from_f64(-3.45)?,
        Decimal::<2>::from_f64(-0.2)?,
    ))
}

/// Total of a price list parsed from text, in cents precision.
pub fn total(prices: &[&str]) -> Result<Decimal<2, i64>, DecimalError> {
    prices.iter().try_fold(Decimal::<2, i64>::ZERO, |acc, text| {
        acc.try_add(text.parse::<Decimal<2, i64>>()?)
    })
}
