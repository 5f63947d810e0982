//! Fixed-point decimal numbers: `Decimal<DIGITS, T, BASE>` stores a single
//! integer of type `T` scaled by `BASE^DIGITS`, with exact addition and
//! subtraction and truncating multiplication and division.

mod arith;
mod convert;
mod decimal;
mod format;
mod limits;
mod serialize;

pub mod error;
pub mod repr;

// re-exports
pub use decimal::Decimal;
pub use error::{DecimalError, ParseDecimalError};
pub use limits::{DenormStyle, NumericLimits, RoundStyle};
pub use repr::Repr;

///
/// Prelude
///
/// The decimal type and the traits needed to name its representation.
///

pub mod prelude {
    pub use crate::{Decimal, DecimalError, Repr};
}
