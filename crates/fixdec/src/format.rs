use crate::{decimal::Decimal, error::ParseDecimalError, repr::Repr};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Append `value` in `radix`, left-padded with zeros to `min_width`.
#[allow(clippy::cast_possible_truncation)]
fn push_radix(out: &mut String, mut value: u128, radix: u32, min_width: usize) {
    let radix = u128::from(radix);
    let mut digits = Vec::new();

    loop {
        digits.push(DIGIT_CHARS[(value % radix) as usize]);
        value /= radix;
        if value == 0 {
            break;
        }
    }
    while digits.len() < min_width {
        digits.push(b'0');
    }

    out.extend(digits.iter().rev().map(|&b| char::from(b)));
}

/// Round-half-away-from-zero decision for the discarded digits `rest`.
fn rounds_up(rest: &[u32], base: u32) -> bool {
    if base % 2 == 0 {
        return rest.first().is_some_and(|&digit| digit >= base / 2);
    }

    // odd bases: one half is the repeating digit (base - 1) / 2
    let half = (base - 1) / 2;
    rest.iter()
        .find(|&&digit| digit != half)
        .is_some_and(|&digit| digit > half)
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Display for Decimal<DIGITS, T, BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.wide();
        let magnitude = wide.unsigned_abs();
        let scalar = Self::scalar_wide().unsigned_abs();

        let mut text = String::new();
        push_radix(&mut text, magnitude / scalar, BASE, 1);
        if DIGITS > 0 {
            text.push('.');
            push_radix(&mut text, magnitude % scalar, BASE, DIGITS as usize);
        }

        f.pad_integral(wide >= 0, "", &text)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> FromStr for Decimal<DIGITS, T, BASE> {
    type Err = ParseDecimalError;

    /// Exact parse; more than `DIGITS` fractional digits is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl<const DIGITS: u32, T: Repr, const BASE: u32> Decimal<DIGITS, T, BASE> {
    /// Parse text, rounding excess fractional digits half away from zero.
    pub fn from_str_rounded(s: &str) -> Result<Self, ParseDecimalError> {
        Self::parse(s, true)
    }

    fn parse(text: &str, round: bool) -> Result<Self, ParseDecimalError> {
        let (negative, body, offset) = match text.as_bytes().first() {
            None => return Err(ParseDecimalError::Empty),
            Some(b'-') => (true, &text[1..], 1),
            Some(b'+') => (false, &text[1..], 1),
            Some(_) => (false, text, 0),
        };

        let (int_text, frac_text) = body.split_once('.').unwrap_or((body, ""));
        if int_text.is_empty() && frac_text.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let int_digits = Self::digits_of(int_text, offset)?;
        let frac_digits = Self::digits_of(frac_text, offset + int_text.len() + 1)?;

        let keep = frac_digits.len().min(DIGITS as usize);
        let (kept, rest) = frac_digits.split_at(keep);
        if !rest.is_empty() && !round {
            return Err(ParseDecimalError::TooManyFractionalDigits {
                found: frac_digits.len(),
                max: DIGITS,
            });
        }

        let base = u128::from(BASE);
        let mut magnitude: u128 = 0;
        for &digit in int_digits.iter().chain(kept) {
            magnitude = magnitude
                .checked_mul(base)
                .and_then(|m| m.checked_add(u128::from(digit)))
                .ok_or(ParseDecimalError::OutOfRange)?;
        }
        for _ in keep..DIGITS as usize {
            magnitude = magnitude
                .checked_mul(base)
                .ok_or(ParseDecimalError::OutOfRange)?;
        }
        if rounds_up(rest, BASE) {
            magnitude = magnitude
                .checked_add(1)
                .ok_or(ParseDecimalError::OutOfRange)?;
        }

        let wide = i128::try_from(magnitude).map_err(|_| ParseDecimalError::OutOfRange)?;
        let wide = if negative { -wide } else { wide };

        T::from_wide(wide)
            .map(Self::from_scaled)
            .ok_or(ParseDecimalError::OutOfRange)
    }

    fn digits_of(text: &str, offset: usize) -> Result<Vec<u32>, ParseDecimalError> {
        text.char_indices()
            .map(|(i, c)| {
                c.to_digit(BASE).ok_or(ParseDecimalError::InvalidDigit {
                    found: c,
                    position: offset + i,
                })
            })
            .collect()
    }
}

///
/// TESTS
///
