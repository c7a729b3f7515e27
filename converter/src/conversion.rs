// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Kilometer to mile arithmetic and the text formatting of its result.

/// Miles in one kilometer, as used by the form.
pub const MILES_PER_KILOMETER: f64 = 0.6214;

/// Error returned by [`parse_kilometers`] and [`convert`]
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
#[non_exhaustive]
pub enum ConversionError {
    /// The text is not a finite decimal number
    #[display("invalid number {input:?}")]
    InvalidFormat { input: String },
}

/// Parses the content of the input field.
///
/// Surrounding whitespace is ignored. Empty text and values that are not
/// finite (`inf`, `NaN`) are rejected.
pub fn parse_kilometers(text: &str) -> Result<f64, ConversionError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidFormat { input: text.to_owned() }),
    }
}

pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * MILES_PER_KILOMETER
}

/// Formats a distance with thousands separators and two decimals, followed
/// by the unit: `1,234.57 miles`.
///
/// Rounding is half-up on the shortest decimal form of `miles`, so
/// `46.605` becomes `46.61` even though the nearest binary value is slightly
/// below it.
pub fn format_miles(miles: f64) -> String {
    let (integer, fraction) = round_half_up(&miles.abs().to_string());
    let sign = if miles.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{fraction} miles", group_thousands(&integer))
}

/// Reads, converts and formats in one go.
pub fn convert(text: &str) -> Result<String, ConversionError> {
    parse_kilometers(text).map(kilometers_to_miles).map(format_miles)
}

/// Rounds a plain decimal string (no sign, no exponent) to two fraction
/// digits, returning the integer and fraction digits.
fn round_half_up(decimal: &str) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut fraction = fraction.bytes().chain(std::iter::repeat(b'0')).take(3);
    let (tenths, hundredths) = (fraction.next(), fraction.next());
    let round_up = fraction.next().is_some_and(|d| d >= b'5');

    let mut digits = integer.bytes().chain(tenths).chain(hundredths).collect::<Vec<_>>();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    let fraction = digits.split_off(digits.len() - 2);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
