// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact fixed-point arithmetic on decimal strings
//!
//! Fiat values arrive as arbitrary-precision decimal strings. Parsing them into
//! a float silently loses precision, and parsing them at a fixed scale fails on
//! inputs with more fractional digits than the scale holds. The routines here
//! avoid both:
//!
//! 1. [`truncate`] cuts excess fractional digits (toward zero, never rounding)
//! 2. [`parse`] scales the truncated string into a signed 256-bit integer
//! 3. [`FixedPointDecimal::checked_sub`] subtracts exactly at that scale
//! 4. [`format`] renders the scaled integer back to a decimal string
//!
//! # Example
//!
//! ```
//! use visible_balances::{fixed_point, FiatPrecision};
//!
//! let precision = FiatPrecision::STANDARD;
//! let total = fixed_point::parse("15.00", precision).unwrap();
//! let hidden = fixed_point::parse("10.00", precision).unwrap();
//!
//! let visible = total.checked_sub(&hidden).unwrap();
//! assert_eq!(fixed_point::format(&visible), "5.00");
//! ```

use std::str::FromStr;

use alloy_primitives::I256;
use tracing::warn;

use crate::errors::DecimalError;
use crate::types::precision::FiatPrecision;

const SEPARATOR: char = '.';

/// A decimal value stored as an integer scaled by `10^precision`
///
/// Besides the scaled integer the value remembers its *display scale*, the
/// number of fractional digits it was written with, so that formatting a
/// parsed `"15.00"` yields `"15.00"` rather than `"15"`. Equality is numeric
/// and ignores the display scale.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointDecimal {
    value: I256,
    precision: FiatPrecision,
    display_scale: u8,
}

impl FixedPointDecimal {
    /// Zero at the given precision
    pub const fn zero(precision: FiatPrecision) -> Self {
        Self {
            value: I256::ZERO,
            precision,
            display_scale: 0,
        }
    }

    /// The integer equal to this value times `10^precision`
    pub const fn scaled_value(&self) -> I256 {
        self.value
    }

    /// Working precision of this value
    pub const fn precision(&self) -> FiatPrecision {
        self.precision
    }

    /// Minimum number of fractional digits rendered by [`format`]
    pub const fn display_scale(&self) -> u8 {
        self.display_scale
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if the value is below zero
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Subtract `rhs` exactly
    ///
    /// Both operands must share a precision. The result keeps the larger of
    /// the two display scales, so `"100" - "33.333"` renders as `"66.667"`.
    /// The result may be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, DecimalError> {
        if self.precision != rhs.precision {
            return Err(DecimalError::PrecisionMismatch {
                left: self.precision.as_u8(),
                right: rhs.precision.as_u8(),
            });
        }

        let value = self
            .value
            .checked_sub(rhs.value)
            .ok_or_else(|| DecimalError::overflow(format!("{self} - {rhs}")))?;

        Ok(Self {
            value,
            precision: self.precision,
            display_scale: self.display_scale.max(rhs.display_scale),
        })
    }
}

impl PartialEq for FixedPointDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && self.value == other.value
    }
}

impl Eq for FixedPointDecimal {}

impl std::fmt::Display for FixedPointDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format(self))
    }
}

/// Parses at [`FiatPrecision::STANDARD`] without truncating
impl FromStr for FixedPointDecimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, FiatPrecision::STANDARD)
    }
}

/// Cut `decimal` to at most `precision` fractional digits
///
/// Strings without a separator, or with fewer than `precision` fractional
/// digits, are returned unchanged. Excess digits are dropped without rounding.
/// Digits are counted by character, so arbitrary input never panics.
///
/// # Examples
///
/// ```
/// use visible_balances::{fixed_point::truncate, FiatPrecision};
///
/// assert_eq!(truncate("1.23456", FiatPrecision::new(3).unwrap()), "1.234");
/// assert_eq!(truncate("-1.999", FiatPrecision::new(1).unwrap()), "-1.9");
/// assert_eq!(truncate("42", FiatPrecision::new(3).unwrap()), "42");
/// ```
pub fn truncate(decimal: &str, precision: FiatPrecision) -> &str {
    let Some(separator) = decimal.find(SEPARATOR) else {
        return decimal;
    };

    let fraction_start = separator + SEPARATOR.len_utf8();
    match decimal[fraction_start..]
        .char_indices()
        .nth(precision.as_usize())
    {
        Some((cut, _)) => &decimal[..fraction_start + cut],
        None => decimal,
    }
}

/// Parse `decimal` into an integer scaled by `10^precision`
///
/// Accepts an optional leading `-`, ASCII digits and at most one `.`, with at
/// least one digit overall (`".5"` and `"5."` are fine). The empty string is
/// zero. Inputs with more fractional digits than `precision` are rejected;
/// [`truncate`] them first.
pub fn parse(decimal: &str, precision: FiatPrecision) -> Result<FixedPointDecimal, DecimalError> {
    if decimal.is_empty() {
        return Ok(FixedPointDecimal::zero(precision));
    }

    let (negative, unsigned) = match decimal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, decimal),
    };

    let (whole, fraction) = unsigned.split_once(SEPARATOR).unwrap_or((unsigned, ""));
    if fraction.contains(SEPARATOR) {
        return Err(DecimalError::multiple_separators(decimal));
    }

    if let Some(character) = whole
        .chars()
        .chain(fraction.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(DecimalError::invalid_character(decimal, character));
    }

    if whole.is_empty() && fraction.is_empty() {
        return Err(DecimalError::missing_digits(decimal));
    }

    let scale = precision.as_usize();
    if fraction.len() > scale {
        return Err(DecimalError::fraction_too_long(
            decimal,
            fraction.len(),
            precision.as_u8(),
        ));
    }

    let mut digits = String::with_capacity(2 + whole.len() + scale);
    if negative {
        digits.push('-');
    }
    digits.push_str(if whole.is_empty() { "0" } else { whole });
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', scale - fraction.len()));

    let value = I256::from_dec_str(&digits).map_err(|_| DecimalError::overflow(decimal))?;

    Ok(FixedPointDecimal {
        value,
        precision,
        // bounded by `precision`, checked above
        display_scale: fraction.len() as u8,
    })
}

/// Render a scaled value back to a decimal string
///
/// Inverse of [`parse`]: at least `display_scale` fractional digits are
/// written, plus any further non-zero digits up to the precision. No
/// separator is written when no fractional digit remains. Zero is never
/// rendered with a sign.
pub fn format(value: &FixedPointDecimal) -> String {
    let scale = value.precision.as_usize();
    let magnitude = value.value.unsigned_abs().to_string();
    let padded = if magnitude.len() <= scale {
        format!("{magnitude:0>width$}", width = scale + 1)
    } else {
        magnitude
    };

    let (whole, fraction) = padded.split_at(padded.len() - scale);
    let keep = fraction
        .trim_end_matches('0')
        .len()
        .max(usize::from(value.display_scale));

    let mut rendered = String::with_capacity(padded.len() + 2);
    if value.is_negative() {
        rendered.push('-');
    }
    rendered.push_str(whole);
    if keep > 0 {
        rendered.push(SEPARATOR);
        rendered.push_str(&fraction[..keep]);
    }
    rendered
}

/// Truncate and parse, treating anything unparseable as zero
///
/// A single corrupt fiat string must degrade the accuracy of a total rather
/// than fail the whole derivation. Failures are logged at `warn`.
pub fn parse_or_zero(decimal: &str, precision: FiatPrecision) -> FixedPointDecimal {
    match parse(truncate(decimal, precision), precision) {
        Ok(value) => value,
        Err(error) => {
            warn!(value = decimal, %error, "Unparseable fiat value treated as zero");
            FixedPointDecimal::zero(precision)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P18: FiatPrecision = FiatPrecision::STANDARD;

    fn roundtrip(decimal: &str) -> String {
        format(&parse(decimal, P18).unwrap())
    }

    #[test]
    fn test_truncate_without_separator_is_unchanged() {
        assert_eq!(truncate("12345", P18), "12345");
        assert_eq!(truncate("", P18), "");
    }

    #[test]
    fn test_truncate_below_or_at_precision_is_unchanged() {
        assert_eq!(truncate("1.5", FiatPrecision::new(2).unwrap()), "1.5");
        assert_eq!(truncate("1.50", FiatPrecision::new(2).unwrap()), "1.50");
    }

    #[test]
    fn test_truncate_cuts_without_rounding() {
        assert_eq!(truncate("1.23456", FiatPrecision::new(3).unwrap()), "1.234");
        assert_eq!(truncate("0.999999", FiatPrecision::new(2).unwrap()), "0.99");
        assert_eq!(
            truncate("3.14159265358979323846264338", P18),
            "3.141592653589793238"
        );
    }

    #[test]
    fn test_truncate_zero_precision_keeps_separator() {
        assert_eq!(truncate("1.5", FiatPrecision::new(0).unwrap()), "1.");
        assert_eq!(format(&parse("1.", FiatPrecision::new(0).unwrap()).unwrap()), "1");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("1.ééé", FiatPrecision::new(1).unwrap()), "1.é");
    }

    #[test]
    fn test_parse_empty_is_zero() {
        let zero = parse("", P18).unwrap();
        assert!(zero.is_zero());
        assert_eq!(format(&zero), "0");
    }

    #[test]
    fn test_parse_scales_by_precision() {
        let value = parse("15.00", P18).unwrap();
        assert_eq!(
            value.scaled_value(),
            I256::from_dec_str("15000000000000000000").unwrap()
        );
        assert_eq!(value.display_scale(), 2);

        let cents = parse("0.01", FiatPrecision::new(2).unwrap()).unwrap();
        assert_eq!(cents.scaled_value(), I256::from_dec_str("1").unwrap());
    }

    #[test]
    fn test_format_is_inverse_of_parse() {
        assert_eq!(roundtrip("15.00"), "15.00");
        assert_eq!(roundtrip("0.000000000000000001"), "0.000000000000000001");
        assert_eq!(roundtrip("-0.25"), "-0.25");
        assert_eq!(roundtrip("1234567890123456789012345.5"), "1234567890123456789012345.5");
    }

    #[test]
    fn test_format_normalizes_leading_and_bare_forms() {
        assert_eq!(roundtrip("007"), "7");
        assert_eq!(roundtrip(".5"), "0.5");
        assert_eq!(roundtrip("5."), "5");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(roundtrip("-0"), "0");
        assert_eq!(roundtrip("-0.00"), "0.00");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            parse("1.2.3", P18),
            Err(DecimalError::multiple_separators("1.2.3"))
        );
        assert_eq!(
            parse("12a", P18),
            Err(DecimalError::invalid_character("12a", 'a'))
        );
        assert_eq!(
            parse("--1", P18),
            Err(DecimalError::invalid_character("--1", '-'))
        );
        assert_eq!(
            parse("+1", P18),
            Err(DecimalError::invalid_character("+1", '+'))
        );
        assert_eq!(parse(".", P18), Err(DecimalError::missing_digits(".")));
        assert_eq!(parse("-", P18), Err(DecimalError::missing_digits("-")));
        assert_eq!(
            parse(" 1", P18),
            Err(DecimalError::invalid_character(" 1", ' '))
        );
    }

    #[test]
    fn test_parse_rejects_excess_fraction() {
        assert_eq!(
            parse("0.123", FiatPrecision::new(2).unwrap()),
            Err(DecimalError::fraction_too_long("0.123", 3, 2))
        );
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = format!("1{}", "0".repeat(70));
        assert_eq!(parse(&huge, P18), Err(DecimalError::overflow(huge.clone())));
    }

    #[test]
    fn test_checked_sub_keeps_widest_display_scale() {
        let total = parse("100", P18).unwrap();
        let part = parse("33.333", P18).unwrap();
        assert_eq!(format(&total.checked_sub(&part).unwrap()), "66.667");

        let total = parse("15.00", P18).unwrap();
        let part = parse("10.00", P18).unwrap();
        assert_eq!(format(&total.checked_sub(&part).unwrap()), "5.00");
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let total = parse("10", P18).unwrap();
        let part = parse("10.5", P18).unwrap();
        let result = total.checked_sub(&part).unwrap();
        assert!(result.is_negative());
        assert_eq!(result.to_string(), "-0.5");
    }

    #[test]
    fn test_checked_sub_rejects_precision_mismatch() {
        let a = parse("1", P18).unwrap();
        let b = parse("1", FiatPrecision::new(6).unwrap()).unwrap();
        assert_eq!(
            a.checked_sub(&b),
            Err(DecimalError::PrecisionMismatch { left: 18, right: 6 })
        );
    }

    #[test]
    fn test_equality_ignores_display_scale() {
        assert_eq!(parse("5", P18).unwrap(), parse("5.000", P18).unwrap());
        assert_ne!(parse("5", P18).unwrap(), parse("5.001", P18).unwrap());
    }

    #[test]
    fn test_parse_or_zero_truncates_first() {
        let value = parse_or_zero("1.1234567890123456789999", P18);
        assert_eq!(format(&value), "1.123456789012345678");
    }

    #[test]
    fn test_parse_or_zero_degrades_to_zero() {
        assert!(parse_or_zero("not a number", P18).is_zero());
        assert!(parse_or_zero("", P18).is_zero());
    }

    #[test]
    fn test_from_str_uses_standard_precision() {
        let value: FixedPointDecimal = "2.5".parse().unwrap();
        assert_eq!(value.precision(), P18);
        assert_eq!(value.to_string(), "2.5");
    }
}
