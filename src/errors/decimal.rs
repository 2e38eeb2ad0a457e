// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for fixed-point decimal parsing and arithmetic.

/// Errors that can occur while parsing or subtracting fixed-point decimals.
///
/// The aggregation path never surfaces these to callers: an unparseable fiat
/// string is logged and treated as zero. They are public so that callers using
/// [`crate::fixed_point::parse`] directly can distinguish failure modes.
///
/// # Examples
///
/// ```rust
/// use visible_balances::{fixed_point, DecimalError, FiatPrecision};
///
/// match fixed_point::parse("12.3.4", FiatPrecision::STANDARD) {
///     Err(DecimalError::MultipleSeparators { input }) => assert_eq!(input, "12.3.4"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// A character other than an ASCII digit, a leading `-` or a single `.`.
    #[error("Invalid character {character:?} in decimal {input:?}")]
    InvalidCharacter {
        /// The rejected input
        input: String,
        /// First offending character
        character: char,
    },

    /// More than one fractional separator.
    #[error("Decimal {input:?} has more than one separator")]
    MultipleSeparators {
        /// The rejected input
        input: String,
    },

    /// No digit on either side of the separator (`"."`, `"-"`, `"-."`).
    #[error("Decimal {input:?} has no digits")]
    MissingDigits {
        /// The rejected input
        input: String,
    },

    /// More fractional digits than the working precision can hold.
    ///
    /// Callers are expected to [`truncate`](crate::fixed_point::truncate)
    /// before parsing.
    #[error("Decimal {input:?} has {digits} fractional digits, precision is {precision}")]
    FractionTooLong {
        /// The rejected input
        input: String,
        /// Number of fractional digits found
        digits: usize,
        /// Working precision
        precision: u8,
    },

    /// The scaled value does not fit in a signed 256-bit integer.
    #[error("Decimal {input:?} overflows the 256-bit fixed-point range")]
    Overflow {
        /// The rejected input
        input: String,
    },

    /// Arithmetic between values scaled by different precisions.
    #[error("Precision mismatch: {left} vs {right}")]
    PrecisionMismatch {
        /// Precision of the left operand
        left: u8,
        /// Precision of the right operand
        right: u8,
    },

    /// Working precision too large for the 256-bit fixed-point range.
    #[error("Precision {precision} exceeds the maximum of {max} fractional digits")]
    PrecisionOutOfRange {
        /// Requested precision
        precision: u8,
        /// Largest supported precision
        max: u8,
    },
}

impl DecimalError {
    /// Create an `InvalidCharacter` error.
    pub fn invalid_character(input: impl Into<String>, character: char) -> Self {
        DecimalError::InvalidCharacter {
            input: input.into(),
            character,
        }
    }

    /// Create a `MultipleSeparators` error.
    pub fn multiple_separators(input: impl Into<String>) -> Self {
        DecimalError::MultipleSeparators {
            input: input.into(),
        }
    }

    /// Create a `MissingDigits` error.
    pub fn missing_digits(input: impl Into<String>) -> Self {
        DecimalError::MissingDigits {
            input: input.into(),
        }
    }

    /// Create a `FractionTooLong` error.
    pub fn fraction_too_long(input: impl Into<String>, digits: usize, precision: u8) -> Self {
        DecimalError::FractionTooLong {
            input: input.into(),
            digits,
            precision,
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(input: impl Into<String>) -> Self {
        DecimalError::Overflow {
            input: input.into(),
        }
    }
}
