// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat working precision type

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_FIAT_PRECISION, MAX_FIAT_PRECISION};
use crate::errors::DecimalError;

/// Number of fractional digits of the fixed-point working scale
///
/// Fiat strings are truncated to this many fractional digits before being
/// parsed into a scaled integer. Accuracy beyond 18 digits is immaterial for
/// display, so [`FiatPrecision::STANDARD`] is the default everywhere.
///
/// Precision is capped at [`FiatPrecision::MAX`] so that totals up to about
/// `10^38` still fit the signed 256-bit scaled integer.
///
/// # Examples
///
/// ```
/// use visible_balances::FiatPrecision;
///
/// assert_eq!(FiatPrecision::STANDARD.as_u8(), 18);
/// assert_eq!(FiatPrecision::new(2).unwrap().as_usize(), 2);
/// assert!(FiatPrecision::new(77).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FiatPrecision(u8);

impl FiatPrecision {
    /// Standard working precision (18 fractional digits)
    pub const STANDARD: Self = Self(DEFAULT_FIAT_PRECISION);

    /// Largest supported precision
    pub const MAX: Self = Self(MAX_FIAT_PRECISION);

    /// Create a new precision value
    ///
    /// Fails for more than [`FiatPrecision::MAX`] digits.
    pub const fn new(digits: u8) -> Result<Self, DecimalError> {
        if digits > MAX_FIAT_PRECISION {
            return Err(DecimalError::PrecisionOutOfRange {
                precision: digits,
                max: MAX_FIAT_PRECISION,
            });
        }
        Ok(Self(digits))
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Get the precision as a digit count usable for slicing
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for FiatPrecision {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<u8> for FiatPrecision {
    type Error = DecimalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiatPrecision> for u8 {
    fn from(precision: FiatPrecision) -> Self {
        precision.0
    }
}

impl std::fmt::Display for FiatPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fractional digits", self.0)
    }
}
