// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known constants
//!
//! This module centralizes magic constants used throughout the crate.

/// Fractional digits of the fixed-point working scale
///
/// Fiat values are only ever displayed with a few decimals, so digits beyond
/// the 18th are dropped before parsing.
pub const DEFAULT_FIAT_PRECISION: u8 = 18;

/// Largest working precision
///
/// Keeps at least 38 integer digits inside the signed 256-bit scaled integer
/// (about 76 decimal digits in total).
pub const MAX_FIAT_PRECISION: u8 = 38;

/// Whether the composition root memoizes its last output by default
pub const DEFAULT_MEMOIZE: bool = true;
