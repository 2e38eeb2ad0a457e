// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the visible-balances library.
//!
//! Each concern has its own error type:
//! - [`DecimalError`] - Errors from fixed-point decimal parsing and arithmetic
//! - [`BalanceDataError`] - Errors from decoding balance payloads
//!
//! [`BalanceViewError`] wraps both for callers that don't need to distinguish
//! between error sources.
//!
//! Note that the view derivation itself is infallible: malformed fiat strings
//! degrade to zero instead of failing the whole view.
//!
//! # Examples
//!
//! ```rust
//! use visible_balances::{build_view, BalanceSet, BalanceViewError, FiatPrecision, HiddenTokenSet};
//!
//! fn visible_total(payload: &str) -> Result<String, BalanceViewError> {
//!     let balances = BalanceSet::from_json(payload)?;
//!     let view = build_view(&balances, &HiddenTokenSet::new(), FiatPrecision::STANDARD);
//!     Ok(view.fiat_total)
//! }
//!
//! assert_eq!(visible_total(r#"{"items": [], "fiatTotal": "0.50"}"#).unwrap(), "0.50");
//! ```

mod data;
mod decimal;

pub use data::BalanceDataError;
pub use decimal::DecimalError;

/// Unified error type for all visible-balances operations.
///
/// All module-specific error types convert to `BalanceViewError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum BalanceViewError {
    /// Error from fixed-point decimal handling.
    #[error("Decimal error: {0}")]
    Decimal(#[from] DecimalError),

    /// Error from decoding balance data.
    #[error("Balance data error: {0}")]
    Data(#[from] BalanceDataError),
}
