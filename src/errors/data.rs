// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding balance data handed over by a balance service.

/// Errors that can occur while decoding a balance payload.
///
/// # Examples
///
/// ```rust
/// use visible_balances::{BalanceDataError, BalanceSet};
///
/// let err = BalanceSet::from_json("{ not json").unwrap_err();
/// assert!(matches!(err, BalanceDataError::Json(_)));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum BalanceDataError {
    /// The payload is not valid balance JSON.
    #[error("Invalid balance payload: {0}")]
    Json(#[from] serde_json::Error),
}
