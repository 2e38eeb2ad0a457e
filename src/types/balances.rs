// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance entries, balance sets and the derived visible view
//!
//! Field names follow the balance gateway's JSON (`tokenInfo`, `fiatBalance`,
//! `fiatTotal`, ...) so payloads decode without an intermediate DTO.

use serde::{Deserialize, Serialize};

use crate::errors::BalanceDataError;
use crate::types::tokens::TokenDescriptor;

/// A single holding of the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    /// The token held
    #[serde(rename = "tokenInfo")]
    pub token: TokenDescriptor,
    /// Raw token amount, passed through untouched
    #[serde(default)]
    pub balance: String,
    /// Fiat value of the holding as a decimal string; may be empty
    #[serde(default)]
    pub fiat_balance: String,
    /// Fiat price of one token, passed through untouched
    #[serde(default)]
    pub fiat_conversion: String,
}

impl BalanceEntry {
    /// Create an entry with a fiat balance and no raw amount or conversion rate
    pub fn new(token: TokenDescriptor, fiat_balance: impl Into<String>) -> Self {
        Self {
            token,
            balance: String::new(),
            fiat_balance: fiat_balance.into(),
            fiat_conversion: String::new(),
        }
    }
}

/// All holdings of a wallet plus their aggregate fiat value
///
/// A non-empty `fiat_total` is assumed to equal the sum of the entries' fiat
/// balances; it is not verified. An empty `fiat_total` means no total is known.
///
/// # Examples
///
/// ```
/// use visible_balances::BalanceSet;
///
/// let balances = BalanceSet::from_json(r#"{
///     "fiatTotal": "15.00",
///     "items": [{
///         "tokenInfo": { "type": "ERC20", "address": "0x1", "symbol": "DAI" },
///         "balance": "10000000000000000000",
///         "fiatBalance": "10.00",
///         "fiatConversion": "1.00"
///     }]
/// }"#).unwrap();
///
/// assert_eq!(balances.items.len(), 1);
/// assert!(balances.has_fiat_total());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSet {
    /// Holdings in display order
    #[serde(default)]
    pub items: Vec<BalanceEntry>,
    /// Aggregate fiat value; `""` when unknown
    #[serde(default)]
    pub fiat_total: String,
}

impl BalanceSet {
    /// Create a balance set
    pub fn new(items: Vec<BalanceEntry>, fiat_total: impl Into<String>) -> Self {
        Self {
            items,
            fiat_total: fiat_total.into(),
        }
    }

    /// Decode a balance payload as served by the balance gateway
    pub fn from_json(payload: &str) -> Result<Self, BalanceDataError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Whether an aggregate fiat total is known
    pub fn has_fiat_total(&self) -> bool {
        !self.fiat_total.is_empty()
    }
}

/// The wallet's holdings as shown to the user, hidden tokens excluded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleBalanceView {
    /// Visible holdings, in the order of the source balance set
    pub items: Vec<BalanceEntry>,
    /// Fiat total of the visible holdings; `""` when the source total is unknown
    pub fiat_total: String,
}
