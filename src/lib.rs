// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Visible wallet balances with exact fiat totals.
//!
//! Derives the user-facing view of a wallet's token holdings after removing the
//! tokens the user has hidden, and recomputes the aggregate fiat value with
//! exact fixed-point arithmetic on the upstream decimal strings.
//!
//! # Data flow
//!
//! ```text
//! BalanceSource ──┐
//!                 ├─> filter_visible ─────────────────────┐
//! HiddenTokenStore┘                                       ├─> VisibleBalanceView
//!                     compute_visible_fiat_total ─────────┘
//!                       (truncate → parse → subtract → format)
//! ```
//!
//! # Example
//!
//! ```
//! use visible_balances::{build_view, BalanceSet, FiatPrecision, HiddenTokenSet};
//!
//! let balances = BalanceSet::from_json(r#"{
//!     "fiatTotal": "15.00",
//!     "items": [
//!         { "tokenInfo": { "type": "ERC20", "address": "0x1" }, "fiatBalance": "10.00" },
//!         { "tokenInfo": { "type": "NATIVE_TOKEN", "address": "0x2" }, "fiatBalance": "5.00" }
//!     ]
//! }"#).unwrap();
//!
//! let hidden: HiddenTokenSet = ["0x1"].into_iter().collect();
//! let view = build_view(&balances, &hidden, FiatPrecision::STANDARD);
//!
//! assert_eq!(view.items.len(), 1);
//! assert_eq!(view.fiat_total, "5.00");
//! ```

mod aggregator;
pub mod cache;
pub mod config;
pub mod errors;
pub mod fixed_point;
mod sources;
mod tracing;
pub mod types;
mod view;
mod visibility;

pub use aggregator::compute_visible_fiat_total;
pub use cache::MemoCache;
pub use config::{BalanceViewConfig, BalanceViewConfigBuilder};
pub use errors::{BalanceDataError, BalanceViewError, DecimalError};
pub use fixed_point::FixedPointDecimal;
pub use sources::{
    BalanceSource, BalanceState, HiddenTokenStore, InMemoryBalanceSource, InMemoryHiddenTokenStore,
};
pub use types::balances::{BalanceEntry, BalanceSet, VisibleBalanceView};
pub use types::precision::FiatPrecision;
pub use types::tokens::{HiddenTokenSet, TokenDescriptor, TokenType};
pub use view::{build_view, VisibleBalances, VisibleBalancesState};
pub use visibility::{filter_visible, is_visible};
