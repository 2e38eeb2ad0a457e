// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Composition root: the user-facing balance view
//!
//! [`build_view`] is the pure derivation from one balance set and one hidden
//! set. [`VisibleBalances`] wires it to a [`BalanceSource`] and a
//! [`HiddenTokenStore`], passes the source's loading and error status
//! through, and memoizes the result against the last pair of snapshots.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use visible_balances::{
//!     BalanceEntry, BalanceSet, InMemoryBalanceSource, InMemoryHiddenTokenStore, TokenDescriptor,
//!     VisibleBalances,
//! };
//!
//! let source = Arc::new(InMemoryBalanceSource::new(BalanceSet::new(
//!     vec![
//!         BalanceEntry::new(TokenDescriptor::erc20("0x1"), "10.00"),
//!         BalanceEntry::new(TokenDescriptor::native("0x2"), "5.00"),
//!     ],
//!     "15.00",
//! )));
//! let store = Arc::new(InMemoryHiddenTokenStore::default());
//! let view = VisibleBalances::new(Arc::clone(&source), Arc::clone(&store));
//!
//! assert_eq!(view.get_visible_balances().balances.fiat_total, "15.00");
//!
//! store.hide("0x1");
//! let state = view.get_visible_balances();
//! assert_eq!(state.balances.items.len(), 1);
//! assert_eq!(state.balances.fiat_total, "5.00");
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::aggregator::compute_visible_fiat_total;
use crate::cache::MemoCache;
use crate::config::BalanceViewConfig;
use crate::sources::{BalanceSource, BalanceState, HiddenTokenStore};
use crate::tracing::spans;
use crate::types::balances::{BalanceSet, VisibleBalanceView};
use crate::types::precision::FiatPrecision;
use crate::types::tokens::HiddenTokenSet;
use crate::visibility::filter_visible;

/// Derive the visible view of `balances`
///
/// Hidden entries are dropped, preserving order, and the fiat total is
/// recomputed. An unknown upstream total (`""`) stays unknown; it is never
/// replaced with a total synthesized from the entries.
pub fn build_view(
    balances: &BalanceSet,
    hidden: &HiddenTokenSet,
    precision: FiatPrecision,
) -> VisibleBalanceView {
    let span = spans::build_view(balances.items.len(), hidden.len(), balances.has_fiat_total());
    let _guard = span.enter();

    let fiat_total = if balances.has_fiat_total() {
        compute_visible_fiat_total(balances, hidden, precision)
    } else {
        String::new()
    };

    VisibleBalanceView {
        items: filter_visible(&balances.items, hidden),
        fiat_total,
    }
}

/// The visible view together with the balance source's fetch status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleBalancesState {
    /// Visible holdings and their fiat total
    pub balances: VisibleBalanceView,
    /// Passed through from the balance source
    pub loading: bool,
    /// Passed through from the balance source
    pub error: Option<String>,
}

fn derive_state(
    state: &BalanceState,
    hidden: &HiddenTokenSet,
    precision: FiatPrecision,
) -> VisibleBalancesState {
    VisibleBalancesState {
        balances: build_view(&state.balances, hidden, precision),
        loading: state.loading,
        error: state.error.clone(),
    }
}

/// Pair of input snapshots; equal when each side is the same `Arc` or holds an equal value
struct SnapshotKey {
    balances: Arc<BalanceState>,
    hidden: Arc<HiddenTokenSet>,
}

fn same_snapshot<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

impl PartialEq for SnapshotKey {
    fn eq(&self, other: &Self) -> bool {
        same_snapshot(&self.balances, &other.balances) && same_snapshot(&self.hidden, &other.hidden)
    }
}

/// Serves the visible balance view from a balance source and a hidden-token store
pub struct VisibleBalances<B, H> {
    balance_source: B,
    hidden_store: H,
    config: BalanceViewConfig,
    memo: Mutex<MemoCache<SnapshotKey, Arc<VisibleBalancesState>>>,
}

impl<B: BalanceSource, H: HiddenTokenStore> VisibleBalances<B, H> {
    /// Create with the default configuration
    pub fn new(balance_source: B, hidden_store: H) -> Self {
        Self::with_config(balance_source, hidden_store, BalanceViewConfig::default())
    }

    /// Create with an explicit configuration
    pub fn with_config(balance_source: B, hidden_store: H, config: BalanceViewConfig) -> Self {
        Self {
            balance_source,
            hidden_store,
            config,
            memo: Mutex::new(MemoCache::new()),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BalanceViewConfig {
        &self.config
    }

    /// Current visible balances
    ///
    /// Recomputed only when the balance snapshot or the hidden-token snapshot
    /// differs from the previous call (unless memoization is disabled).
    pub fn get_visible_balances(&self) -> Arc<VisibleBalancesState> {
        let balances = self.balance_source.snapshot();
        let hidden = self.hidden_store.hidden_tokens();

        let span = spans::get_visible_balances(balances.loading, balances.error.is_some());
        let _guard = span.enter();

        let precision = self.config.precision;
        if !self.config.memoize {
            return Arc::new(derive_state(&balances, &hidden, precision));
        }

        // The cache only ever holds a complete pair, so a poisoned lock is still usable
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);
        memo.get_or_compute(SnapshotKey { balances, hidden }, |key| {
            Arc::new(derive_state(&key.balances, &key.hidden, precision))
        })
    }

    /// Forget the memoized view so the next request recomputes it
    pub fn invalidate(&self) {
        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
