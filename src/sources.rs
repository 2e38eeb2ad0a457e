// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read interfaces to the collaborators that own balance data and hidden tokens
//!
//! Fetching balances and persisting the hidden-token set happen elsewhere.
//! This crate only reads the current snapshot of each through
//! [`BalanceSource`] and [`HiddenTokenStore`]. Snapshots are `Arc`s so that an
//! unchanged snapshot can be recognised by pointer identity.
//!
//! In-memory implementations are provided for embedding and tests. Every
//! mutation that changes state publishes a fresh `Arc`; a mutation that
//! changes nothing keeps the previous snapshot.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use visible_balances::{HiddenTokenStore, InMemoryHiddenTokenStore};
//!
//! let store = InMemoryHiddenTokenStore::default();
//! let before = store.hidden_tokens();
//!
//! store.hide("0x1");
//! let after = store.hidden_tokens();
//! assert!(after.contains("0x1"));
//! assert!(!Arc::ptr_eq(&before, &after));
//!
//! // Hiding again is a no-op and keeps the snapshot
//! store.hide("0x1");
//! assert!(Arc::ptr_eq(&after, &store.hidden_tokens()));
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::balances::BalanceSet;
use crate::types::tokens::HiddenTokenSet;

/// Balance data together with the fetch status of the balance service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceState {
    /// Latest balance set; empty while nothing has been fetched
    pub balances: BalanceSet,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last fetch error, if any
    pub error: Option<String>,
}

/// Supplies the current balance snapshot
pub trait BalanceSource {
    /// Current balance state
    fn snapshot(&self) -> Arc<BalanceState>;
}

/// Supplies the current set of hidden token addresses
pub trait HiddenTokenStore {
    /// Current hidden-token set
    fn hidden_tokens(&self) -> Arc<HiddenTokenSet>;
}

impl<T: BalanceSource + ?Sized> BalanceSource for Arc<T> {
    fn snapshot(&self) -> Arc<BalanceState> {
        (**self).snapshot()
    }
}

impl<T: HiddenTokenStore + ?Sized> HiddenTokenStore for Arc<T> {
    fn hidden_tokens(&self) -> Arc<HiddenTokenSet> {
        (**self).hidden_tokens()
    }
}

/// Swap `slot` to a modified copy of its value, unless the copy is unchanged
fn publish<T: Clone + PartialEq>(slot: &RwLock<Arc<T>>, update: impl FnOnce(&mut T)) {
    // Snapshots are replaced whole, so a poisoned lock still guards a valid value
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    let mut next = T::clone(&guard);
    update(&mut next);
    if next != **guard {
        *guard = Arc::new(next);
    }
}

fn current<T>(slot: &RwLock<Arc<T>>) -> Arc<T> {
    Arc::clone(&slot.read().unwrap_or_else(PoisonError::into_inner))
}

/// Balance source holding its state in memory
#[derive(Debug, Default)]
pub struct InMemoryBalanceSource {
    state: RwLock<Arc<BalanceState>>,
}

impl InMemoryBalanceSource {
    /// Create a source with a loaded balance set
    pub fn new(balances: BalanceSet) -> Self {
        Self::from_state(BalanceState {
            balances,
            loading: false,
            error: None,
        })
    }

    /// Create a source with an arbitrary initial state
    pub fn from_state(state: BalanceState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
        }
    }

    /// Replace the balance set
    pub fn set_balances(&self, balances: BalanceSet) {
        publish(&self.state, |state| state.balances = balances);
    }

    /// Mark a fetch as started or finished
    pub fn set_loading(&self, loading: bool) {
        publish(&self.state, |state| state.loading = loading);
    }

    /// Record or clear a fetch error
    pub fn set_error(&self, error: Option<String>) {
        publish(&self.state, |state| state.error = error);
    }

    /// Replace the whole state
    pub fn replace(&self, next: BalanceState) {
        publish(&self.state, |state| *state = next);
    }
}

impl BalanceSource for InMemoryBalanceSource {
    fn snapshot(&self) -> Arc<BalanceState> {
        current(&self.state)
    }
}

/// Hidden-token store holding its set in memory
#[derive(Debug, Default)]
pub struct InMemoryHiddenTokenStore {
    hidden: RwLock<Arc<HiddenTokenSet>>,
}

impl InMemoryHiddenTokenStore {
    /// Create a store with an initial hidden set
    pub fn new(hidden: HiddenTokenSet) -> Self {
        Self {
            hidden: RwLock::new(Arc::new(hidden)),
        }
    }

    /// Hide a token address
    pub fn hide(&self, address: impl Into<String>) {
        let address = address.into();
        publish(&self.hidden, |hidden| {
            hidden.insert(address);
        });
    }

    /// Unhide a token address
    pub fn unhide(&self, address: &str) {
        publish(&self.hidden, |hidden| {
            hidden.remove(address);
        });
    }

    /// Flip the hidden state of a token address
    ///
    /// Returns `true` if the address is hidden afterwards.
    pub fn toggle(&self, address: &str) -> bool {
        let mut now_hidden = false;
        publish(&self.hidden, |hidden| {
            now_hidden = !hidden.remove(address);
            if now_hidden {
                hidden.insert(address);
            }
        });
        now_hidden
    }

    /// Replace the whole hidden set
    pub fn replace(&self, next: HiddenTokenSet) {
        publish(&self.hidden, |hidden| *hidden = next);
    }
}

impl HiddenTokenStore for InMemoryHiddenTokenStore {
    fn hidden_tokens(&self) -> Arc<HiddenTokenSet> {
        current(&self.hidden)
    }
}
