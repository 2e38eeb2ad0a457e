// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Set of token addresses the user has chosen to hide

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Token addresses the user has marked hidden
///
/// Uses `BTreeSet` internally for:
/// - Automatic deduplication
/// - Deterministic ordering (important for testing and reproducibility)
///
/// Membership is exact string equality on the address as reported by the
/// balance service; no checksum normalization is applied.
///
/// # Examples
///
/// ```
/// use visible_balances::HiddenTokenSet;
///
/// let hidden: HiddenTokenSet = ["0x1", "0x2", "0x1"].into_iter().collect();
/// assert_eq!(hidden.len(), 2);
/// assert!(hidden.contains("0x1"));
/// assert!(!hidden.contains("0x3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenTokenSet(BTreeSet<String>);

impl HiddenTokenSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Hide a token address
    ///
    /// Returns `true` if the address was newly inserted, `false` if it was already hidden.
    pub fn insert(&mut self, address: impl Into<String>) -> bool {
        self.0.insert(address.into())
    }

    /// Unhide a token address
    ///
    /// Returns `true` if the address was hidden before.
    pub fn remove(&mut self, address: &str) -> bool {
        self.0.remove(address)
    }

    /// Check if a token address is hidden
    pub fn contains(&self, address: &str) -> bool {
        self.0.contains(address)
    }

    /// Number of hidden addresses
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is hidden
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over hidden addresses in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HiddenTokenSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for HiddenTokenSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for HiddenTokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HiddenTokenSet({} tokens)", self.len())
    }
}
