// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single-slot memo cache keyed by the last input

use tracing::trace;

/// Remembers the output computed for the most recent input
///
/// A derivation that is a pure function of its input only needs recomputing
/// when the input changes. `MemoCache` keeps one `(input, output)` pair and
/// hands back a clone of the output while the next input compares equal.
///
/// # Examples
///
/// ```
/// use visible_balances::MemoCache;
///
/// let mut cache = MemoCache::new();
/// let mut calls = 0;
///
/// let a = cache.get_or_compute(2, |n| { calls += 1; n * 10 });
/// let b = cache.get_or_compute(2, |n| { calls += 1; n * 10 });
/// assert_eq!((a, b, calls), (20, 20, 1));
///
/// cache.get_or_compute(3, |n| { calls += 1; n * 10 });
/// assert_eq!(calls, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V: Clone> MemoCache<K, V> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached output for `key`, computing and storing it on a miss
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached_key, cached_value)) = &self.slot {
            if *cached_key == key {
                trace!("Memo cache hit");
                return cached_value.clone();
            }
        }

        trace!("Memo cache miss");
        let value = compute(&key);
        self.slot = Some((key, value.clone()));
        value
    }

    /// Drop the remembered pair
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Check if nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
