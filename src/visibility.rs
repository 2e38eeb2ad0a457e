// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hidden-token filtering

use crate::types::balances::BalanceEntry;
use crate::types::tokens::{HiddenTokenSet, TokenDescriptor};

/// Whether `token` is shown to the user
///
/// Native assets are always visible, even when their address is in `hidden`.
///
/// # Examples
///
/// ```
/// use visible_balances::{is_visible, HiddenTokenSet, TokenDescriptor};
///
/// let hidden: HiddenTokenSet = ["0x1", "0x0"].into_iter().collect();
///
/// assert!(!is_visible(&TokenDescriptor::erc20("0x1"), &hidden));
/// assert!(is_visible(&TokenDescriptor::erc20("0x2"), &hidden));
/// assert!(is_visible(&TokenDescriptor::native("0x0"), &hidden));
/// ```
pub fn is_visible(token: &TokenDescriptor, hidden: &HiddenTokenSet) -> bool {
    token.is_native() || !hidden.contains(&token.address)
}

/// Keep the visible entries of `items`, in their original order
pub fn filter_visible(items: &[BalanceEntry], hidden: &HiddenTokenSet) -> Vec<BalanceEntry> {
    items
        .iter()
        .filter(|entry| is_visible(&entry.token, hidden))
        .cloned()
        .collect()
}
