// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat total recomputation for the visible balance view
//!
//! The visible total is the upstream total minus the contributions of hidden
//! entries. Visible entries are never re-summed: the upstream total already
//! contains them, and subtracting only what was hidden reproduces the total
//! the wallet displayed before hiding, minus exactly the hidden parts.

use tracing::{debug, error, warn};

use crate::fixed_point::{self, FixedPointDecimal};
use crate::tracing::spans;
use crate::types::balances::BalanceSet;
use crate::types::precision::FiatPrecision;
use crate::types::tokens::HiddenTokenSet;
use crate::visibility::is_visible;

/// Fiat total of `balances` with the hidden entries' fiat balances subtracted
///
/// An empty upstream total counts as zero here; callers that need to keep
/// "no total known" distinct from zero should check
/// [`BalanceSet::has_fiat_total`] first, as [`build_view`](crate::build_view)
/// does. Unparseable fiat strings count as zero. The result may be negative
/// when upstream data is inconsistent.
///
/// # Examples
///
/// ```
/// use visible_balances::{
///     compute_visible_fiat_total, BalanceEntry, BalanceSet, FiatPrecision, HiddenTokenSet,
///     TokenDescriptor,
/// };
///
/// let balances = BalanceSet::new(
///     vec![
///         BalanceEntry::new(TokenDescriptor::erc20("0x1"), "10.00"),
///         BalanceEntry::new(TokenDescriptor::native("0x2"), "5.00"),
///     ],
///     "15.00",
/// );
/// let hidden: HiddenTokenSet = ["0x1"].into_iter().collect();
///
/// let total = compute_visible_fiat_total(&balances, &hidden, FiatPrecision::STANDARD);
/// assert_eq!(total, "5.00");
/// ```
pub fn compute_visible_fiat_total(
    balances: &BalanceSet,
    hidden: &HiddenTokenSet,
    precision: FiatPrecision,
) -> String {
    let span = spans::compute_visible_fiat_total(balances.items.len(), hidden.len(), precision);
    let _guard = span.enter();

    let upstream_total = if balances.fiat_total.is_empty() {
        "0"
    } else {
        balances.fiat_total.as_str()
    };

    let total = balances
        .items
        .iter()
        .filter(|entry| !is_visible(&entry.token, hidden))
        .fold(
            fixed_point::parse_or_zero(upstream_total, precision),
            |running, entry| {
                let contribution = fixed_point::parse_or_zero(&entry.fiat_balance, precision);
                debug!(
                    token = %entry.token,
                    fiat_balance = %contribution,
                    "Subtracting hidden token from fiat total"
                );
                subtract_or_keep(running, &contribution)
            },
        );

    if total.is_negative() {
        warn!(
            fiat_total = %balances.fiat_total,
            visible_total = %total,
            "Hidden fiat balances exceed the upstream total"
        );
    }

    fixed_point::format(&total)
}

fn subtract_or_keep(running: FixedPointDecimal, contribution: &FixedPointDecimal) -> FixedPointDecimal {
    match running.checked_sub(contribution) {
        Ok(next) => next,
        Err(err) => {
            error!(error = %err, "Skipping hidden fiat balance");
            running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::balances::BalanceEntry;
    use crate::types::tokens::TokenDescriptor;

    const P18: FiatPrecision = FiatPrecision::STANDARD;

    fn hidden(addresses: &[&str]) -> HiddenTokenSet {
        addresses.iter().copied().collect()
    }

    fn sample_balances() -> BalanceSet {
        BalanceSet::new(
            vec![
                BalanceEntry::new(TokenDescriptor::erc20("0x1"), "10.00"),
                BalanceEntry::new(TokenDescriptor::native("0x2"), "5.00"),
            ],
            "15.00",
        )
    }

    #[test]
    fn test_hiding_erc20_subtracts_its_balance() {
        assert_eq!(
            compute_visible_fiat_total(&sample_balances(), &hidden(&["0x1"]), P18),
            "5.00"
        );
    }

    #[test]
    fn test_hiding_native_changes_nothing() {
        assert_eq!(
            compute_visible_fiat_total(&sample_balances(), &hidden(&["0x2"]), P18),
            "15.00"
        );
    }

    #[test]
    fn test_nothing_hidden_reformats_total() {
        let balances = BalanceSet::new(vec![], "0012.50");
        assert_eq!(compute_visible_fiat_total(&balances, &hidden(&[]), P18), "12.50");
    }

    #[test]
    fn test_empty_hidden_fiat_balance_subtracts_zero() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(TokenDescriptor::erc20("0x1"), "")],
            "3.5",
        );
        assert_eq!(compute_visible_fiat_total(&balances, &hidden(&["0x1"]), P18), "3.5");
    }

    #[test]
    fn test_corrupt_hidden_fiat_balance_subtracts_zero() {
        let balances = BalanceSet::new(
            vec![
                BalanceEntry::new(TokenDescriptor::erc20("0x1"), "1,000.00"),
                BalanceEntry::new(TokenDescriptor::erc20("0x2"), "2.25"),
            ],
            "1003.25",
        );
        assert_eq!(
            compute_visible_fiat_total(&balances, &hidden(&["0x1", "0x2"]), P18),
            "1001.00"
        );
    }

    #[test]
    fn test_corrupt_total_counts_as_zero() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(TokenDescriptor::erc20("0x1"), "2")],
            "n/a",
        );
        assert_eq!(compute_visible_fiat_total(&balances, &hidden(&["0x1"]), P18), "-2");
    }

    #[test]
    fn test_inconsistent_upstream_goes_negative() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(TokenDescriptor::erc20("0x1"), "20.5")],
            "10",
        );
        assert_eq!(
            compute_visible_fiat_total(&balances, &hidden(&["0x1"]), P18),
            "-10.5"
        );
    }

    #[test]
    fn test_excess_precision_is_truncated_not_rounded() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(
                TokenDescriptor::erc20("0x1"),
                "0.0000000000000000019",
            )],
            "1.0000000000000000029",
        );
        assert_eq!(
            compute_visible_fiat_total(&balances, &hidden(&["0x1"]), P18),
            "1.000000000000000001"
        );
    }

    #[test]
    fn test_lower_precision_drops_sub_cent_digits() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(TokenDescriptor::erc20("0x1"), "0.129")],
            "1.999",
        );
        let cents = FiatPrecision::new(2).unwrap();
        assert_eq!(
            compute_visible_fiat_total(&balances, &hidden(&["0x1"]), cents),
            "1.87"
        );
    }

    #[test]
    fn test_max_precision_keeps_large_totals_exact() {
        let balances = BalanceSet::new(
            vec![BalanceEntry::new(
                TokenDescriptor::erc20("0x1"),
                "23456789012345678.25",
            )],
            "123456789012345678.5",
        );
        assert_eq!(
            compute_visible_fiat_total(&balances, &hidden(&["0x1"]), FiatPrecision::MAX),
            "100000000000000000.25"
        );
        assert_eq!(
            compute_visible_fiat_total(&sample_balances(), &hidden(&["0x1"]), FiatPrecision::MAX),
            "5.00"
        );
    }

    #[test]
    fn test_repeated_hidden_address_subtracts_each_entry() {
        let balances = BalanceSet::new(
            vec![
                BalanceEntry::new(TokenDescriptor::erc20("0x1"), "1"),
                BalanceEntry::new(TokenDescriptor::erc20("0x1"), "2"),
                BalanceEntry::new(TokenDescriptor::erc20("0x3"), "4"),
            ],
            "7",
        );
        assert_eq!(compute_visible_fiat_total(&balances, &hidden(&["0x1"]), P18), "4");
    }
}
