// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for balance view operations.
//!
//! Telemetry stays out of the business logic: each instrumented operation
//! enters the span returned by its helper here instead of carrying an
//! `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::types::precision::FiatPrecision;

/// Create span for deriving the visible balance view.
///
/// Parent: get_visible_balances span, or None when called directly
/// Children: compute_visible_fiat_total span
#[inline]
pub(crate) fn build_view(item_count: usize, hidden_count: usize, has_fiat_total: bool) -> Span {
    tracing::info_span!(
        "visible_balances.build_view",
        item_count = item_count,
        hidden_count = hidden_count,
        has_fiat_total = has_fiat_total,
    )
}

/// Create span for recomputing the fiat total without hidden entries.
///
/// Parent: build_view span
/// Children: None
#[inline]
pub(crate) fn compute_visible_fiat_total(
    item_count: usize,
    hidden_count: usize,
    precision: FiatPrecision,
) -> Span {
    tracing::debug_span!(
        "visible_balances.compute_visible_fiat_total",
        item_count = item_count,
        hidden_count = hidden_count,
        precision = precision.as_u8(),
    )
}

/// Create span for serving the view from the composition root.
///
/// Parent: None (root span for this operation)
/// Children: build_view span on a cache miss
#[inline]
pub(crate) fn get_visible_balances(loading: bool, has_error: bool) -> Span {
    tracing::debug_span!(
        "visible_balances.get_visible_balances",
        loading = loading,
        has_error = has_error,
    )
}
