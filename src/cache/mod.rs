// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Caching infrastructure for derived views.
//!
//! The visible balance view is a pure function of its inputs, so the
//! composition root only recomputes it when an input snapshot changes.

mod memo;

pub use memo::MemoCache;
