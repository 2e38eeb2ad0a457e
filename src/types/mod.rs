// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the balance view domain.
//!
//! This module provides:
//! - Token identity and the user's hidden-token set
//! - Balance entries, balance sets and the derived visible view
//! - The fiat working precision

pub mod balances;
pub mod precision;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
