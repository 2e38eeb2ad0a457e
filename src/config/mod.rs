// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for balance view derivation
//!
//! # Example: Using defaults
//!
//! ```rust
//! use visible_balances::BalanceViewConfig;
//!
//! // 18 fractional digits, memoization on
//! let config = BalanceViewConfig::default();
//! assert!(config.memoize);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use visible_balances::{BalanceViewConfigBuilder, FiatPrecision};
//!
//! let config = BalanceViewConfigBuilder::with_defaults()
//!     .precision(FiatPrecision::new(8).unwrap())
//!     .build();
//! assert_eq!(config.precision.as_u8(), 8);
//! ```

use crate::types::precision::FiatPrecision;

pub mod constants;

/// Configuration for balance view derivation
///
/// Use [`BalanceViewConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceViewConfig {
    /// Working precision for fiat arithmetic
    /// Default: 18 fractional digits
    pub precision: FiatPrecision,

    /// Remember the last view and reuse it while neither input snapshot changes
    /// Default: true
    pub memoize: bool,
}

impl Default for BalanceViewConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl BalanceViewConfig {
    /// Create config with standard precision and memoization enabled
    pub fn with_common_defaults() -> Self {
        Self {
            precision: FiatPrecision::STANDARD,
            memoize: constants::DEFAULT_MEMOIZE,
        }
    }

    /// Create config that recomputes the view on every request
    ///
    /// Suitable for testing, or when the caller already caches upstream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use visible_balances::BalanceViewConfig;
    ///
    /// let config = BalanceViewConfig::minimal();
    /// assert!(!config.memoize);
    /// ```
    pub fn minimal() -> Self {
        Self {
            precision: FiatPrecision::STANDARD,
            memoize: false,
        }
    }
}

/// Builder for [`BalanceViewConfig`]
///
/// # Example
///
/// ```rust
/// use visible_balances::{BalanceViewConfigBuilder, FiatPrecision};
///
/// let config = BalanceViewConfigBuilder::new()
///     .precision(FiatPrecision::new(6).unwrap())
///     .memoize(true)
///     .build();
/// assert!(config.memoize);
/// ```
pub struct BalanceViewConfigBuilder {
    config: BalanceViewConfig,
}

impl Default for BalanceViewConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceViewConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: BalanceViewConfig::minimal(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same defaults as [`BalanceViewConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: BalanceViewConfig::with_common_defaults(),
        }
    }

    /// Set the working precision
    pub fn precision(mut self, precision: FiatPrecision) -> Self {
        self.config.precision = precision;
        self
    }

    /// Enable or disable memoization
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.config.memoize = memoize;
        self
    }

    /// Build the configuration
    pub fn build(self) -> BalanceViewConfig {
        self.config
    }
}
