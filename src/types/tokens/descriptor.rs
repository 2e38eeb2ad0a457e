// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token descriptor as reported by the balance service

use serde::{Deserialize, Serialize};

/// Kind of asset a balance entry refers to
///
/// Serialized with the gateway's wire names (`"ERC20"`, `"ERC721"`,
/// `"NATIVE_TOKEN"`). Any other value decodes as [`TokenType::Unknown`] so
/// that new asset kinds don't break decoding of the whole balance set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Fungible contract token
    #[serde(rename = "ERC20")]
    Erc20,
    /// Non-fungible contract token
    #[serde(rename = "ERC721")]
    Erc721,
    /// The chain's intrinsic asset (ETH, MATIC, ...)
    #[serde(rename = "NATIVE_TOKEN")]
    NativeToken,
    /// Unrecognised asset kind
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

/// Identity and metadata of a token held by the wallet
///
/// Only [`address`](Self::address) and [`is_native`](Self::is_native) take
/// part in visibility decisions; the remaining fields are display metadata
/// carried through to the view untouched.
///
/// # Examples
///
/// ```
/// use visible_balances::TokenDescriptor;
///
/// let eth = TokenDescriptor::native("0x0000000000000000000000000000000000000000");
/// assert!(eth.is_native());
///
/// let usdc = TokenDescriptor::erc20("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48")
///     .with_symbol("USDC")
///     .with_decimals(6);
/// assert!(!usdc.is_native());
/// assert_eq!(usdc.symbol.as_deref(), Some("USDC"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    /// Chain identifier of the token, unique per token
    pub address: String,
    /// Asset kind
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ticker symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Token decimals (display metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    /// Logo URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl TokenDescriptor {
    /// Create a descriptor with the given address and kind and no metadata
    pub fn new(address: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            address: address.into(),
            token_type,
            name: None,
            symbol: None,
            decimals: None,
            logo_uri: None,
        }
    }

    /// Descriptor for the chain's native asset
    pub fn native(address: impl Into<String>) -> Self {
        Self::new(address, TokenType::NativeToken)
    }

    /// Descriptor for a fungible contract token
    pub fn erc20(address: impl Into<String>) -> Self {
        Self::new(address, TokenType::Erc20)
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ticker symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the token decimals
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Whether this is the chain's native asset; native assets are never hideable
    pub fn is_native(&self) -> bool {
        self.token_type == TokenType::NativeToken
    }
}

impl std::fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} ({})", symbol, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
