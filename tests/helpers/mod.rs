// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for visible-balances integration tests
//!
//! Provides gateway-shaped fixtures and collaborator mocks so the view can be
//! exercised without a balance service or a persisted hidden-token store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use visible_balances::{
    BalanceEntry, BalanceSet, BalanceSource, BalanceState, HiddenTokenSet, HiddenTokenStore,
    TokenDescriptor,
};

/// Address the gateway reports for the chain's native asset
#[allow(dead_code)]
pub const NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// USDC on Ethereum mainnet
#[allow(dead_code)]
pub const USDC_ADDRESS: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

/// DAI on Ethereum mainnet
#[allow(dead_code)]
pub const DAI_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

/// A gateway balance payload with a native asset and two ERC-20 tokens
#[allow(dead_code)]
pub const GATEWAY_PAYLOAD: &str = r#"{
    "fiatTotal": "3512.127654321098765432109",
    "items": [
        {
            "tokenInfo": {
                "type": "NATIVE_TOKEN",
                "address": "0x0000000000000000000000000000000000000000",
                "decimals": 18,
                "symbol": "ETH",
                "name": "Ether",
                "logoUri": "https://safe-transaction-assets.safe.global/chains/1/currency_logo.png"
            },
            "balance": "1000000000000000000",
            "fiatBalance": "2500.00",
            "fiatConversion": "2500.00"
        },
        {
            "tokenInfo": {
                "type": "ERC20",
                "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                "decimals": 6,
                "symbol": "USDC",
                "name": "USD Coin"
            },
            "balance": "1000000000",
            "fiatBalance": "1000.0001",
            "fiatConversion": "1.0000001"
        },
        {
            "tokenInfo": {
                "type": "ERC20",
                "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
                "decimals": 18,
                "symbol": "DAI",
                "name": "Dai Stablecoin"
            },
            "balance": "12127554321098765432",
            "fiatBalance": "12.127554321098765432109",
            "fiatConversion": "1"
        }
    ]
}"#;

/// Entry for a fungible token with the given fiat balance
#[allow(dead_code)]
pub fn erc20_entry(address: &str, fiat_balance: &str) -> BalanceEntry {
    BalanceEntry::new(TokenDescriptor::erc20(address), fiat_balance)
}

/// Entry for the native asset with the given fiat balance
#[allow(dead_code)]
pub fn native_entry(address: &str, fiat_balance: &str) -> BalanceEntry {
    BalanceEntry::new(TokenDescriptor::native(address), fiat_balance)
}

/// Hidden set from a list of addresses
#[allow(dead_code)]
pub fn hidden(addresses: &[&str]) -> HiddenTokenSet {
    addresses.iter().copied().collect()
}

/// Token A (`0x1`, 10.00) and native token B (`0x2`, 5.00), total 15.00
#[allow(dead_code)]
pub fn two_token_balances() -> BalanceSet {
    BalanceSet::new(
        vec![erc20_entry("0x1", "10.00"), native_entry("0x2", "5.00")],
        "15.00",
    )
}

/// Route test logs through the test writer; honours `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Balance source that allocates a fresh `Arc` on every snapshot
///
/// Consecutive snapshots are structurally equal but never pointer-equal, which
/// exercises the value-equality path of the view's memoization.
#[allow(dead_code)]
pub struct FreshSnapshotSource {
    state: BalanceState,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FreshSnapshotSource {
    pub fn new(balances: BalanceSet) -> Self {
        Self {
            state: BalanceState {
                balances,
                loading: false,
                error: None,
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of snapshots handed out so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BalanceSource for FreshSnapshotSource {
    fn snapshot(&self) -> Arc<BalanceState> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Arc::new(self.state.clone())
    }
}

/// Hidden-token store with a fixed set, also handing out fresh `Arc`s
#[allow(dead_code)]
pub struct FixedHiddenTokens(pub HiddenTokenSet);

impl HiddenTokenStore for FixedHiddenTokens {
    fn hidden_tokens(&self) -> Arc<HiddenTokenSet> {
        Arc::new(self.0.clone())
    }
}
