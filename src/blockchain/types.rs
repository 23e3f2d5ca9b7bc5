// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chain family a connected provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainNamespace {
    /// EVM chains identified by an EIP-155 chain id
    Eip155,
    Solana,
    Other,
}

impl ChainNamespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainNamespace::Eip155 => "eip155",
            ChainNamespace::Solana => "solana",
            ChainNamespace::Other => "other",
        }
    }
}

impl fmt::Display for ChainNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainNamespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eip155" => Ok(ChainNamespace::Eip155),
            "solana" => Ok(ChainNamespace::Solana),
            "other" => Ok(ChainNamespace::Other),
            other => Err(format!("unknown chain namespace `{other}`")),
        }
    }
}

/// Network the wallet is connected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: String,
    pub namespace: ChainNamespace,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Block explorer URL
    pub explorer_url: String,
}

impl NetworkConfig {
    /// Ethereum Goerli testnet behind the public Ankr endpoint.
    pub fn goerli() -> Self {
        Self {
            name: "Ethereum Goerli Testnet".to_string(),
            namespace: ChainNamespace::Eip155,
            chain_id: GOERLI_CHAIN_ID,
            rpc_url: "https://rpc.ankr.com/eth_goerli".to_string(),
            explorer_url: "https://goerli.etherscan.io".to_string(),
        }
    }

    /// Explorer link for a transaction hash.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

/// Goerli chain id (`0x5`).
pub const GOERLI_CHAIN_ID: u64 = 5;

/// Decimals of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// ERC-20 token deployed at a fixed address.
#[derive(Debug, Clone)]
pub struct Erc20Token {
    pub symbol: &'static str,
    pub decimals: u8,
    pub address: &'static str,
}

/// Circle's test USDC on Goerli.
pub const USDC_GOERLI: Erc20Token = Erc20Token {
    symbol: "USDC",
    decimals: 6,
    address: "0x07865c6E87B9F70255377e024ace6630C1Eaa37F",
};

/// Outcome of a sent transaction once its receipt is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Receipt status (`true` when the transaction executed successfully)
    pub success: bool,
    /// Transaction hash, `0x`-prefixed
    pub transaction_hash: String,
}
