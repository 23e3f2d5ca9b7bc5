// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet Providers
//!
//! The console talks to a connected provider only through [`WalletProvider`].
//! One implementation exists per chain family; [`WalletFactory`] picks it
//! from the configured [`ChainNamespace`](crate::blockchain::ChainNamespace).
//!
//! Balance reads and sends act on the first account the provider manages.
//! There is no account selection.

pub mod eth;
pub mod factory;

use async_trait::async_trait;

use crate::blockchain::{ChainNamespace, TransactionResult};
use crate::error::WalletError;

pub use eth::EthWalletAdapter;
pub use factory::WalletFactory;

/// Wallet operations available to the console.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Chain family this adapter talks to.
    fn namespace(&self) -> ChainNamespace;

    /// Generate a new local key pair and return its address.
    fn create_account(&self) -> String;

    async fn get_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Export the session private key, if the provider allows it.
    async fn get_private_key(&self) -> Result<String, WalletError>;

    async fn get_chain_id(&self) -> Result<u64, WalletError>;

    /// Native balance of the first managed account in whole-coin units.
    ///
    /// `None` when the provider manages no account.
    async fn get_balance(&self) -> Result<Option<String>, WalletError>;

    /// Token balance of the first managed account, normalised to 6 decimals.
    async fn get_balance_usdc(&self) -> Result<Option<String>, WalletError>;

    async fn send_eth(&self, to: &str, amount: &str) -> Result<TransactionResult, WalletError>;

    async fn send_usdc(&self, to: &str, amount: &str) -> Result<TransactionResult, WalletError>;
}
