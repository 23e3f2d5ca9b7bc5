// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet adapter selection by chain namespace.

use std::sync::Arc;

use super::{EthWalletAdapter, WalletProvider};
use crate::blockchain::{ChainNamespace, ConnectedProvider, Erc20Binding};
use crate::error::WalletError;

/// Builds the wallet adapter for a connected provider.
#[derive(Debug, Clone)]
pub struct WalletFactory {
    namespace: ChainNamespace,
    token: Erc20Binding,
}

impl WalletFactory {
    pub fn new(namespace: ChainNamespace, token_address: &str) -> Result<Self, WalletError> {
        Ok(Self {
            namespace,
            token: Erc20Binding::new(token_address)?,
        })
    }

    pub fn namespace(&self) -> ChainNamespace {
        self.namespace
    }

    /// Wrap `provider` in the adapter for the configured namespace.
    pub fn build(&self, provider: ConnectedProvider) -> Result<Arc<dyn WalletProvider>, WalletError> {
        match self.namespace {
            ChainNamespace::Eip155 => Ok(Arc::new(EthWalletAdapter::new(provider, self.token))),
            other => Err(WalletError::UnsupportedOperation(format!(
                "no wallet adapter for chain namespace `{}`",
                other
            ))),
        }
    }
}
