// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`RpcClient`] for tests.

use std::sync::Mutex;

use alloy::{
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::client::RpcClient;
use super::types::TransactionResult;
use crate::error::WalletError;

/// Scripted RPC client that records every request it receives.
#[derive(Debug, Default)]
pub struct MockRpcClient {
    pub accounts: Vec<Address>,
    pub balance: U256,
    pub chain_id: u64,
    /// Raw bytes returned from `eth_call`
    pub call_output: Bytes,
    pub private_key: Option<String>,
    /// When set, every call fails with this RPC error
    pub fail_with: Option<String>,
    /// Receipts report a reverted transaction
    pub reverted: bool,
    pub calls: Mutex<Vec<TransactionRequest>>,
    pub sent: Mutex<Vec<TransactionRequest>>,
}

impl MockRpcClient {
    pub fn with_account(account: Address) -> Self {
        Self {
            accounts: vec![account],
            chain_id: 5,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), WalletError> {
        match &self.fail_with {
            Some(message) => Err(WalletError::RpcFailure(message.clone())),
            None => Ok(()),
        }
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.check()?;
        Ok(self.accounts.clone())
    }

    async fn balance(&self, _address: Address) -> Result<U256, WalletError> {
        self.check()?;
        Ok(self.balance)
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        self.check()?;
        Ok(self.chain_id)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.check()?;
        self.calls.lock().unwrap().push(tx);
        Ok(self.call_output.clone())
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TransactionResult, WalletError> {
        self.check()?;
        let mut sent = self.sent.lock().unwrap();
        sent.push(tx);
        Ok(TransactionResult {
            success: !self.reverted,
            transaction_hash: format!("0x{:064x}", sent.len()),
        })
    }

    async fn private_key(&self) -> Result<String, WalletError> {
        self.check()?;
        self.private_key
            .clone()
            .ok_or_else(|| WalletError::UnsupportedOperation("eth_private_key".to_string()))
    }
}
