// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! RPC client boundary.
//!
//! [`RpcClient`] is the connected-provider handle an authentication provider
//! hands out. [`AlloyRpcClient`] is the HTTP implementation: an alloy provider
//! with a wallet filler, so `send_transaction` signs locally before
//! broadcasting.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;

use super::types::{NetworkConfig, TransactionResult};
use crate::error::WalletError;

/// Vendor RPC method some hosted wallets answer with the session key.
pub const PRIVATE_KEY_METHOD: &str = "eth_private_key";

/// How long a broadcast transaction may wait for its receipt.
pub const RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);

/// RPC calls the wallet adapters issue against a connected provider.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Accounts managed by this provider, in provider order.
    async fn accounts(&self) -> Result<Vec<Address>, WalletError>;

    async fn balance(&self, address: Address) -> Result<U256, WalletError>;

    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// `eth_call` against the latest block.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError>;

    /// Sign, broadcast and wait for the receipt.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TransactionResult, WalletError>;

    /// Export the session private key as hex.
    async fn private_key(&self) -> Result<String, WalletError>;
}

/// Shared handle to a connected provider.
pub type ConnectedProvider = Arc<dyn RpcClient>;

/// HTTP RPC client for an EVM network.
pub struct AlloyRpcClient {
    network: NetworkConfig,
    provider: DynProvider,
    /// Session key, when the key is held in-process
    signer: Option<PrivateKeySigner>,
}

impl AlloyRpcClient {
    /// Connect to `network`, signing with `signer`.
    ///
    /// No request is issued here; the first RPC call opens the connection.
    pub fn connect(network: NetworkConfig, signer: PrivateKeySigner) -> Result<Self, WalletError> {
        let url = parse_rpc_url(&network.rpc_url)?;
        let wallet = EthereumWallet::from(signer.clone());
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

        Ok(Self {
            network,
            provider,
            signer: Some(signer),
        })
    }

    /// Connect without a local key; accounts and signing are the node's.
    ///
    /// Hook for node-managed accounts (an auth SDK's embedded provider):
    /// key export then goes through the node's `eth_private_key` method.
    pub fn connect_remote(network: NetworkConfig) -> Result<Self, WalletError> {
        let url = parse_rpc_url(&network.rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            network,
            provider,
            signer: None,
        })
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

impl fmt::Debug for AlloyRpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlloyRpcClient")
            .field("network", &self.network.name)
            .field("signer", &self.signer.as_ref().map(|s| s.address()))
            .finish()
    }
}

fn parse_rpc_url(raw: &str) -> Result<url::Url, WalletError> {
    raw.parse()
        .map_err(|e: url::ParseError| WalletError::InvalidRpcUrl(e.to_string()))
}

fn rpc_error(e: impl fmt::Display) -> WalletError {
    WalletError::RpcFailure(e.to_string())
}

#[async_trait]
impl RpcClient for AlloyRpcClient {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        match &self.signer {
            Some(signer) => Ok(vec![signer.address()]),
            None => self.provider.get_accounts().await.map_err(rpc_error),
        }
    }

    async fn balance(&self, address: Address) -> Result<U256, WalletError> {
        self.provider.get_balance(address).await.map_err(rpc_error)
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        self.provider.get_chain_id().await.map_err(rpc_error)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.provider
            .call(tx)
            .await
            .map_err(|e| WalletError::ContractError(e.to_string()))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TransactionResult, WalletError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| WalletError::RpcFailure(format!("Failed to send: {}", e)))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        tracing::info!(
            tx_hash = %tx_hash,
            explorer_url = %self.network.explorer_tx_url(&tx_hash),
            "Transaction broadcast, waiting for receipt"
        );

        let receipt = pending
            .with_timeout(Some(RECEIPT_TIMEOUT))
            .get_receipt()
            .await
            .map_err(|e| WalletError::RpcFailure(format!("Failed to get receipt: {}", e)))?;

        Ok(TransactionResult {
            success: receipt.status(),
            transaction_hash: format!("{:?}", receipt.transaction_hash),
        })
    }

    async fn private_key(&self) -> Result<String, WalletError> {
        if let Some(signer) = &self.signer {
            return Ok(alloy::hex::encode(signer.to_bytes()));
        }

        self.provider
            .raw_request::<_, String>(PRIVATE_KEY_METHOD.into(), ())
            .await
            .map_err(|e| WalletError::UnsupportedOperation(format!("{}: {}", PRIVATE_KEY_METHOD, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::signing::signer_from_hex;

    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn unreachable_network() -> NetworkConfig {
        NetworkConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            ..NetworkConfig::goerli()
        }
    }

    #[tokio::test]
    async fn local_signer_is_the_only_account() {
        let signer = signer_from_hex(DEV_KEY).unwrap();
        let expected = signer.address();
        let client = AlloyRpcClient::connect(unreachable_network(), signer).unwrap();

        assert_eq!(client.accounts().await.unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn local_key_exports_without_rpc() {
        let signer = signer_from_hex(DEV_KEY).unwrap();
        let client = AlloyRpcClient::connect(unreachable_network(), signer).unwrap();

        assert_eq!(client.private_key().await.unwrap(), DEV_KEY);
    }

    #[tokio::test]
    async fn remote_key_export_failure_is_unsupported() {
        let client = AlloyRpcClient::connect_remote(unreachable_network()).unwrap();

        assert!(matches!(
            client.private_key().await,
            Err(WalletError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn rejects_invalid_rpc_url() {
        let network = NetworkConfig {
            rpc_url: "not a url".to_string(),
            ..NetworkConfig::goerli()
        };
        assert!(matches!(
            AlloyRpcClient::connect_remote(network),
            Err(WalletError::InvalidRpcUrl(_))
        ));
    }
}
