// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EIP-155 wallet adapter.

use alloy::primitives::Address;
use async_trait::async_trait;

use super::WalletProvider;
use crate::blockchain::{
    signing,
    transactions::{format_amount, native_transfer_request, parse_address, parse_amount},
    ChainNamespace, ConnectedProvider, Erc20Binding, TransactionResult, NATIVE_DECIMALS,
    USDC_GOERLI,
};
use crate::error::WalletError;

/// Decimals the bound token contract uses.
const TOKEN_DECIMALS: u8 = USDC_GOERLI.decimals;

/// Wallet adapter for EVM chains.
///
/// Every method delegates to the connected provider; nothing is cached or
/// retried.
pub struct EthWalletAdapter {
    provider: ConnectedProvider,
    token: Erc20Binding,
}

impl EthWalletAdapter {
    pub fn new(provider: ConnectedProvider, token: Erc20Binding) -> Self {
        Self { provider, token }
    }

    async fn first_account(&self) -> Result<Option<Address>, WalletError> {
        Ok(self.provider.accounts().await?.into_iter().next())
    }

    async fn sender(&self) -> Result<Address, WalletError> {
        self.first_account().await?.ok_or_else(|| {
            WalletError::PreconditionNotMet("provider manages no account".to_string())
        })
    }
}

#[async_trait]
impl WalletProvider for EthWalletAdapter {
    fn namespace(&self) -> ChainNamespace {
        ChainNamespace::Eip155
    }

    fn create_account(&self) -> String {
        signing::generate_account()
    }

    async fn get_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self.provider.accounts().await?;
        Ok(accounts.iter().map(|a| a.to_checksum(None)).collect())
    }

    async fn get_private_key(&self) -> Result<String, WalletError> {
        self.provider.private_key().await
    }

    async fn get_chain_id(&self) -> Result<u64, WalletError> {
        self.provider.chain_id().await
    }

    async fn get_balance(&self) -> Result<Option<String>, WalletError> {
        let Some(account) = self.first_account().await? else {
            return Ok(None);
        };
        let balance = self.provider.balance(account).await?;
        Ok(Some(format_amount(balance, NATIVE_DECIMALS)))
    }

    async fn get_balance_usdc(&self) -> Result<Option<String>, WalletError> {
        let Some(account) = self.first_account().await? else {
            return Ok(None);
        };
        let output = self.provider.call(self.token.balance_of_request(account)).await?;
        let balance = self.token.decode_balance(&output)?;
        Ok(Some(format_amount(balance, TOKEN_DECIMALS)))
    }

    async fn send_eth(&self, to: &str, amount: &str) -> Result<TransactionResult, WalletError> {
        let to = parse_address(to)?;
        let value = parse_amount(amount, NATIVE_DECIMALS)?;
        let from = self.sender().await?;

        tracing::debug!(%from, %to, %value, "Sending native transfer");
        self.provider
            .send_transaction(native_transfer_request(from, to, value))
            .await
    }

    async fn send_usdc(&self, to: &str, amount: &str) -> Result<TransactionResult, WalletError> {
        let to = parse_address(to)?;
        let quantity = parse_amount(amount, TOKEN_DECIMALS)?;
        let from = self.sender().await?;

        tracing::debug!(%from, %to, %quantity, token = %self.token.address(), "Sending token transfer");
        self.provider
            .send_transaction(self.token.transfer_request(from, to, quantity))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy::primitives::{address, Bytes, TxKind, U256};
    use alloy::sol_types::SolCall;

    use super::*;
    use crate::blockchain::erc20::IERC20;
    use crate::blockchain::mock::MockRpcClient;
    use crate::blockchain::TRANSFER_GAS_LIMIT;

    const OWNER: Address = address!("0x1111111111111111111111111111111111111111");
    const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

    fn adapter(client: Arc<MockRpcClient>) -> EthWalletAdapter {
        EthWalletAdapter::new(client, Erc20Binding::new(USDC_GOERLI.address).unwrap())
    }

    #[tokio::test]
    async fn send_usdc_scales_amount_by_token_decimals() {
        let client = Arc::new(MockRpcClient::with_account(OWNER));
        let wallet = adapter(client.clone());

        let result = wallet.send_usdc(RECIPIENT, "2").await.unwrap();
        assert!(result.success);

        let sent = client.sent_transactions();
        assert_eq!(sent.len(), 1);
        let tx = &sent[0];
        assert_eq!(tx.from, Some(OWNER));
        assert_eq!(
            tx.to,
            Some(TxKind::Call(USDC_GOERLI.address.parse().unwrap()))
        );
        assert_eq!(tx.value, Some(U256::ZERO));
        assert_eq!(tx.gas, Some(TRANSFER_GAS_LIMIT));

        let call = IERC20::transferCall::abi_decode(tx.input.input().unwrap()).unwrap();
        assert_eq!(call.to, RECIPIENT.parse::<Address>().unwrap());
        assert_eq!(call.amount, U256::from(2_000_000u64));
    }

    #[tokio::test]
    async fn send_eth_converts_to_wei() {
        let client = Arc::new(MockRpcClient::with_account(OWNER));
        let wallet = adapter(client.clone());

        wallet.send_eth(RECIPIENT, "1").await.unwrap();

        let tx = &client.sent_transactions()[0];
        assert_eq!(tx.from, Some(OWNER));
        assert_eq!(tx.value, Some(U256::from(1_000_000_000_000_000_000u64)));
        assert!(tx.input.input().is_none());
    }

    #[tokio::test]
    async fn send_without_account_is_precondition_error() {
        let client = Arc::new(MockRpcClient::default());
        let wallet = adapter(client.clone());

        assert!(matches!(
            wallet.send_eth(RECIPIENT, "1").await,
            Err(WalletError::PreconditionNotMet(_))
        ));
        assert!(client.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn send_rejects_bad_input_before_rpc() {
        let client = Arc::new(MockRpcClient::with_account(OWNER));
        let wallet = adapter(client.clone());

        assert!(matches!(
            wallet.send_usdc("0xabc", "1").await,
            Err(WalletError::InvalidAddress(_))
        ));
        assert!(matches!(
            wallet.send_usdc(RECIPIENT, "lots").await,
            Err(WalletError::InvalidAmount(_))
        ));
        assert!(client.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn usdc_balance_uses_six_decimals() {
        let client = Arc::new(MockRpcClient {
            call_output: Bytes::from(U256::from(1_500_000u64).to_be_bytes::<32>().to_vec()),
            ..MockRpcClient::with_account(OWNER)
        });
        let wallet = adapter(client.clone());

        assert_eq!(wallet.get_balance_usdc().await.unwrap().as_deref(), Some("1.5"));

        let calls = client.calls.lock().unwrap();
        let call = IERC20::balanceOfCall::abi_decode(calls[0].input.input().unwrap()).unwrap();
        assert_eq!(call.account, OWNER);
    }

    #[tokio::test]
    async fn native_balance_in_ether() {
        let client = Arc::new(MockRpcClient {
            balance: U256::from(2_500_000_000_000_000_000u64),
            ..MockRpcClient::with_account(OWNER)
        });
        let wallet = adapter(client);

        assert_eq!(wallet.get_balance().await.unwrap().as_deref(), Some("2.5"));
    }

    #[tokio::test]
    async fn balance_without_account_is_empty() {
        let wallet = adapter(Arc::new(MockRpcClient::default()));
        assert_eq!(wallet.get_balance().await.unwrap(), None);
        assert_eq!(wallet.get_balance_usdc().await.unwrap(), None);
    }

    #[tokio::test]
    async fn accounts_are_checksummed() {
        let account = address!("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        let wallet = adapter(Arc::new(MockRpcClient::with_account(account)));

        assert_eq!(
            wallet.get_accounts().await.unwrap(),
            vec!["0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string()]
        );
    }

    #[tokio::test]
    async fn private_key_export_unsupported() {
        let wallet = adapter(Arc::new(MockRpcClient::with_account(OWNER)));
        assert!(matches!(
            wallet.get_private_key().await,
            Err(WalletError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn create_account_returns_fresh_addresses() {
        let wallet = adapter(Arc::new(MockRpcClient::default()));
        let a = wallet.create_account();
        let b = wallet.create_account();
        assert!(a.parse::<Address>().is_ok());
        assert_ne!(a, b);
    }
}
