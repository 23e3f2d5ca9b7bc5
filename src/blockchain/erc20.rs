// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract binding.
//!
//! Only the two methods the wallet needs are declared: `balanceOf` for
//! balance reads and `transfer` for token sends.

use std::str::FromStr;

use alloy::{
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};

use crate::error::WalletError;

sol! {
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Gas limit attached to every token transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 510_579;

/// A token contract address paired with the `IERC20` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Erc20Binding {
    address: Address,
}

impl Erc20Binding {
    pub fn new(contract_address: &str) -> Result<Self, WalletError> {
        let address = Address::from_str(contract_address)
            .map_err(|e| WalletError::InvalidAddress(format!("Invalid token address: {}", e)))?;
        Ok(Self { address })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Read-only `balanceOf(owner)` call.
    pub fn balance_of_request(&self, owner: Address) -> TransactionRequest {
        let call = IERC20::balanceOfCall { account: owner };
        TransactionRequest::default()
            .to(self.address)
            .input(Bytes::from(call.abi_encode()).into())
    }

    /// Decode the `uint256` returned by `balanceOf`.
    pub fn decode_balance(&self, output: &[u8]) -> Result<U256, WalletError> {
        IERC20::balanceOfCall::abi_decode_returns(output)
            .map_err(|e| WalletError::ContractError(format!("Invalid balanceOf output: {}", e)))
    }

    /// Zero-value `transfer(to, amount)` transaction sent from `from`.
    pub fn transfer_request(&self, from: Address, to: Address, amount: U256) -> TransactionRequest {
        let call = IERC20::transferCall { to, amount };
        TransactionRequest::default()
            .from(from)
            .to(self.address)
            .value(U256::ZERO)
            .gas_limit(TRANSFER_GAS_LIMIT)
            .input(Bytes::from(call.abi_encode()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, TxKind};

    const TOKEN: &str = "0x07865c6E87B9F70255377e024ace6630C1Eaa37F";

    #[test]
    fn rejects_malformed_contract_address() {
        assert!(matches!(
            Erc20Binding::new("0x1234"),
            Err(WalletError::InvalidAddress(_))
        ));
    }

    #[test]
    fn transfer_request_targets_contract_with_fixed_gas() {
        let binding = Erc20Binding::new(TOKEN).unwrap();
        let from = address!("0x1111111111111111111111111111111111111111");
        let to = address!("0x2222222222222222222222222222222222222222");

        let tx = binding.transfer_request(from, to, U256::from(2_000_000u64));

        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.to, Some(TxKind::Call(binding.address())));
        assert_eq!(tx.value, Some(U256::ZERO));
        assert_eq!(tx.gas, Some(TRANSFER_GAS_LIMIT));

        let data = tx.input.input().unwrap();
        let decoded = IERC20::transferCall::abi_decode(data).unwrap();
        assert_eq!(decoded.to, to);
        assert_eq!(decoded.amount, U256::from(2_000_000u64));
    }

    #[test]
    fn decodes_balance_output() {
        let binding = Erc20Binding::new(TOKEN).unwrap();
        let raw = U256::from(1_500_000u64).to_be_bytes::<32>();
        assert_eq!(binding.decode_balance(&raw).unwrap(), U256::from(1_500_000u64));
        assert!(binding.decode_balance(&[0u8; 3]).is_err());
    }
}
