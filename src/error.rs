// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet operation errors.

/// Errors returned by wallet adapters and the RPC layer underneath them.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC error: {0}")]
    RpcFailure(String),

    #[error("Contract error: {0}")]
    ContractError(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl WalletError {
    /// Short machine-readable code, used as a structured log field.
    pub fn error_code(&self) -> &'static str {
        match self {
            WalletError::PreconditionNotMet(_) => "precondition_not_met",
            WalletError::InvalidAddress(_) => "invalid_address",
            WalletError::InvalidAmount(_) => "invalid_amount",
            WalletError::InvalidPrivateKey(_) => "invalid_private_key",
            WalletError::InvalidRpcUrl(_) => "invalid_rpc_url",
            WalletError::RpcFailure(_) => "rpc_failure",
            WalletError::ContractError(_) => "contract_error",
            WalletError::UnsupportedOperation(_) => "unsupported_operation",
        }
    }
}
