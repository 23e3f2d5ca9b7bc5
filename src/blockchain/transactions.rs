// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction building and unit conversion.

use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};

use crate::error::WalletError;

/// Parse a recipient or sender address.
pub fn parse_address(raw: &str) -> Result<Address, WalletError> {
    Address::from_str(raw.trim())
        .map_err(|e| WalletError::InvalidAddress(format!("`{}`: {}", raw, e)))
}

/// Native transfer of `amount_wei` from `from` to `to`.
///
/// Gas, fees and nonce are left for the provider's fillers.
pub fn native_transfer_request(from: Address, to: Address, amount_wei: U256) -> TransactionRequest {
    TransactionRequest::default().from(from).to(to).value(amount_wei)
}

/// Parse a human-readable amount to wei (or token units).
///
/// # Arguments
/// * `amount` - Amount as a string (e.g., "1.5")
/// * `decimals` - Number of decimals (18 for ETH, 6 for USDC)
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, WalletError> {
    let amount = amount.trim();
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(WalletError::InvalidAmount("Amount is empty".to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(WalletError::InvalidAmount(format!("`{}` is not a decimal number", amount)));
    }
    if fraction.len() > decimals as usize {
        return Err(WalletError::InvalidAmount(format!(
            "Too many decimal places (max {})",
            decimals
        )));
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10)
            .map_err(|_| WalletError::InvalidAmount("Invalid whole number".to_string()))?
    };

    // Pad with zeros to match decimals
    let padded = format!("{:0<width$}", fraction, width = decimals as usize);
    let fraction = if padded.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&padded, 10)
            .map_err(|_| WalletError::InvalidAmount("Invalid decimal".to_string()))?
    };

    let multiplier = U256::from(10u64).pow(U256::from(decimals));
    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(|| WalletError::InvalidAmount("Amount overflow".to_string()))
}

/// Format wei (or token units) to a human-readable amount, full precision.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }
}
