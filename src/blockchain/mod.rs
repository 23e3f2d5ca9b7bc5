// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration for EVM networks.
//!
//! This module provides functionality for:
//! - The RPC client boundary a connected provider implements
//! - ERC-20 `balanceOf` / `transfer` encoding
//! - Unit conversion and transaction building
//! - Local key material (generation, hex and PEM import)

pub mod client;
pub mod erc20;
#[cfg(test)]
pub mod mock;
pub mod signing;
pub mod transactions;
pub mod types;

pub use client::{AlloyRpcClient, ConnectedProvider, RpcClient};
pub use erc20::{Erc20Binding, TRANSFER_GAS_LIMIT};
pub use types::*;
