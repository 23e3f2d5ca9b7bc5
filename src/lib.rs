// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Wallet Console - Interactive EVM Wallet Demo
//!
//! Logs a user in through an authentication provider, wraps the connected
//! provider in a wallet adapter and sends native and ERC-20 transfers on a
//! test network.
//!
//! ## Modules
//!
//! - `auth` - Authentication provider contract and the local-key provider
//! - `blockchain` - RPC client boundary, ERC-20 binding, units and keys (alloy)
//! - `wallet` - Wallet provider trait, EVM adapter and factory
//! - `shell` - Console state machine, commands and status panel
//! - `config` - Environment configuration

pub mod auth;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod shell;
pub mod wallet;
