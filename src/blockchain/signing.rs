// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Key material for local signers.
//!
//! Session keys arrive either as raw hex or as a PEM file (SEC1
//! `EC PRIVATE KEY` or PKCS#8 `PRIVATE KEY`). Both end up as an alloy
//! [`PrivateKeySigner`].

use std::path::Path;

use alloy::signers::local::PrivateKeySigner;
use k256::SecretKey;

use crate::error::WalletError;

/// Generate a fresh secp256k1 key pair and return its checksummed address.
///
/// The private key is dropped with the signer.
pub fn generate_account() -> String {
    PrivateKeySigner::random().address().to_checksum(None)
}

/// Create a signer from a hex private key, with or without `0x`.
pub fn signer_from_hex(private_key_hex: &str) -> Result<PrivateKeySigner, WalletError> {
    let trimmed = private_key_hex.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let key_bytes = alloy::hex::decode(trimmed)
        .map_err(|e| WalletError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| WalletError::InvalidPrivateKey(e.to_string()))
}

/// Parse a PEM-encoded private key to a hex string (64 characters, no `0x`).
pub fn pem_to_hex(pem_bytes: &[u8]) -> Result<String, WalletError> {
    let pem_str = std::str::from_utf8(pem_bytes)
        .map_err(|e| WalletError::InvalidPrivateKey(format!("Invalid UTF-8: {}", e)))?;

    let pem = pem::parse(pem_str)
        .map_err(|e| WalletError::InvalidPrivateKey(format!("Invalid PEM: {}", e)))?;

    let secret_key = match pem.tag() {
        "EC PRIVATE KEY" => SecretKey::from_sec1_der(pem.contents()).map_err(|e| e.to_string()),
        "PRIVATE KEY" => {
            use k256::pkcs8::DecodePrivateKey;
            SecretKey::from_pkcs8_der(pem.contents()).map_err(|e| e.to_string())
        }
        other => Err(format!("unsupported PEM tag `{}`", other)),
    }
    .map_err(|e| WalletError::InvalidPrivateKey(format!("Invalid key format: {}", e)))?;

    Ok(alloy::hex::encode(secret_key.to_bytes()))
}

/// Load a signer from a PEM file on disk.
pub fn signer_from_pem_file(path: &Path) -> Result<PrivateKeySigner, WalletError> {
    let bytes = std::fs::read(path).map_err(|e| {
        WalletError::InvalidPrivateKey(format!("Cannot read {}: {}", path.display(), e))
    })?;
    signer_from_hex(&pem_to_hex(&bytes)?)
}
