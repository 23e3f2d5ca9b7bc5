// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup into an
//! [`AppConfig`] that is passed explicitly to the console and the auth
//! provider.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WALLET_CLIENT_ID` | Client id issued by the auth provider | Required |
//! | `WALLET_CHAIN_NAMESPACE` | Chain family (`eip155`) | `eip155` |
//! | `WALLET_CHAIN_ID` | Chain id, decimal or `0x` hex | `0x5` |
//! | `WALLET_RPC_URL` | JSON-RPC endpoint | `https://rpc.ankr.com/eth_goerli` |
//! | `WALLET_EXPLORER_URL` | Block explorer base URL | `https://goerli.etherscan.io` |
//! | `WALLET_TOKEN_ADDRESS` | ERC-20 token contract | Goerli USDC |
//! | `WALLET_PRIVATE_KEY` | Session key as hex | Generated |
//! | `WALLET_PRIVATE_KEY_PEM` | Path to a PEM session key | Unset |
//! | `WALLET_USER_EMAIL` | Email reported by `user` | Unset |
//! | `WALLET_USER_NAME` | Name reported by `user` | Unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::fmt;
use std::path::PathBuf;

use crate::blockchain::{ChainNamespace, NetworkConfig, USDC_GOERLI};

pub const CLIENT_ID_ENV: &str = "WALLET_CLIENT_ID";
pub const CHAIN_NAMESPACE_ENV: &str = "WALLET_CHAIN_NAMESPACE";
pub const CHAIN_ID_ENV: &str = "WALLET_CHAIN_ID";
pub const RPC_URL_ENV: &str = "WALLET_RPC_URL";
pub const EXPLORER_URL_ENV: &str = "WALLET_EXPLORER_URL";
pub const TOKEN_ADDRESS_ENV: &str = "WALLET_TOKEN_ADDRESS";
pub const PRIVATE_KEY_ENV: &str = "WALLET_PRIVATE_KEY";
pub const PRIVATE_KEY_PEM_ENV: &str = "WALLET_PRIVATE_KEY_PEM";
pub const USER_EMAIL_ENV: &str = "WALLET_USER_EMAIL";
pub const USER_NAME_ENV: &str = "WALLET_USER_NAME";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Where the session key for local login comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Fresh key generated on first login
    Generated,
    Hex(String),
    PemFile(PathBuf),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Generated => f.write_str("Generated"),
            KeySource::Hex(_) => f.write_str("Hex(<redacted>)"),
            KeySource::PemFile(path) => f.debug_tuple("PemFile").field(path).finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("Invalid value for `{var}`: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub network: NetworkConfig,
    pub token_address: String,
    pub session_key: KeySource,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let client_id = get(CLIENT_ID_ENV).ok_or(ConfigError::Missing(CLIENT_ID_ENV))?;

        let mut network = NetworkConfig::goerli();
        if let Some(raw) = get(CHAIN_NAMESPACE_ENV) {
            network.namespace = raw.parse().map_err(|reason| ConfigError::Invalid {
                var: CHAIN_NAMESPACE_ENV,
                reason,
            })?;
        }
        if let Some(raw) = get(CHAIN_ID_ENV) {
            network.chain_id = parse_chain_id(&raw).ok_or_else(|| ConfigError::Invalid {
                var: CHAIN_ID_ENV,
                reason: format!("`{raw}` is not a chain id"),
            })?;
        }
        if let Some(url) = get(RPC_URL_ENV) {
            url::Url::parse(&url).map_err(|e| ConfigError::Invalid {
                var: RPC_URL_ENV,
                reason: e.to_string(),
            })?;
            network.name = format!("Chain {}", network.chain_id);
            network.rpc_url = url;
        }
        if let Some(url) = get(EXPLORER_URL_ENV) {
            network.explorer_url = url;
        }

        let session_key = match (get(PRIVATE_KEY_ENV), get(PRIVATE_KEY_PEM_ENV)) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid {
                    var: PRIVATE_KEY_ENV,
                    reason: format!("set either {PRIVATE_KEY_ENV} or {PRIVATE_KEY_PEM_ENV}, not both"),
                })
            }
            (Some(hex), None) => KeySource::Hex(hex),
            (None, Some(path)) => KeySource::PemFile(PathBuf::from(path)),
            (None, None) => KeySource::Generated,
        };

        let log_format = match get(LOG_FORMAT_ENV).as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: LOG_FORMAT_ENV,
                    reason: format!("expected `json` or `pretty`, got `{other}`"),
                })
            }
        };

        Ok(Self {
            client_id,
            network,
            token_address: get(TOKEN_ADDRESS_ENV).unwrap_or_else(|| USDC_GOERLI.address.to_string()),
            session_key,
            user_email: get(USER_EMAIL_ENV),
            user_name: get(USER_NAME_ENV),
            log_format,
        })
    }

    pub fn namespace(&self) -> ChainNamespace {
        self.network.namespace
    }
}

/// Parse a chain id written as decimal or `0x`-prefixed hex.
fn parse_chain_id(raw: &str) -> Option<u64> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}
