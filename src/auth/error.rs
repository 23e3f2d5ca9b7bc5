// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use crate::error::WalletError;

/// Authentication provider error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider was built without a client id
    #[error("Client id is required")]
    MissingClientId,

    /// An operation needs a live session
    #[error("No active session")]
    NotConnected,

    /// The session key could not be resolved
    #[error("Session key unavailable: {0}")]
    KeyUnavailable(String),

    /// The connected provider could not be created
    #[error("Failed to connect provider: {0}")]
    ProviderUnavailable(#[from] WalletError),
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingClientId => "missing_client_id",
            AuthError::NotConnected => "not_connected",
            AuthError::KeyUnavailable(_) => "key_unavailable",
            AuthError::ProviderUnavailable(_) => "provider_unavailable",
        }
    }
}
