// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Local-key authentication provider.
//!
//! Logs in by loading a session key from configuration (hex or PEM file)
//! or, when none is configured, generating one that lives for the rest of
//! the process. The connected provider is an [`AlloyRpcClient`] signing
//! with that key.

use std::sync::Arc;

use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::{info, warn};

use super::error::AuthError;
use super::events::{EventEmitter, EventReceiver, LifecycleEvent};
use super::session::{AuthProvider, Session, UserInfo};
use crate::blockchain::{signing, AlloyRpcClient, ConnectedProvider, NetworkConfig};
use crate::config::{AppConfig, KeySource};

/// Verifier name reported in [`UserInfo`].
pub const LOCAL_VERIFIER: &str = "local-key";

pub struct LocalKeyAuth {
    client_id: String,
    network: NetworkConfig,
    key_source: KeySource,
    email: Option<String>,
    name: Option<String>,
    /// Key generated on first login when none is configured
    generated: Option<PrivateKeySigner>,
    session: Option<Session>,
    events: EventEmitter,
}

impl LocalKeyAuth {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
            network: config.network.clone(),
            key_source: config.session_key.clone(),
            email: config.user_email.clone(),
            name: config.user_name.clone(),
            generated: None,
            session: None,
            events: EventEmitter::default(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn ensure_client_id(&self) -> Result<(), AuthError> {
        if self.client_id.trim().is_empty() {
            return Err(AuthError::MissingClientId);
        }
        Ok(())
    }

    fn resolve_signer(&mut self) -> Result<PrivateKeySigner, AuthError> {
        let signer = match &self.key_source {
            KeySource::Hex(key) => signing::signer_from_hex(key),
            KeySource::PemFile(path) => signing::signer_from_pem_file(path),
            KeySource::Generated => {
                Ok(self.generated.get_or_insert_with(PrivateKeySigner::random).clone())
            }
        };
        signer.map_err(|e| AuthError::KeyUnavailable(e.to_string()))
    }

    fn open_session(&mut self) -> Result<ConnectedProvider, AuthError> {
        let signer = self.resolve_signer()?;
        let address = signer.address().to_checksum(None);
        let client = AlloyRpcClient::connect(self.network.clone(), signer)?;
        let provider: ConnectedProvider = Arc::new(client);

        let user = UserInfo {
            email: self.email.clone(),
            name: self.name.clone(),
            verifier: LOCAL_VERIFIER.to_string(),
            verifier_id: address.clone(),
        };
        let session = Session::new(user, provider.clone());
        info!(
            session_id = %session.id,
            address = %address,
            network = %self.network.name,
            "Session opened"
        );
        if self.session.replace(session).is_some() {
            info!("Previous session replaced");
        }

        Ok(provider)
    }
}

#[async_trait]
impl AuthProvider for LocalKeyAuth {
    async fn init(&mut self) -> Result<Option<ConnectedProvider>, AuthError> {
        self.ensure_client_id()?;
        info!(chain_id = self.network.chain_id, rpc_url = %self.network.rpc_url, "Auth provider initialized");
        Ok(self.session.as_ref().map(|s| s.provider.clone()))
    }

    async fn connect(&mut self) -> Result<Option<ConnectedProvider>, AuthError> {
        self.ensure_client_id()?;
        self.events.emit(|| LifecycleEvent::Connecting);

        match self.open_session() {
            Ok(provider) => {
                self.events.emit(|| LifecycleEvent::Connected(provider.clone()));
                Ok(Some(provider))
            }
            Err(e) => {
                warn!(error = %e, error_code = e.error_code(), "Login failed");
                let message = e.to_string();
                self.events.emit(|| LifecycleEvent::Errored(message.clone()));
                Err(e)
            }
        }
    }

    async fn user_info(&self) -> Result<UserInfo, AuthError> {
        self.session
            .as_ref()
            .map(|s| s.user.clone())
            .ok_or(AuthError::NotConnected)
    }

    async fn logout(&mut self) -> Result<(), AuthError> {
        let session = self.session.take().ok_or(AuthError::NotConnected)?;
        let duration = chrono::Utc::now() - session.connected_at;
        info!(
            session_id = %session.id,
            duration_secs = duration.num_seconds(),
            "Session closed"
        );
        self.events.emit(|| LifecycleEvent::Disconnected);
        Ok(())
    }

    fn subscribe(&mut self) -> EventReceiver {
        self.events.subscribe()
    }
}
