// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication provider contract and session records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AuthError;
use super::events::EventReceiver;
use crate::blockchain::ConnectedProvider;

/// Profile of the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login method that produced the session (e.g. `local-key`)
    pub verifier: String,
    /// Identifier of the user within the verifier
    pub verifier_id: String,
}

/// A logged-in session.
pub struct Session {
    pub id: Uuid,
    pub user: UserInfo,
    pub provider: ConnectedProvider,
    pub connected_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: UserInfo, provider: ConnectedProvider) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            provider,
            connected_at: Utc::now(),
        }
    }
}

/// Authentication provider that hands out connected providers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Prepare the provider; returns the provider of a restored session.
    async fn init(&mut self) -> Result<Option<ConnectedProvider>, AuthError>;

    /// Run the login flow. `None` means the user backed out.
    async fn connect(&mut self) -> Result<Option<ConnectedProvider>, AuthError>;

    async fn user_info(&self) -> Result<UserInfo, AuthError>;

    async fn logout(&mut self) -> Result<(), AuthError>;

    /// Receive lifecycle notifications from now on.
    fn subscribe(&mut self) -> EventReceiver;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_serializes_camel_case() {
        let user = UserInfo {
            email: Some("alice@example.com".into()),
            name: None,
            verifier: "local-key".into(),
            verifier_id: "0xabc".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["verifierId"], "0xabc");
        assert!(json.get("name").is_none());
    }
}
