// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Console Shell
//!
//! [`App`] owns the auth provider, the active wallet adapter, the transfer
//! form and the status panel. Each command maps to one action:
//!
//! - actions that need an auth provider or a wallet log a diagnostic and do
//!   nothing when it is missing
//! - `balance-usdc`, `send-eth` and `send-usdc` mark the panel busy while in
//!   flight and show [`TRANSACTION_FAILED`] on any error
//! - other wallet failures are logged and leave the panel untouched
//!
//! The shell is logged in exactly when a wallet adapter is present. The
//! adapter is replaced on every connect and dropped on logout.

pub mod command;
pub mod status;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::auth::{AuthProvider, EventReceiver, LifecycleEvent};
use crate::blockchain::{ConnectedProvider, TransactionResult, USDC_GOERLI};
use crate::error::WalletError;
use crate::wallet::{WalletFactory, WalletProvider};

pub use command::{Command, CommandError, HELP};
pub use status::{StatusPanel, TransferForm};

/// Panel text for any failed transaction-shaped action.
pub const TRANSACTION_FAILED: &str = "Transaction failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

pub struct App<A: AuthProvider> {
    auth: Option<A>,
    events: Option<EventReceiver>,
    factory: WalletFactory,
    wallet: Option<Arc<dyn WalletProvider>>,
    status: StatusPanel,
    form: TransferForm,
}

impl<A: AuthProvider> App<A> {
    pub fn new(factory: WalletFactory) -> Self {
        Self {
            auth: None,
            events: None,
            factory,
            wallet: None,
            status: StatusPanel::default(),
            form: TransferForm::default(),
        }
    }

    /// Attach the auth provider, restoring its session if it has one.
    pub async fn init(&mut self, mut auth: A) {
        match auth.init().await {
            Ok(Some(provider)) => self.set_wallet(provider),
            Ok(None) => {}
            Err(e) => error!(error = %e, error_code = e.error_code(), "Auth provider init failed"),
        }
        self.events = Some(auth.subscribe());
        self.auth = Some(auth);
    }

    pub fn state(&self) -> SessionState {
        if self.wallet.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn status(&self) -> &StatusPanel {
        &self.status
    }

    pub fn form(&self) -> &TransferForm {
        &self.form
    }

    pub fn wallet(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.wallet.as_ref()
    }

    /// Wait for the next lifecycle event. Pending forever without a provider.
    pub async fn next_event(&mut self) -> Option<LifecycleEvent> {
        match self.events.as_mut() {
            Some(events) => events.recv().await,
            None => std::future::pending().await,
        }
    }

    /// Handle every lifecycle event already queued.
    pub fn drain_events(&mut self) {
        while let Some(event) = self.events.as_mut().and_then(|rx| rx.try_recv().ok()) {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Connecting => info!("Connecting..."),
            LifecycleEvent::Connected(provider) => {
                info!("Successfully logged in");
                self.set_wallet(provider);
            }
            LifecycleEvent::Disconnected => info!("Disconnected"),
            LifecycleEvent::Errored(message) => {
                warn!(error = %message, "Login errored or was cancelled")
            }
        }
    }

    fn set_wallet(&mut self, provider: ConnectedProvider) {
        match self.factory.build(provider) {
            Ok(wallet) => {
                if self.wallet.replace(wallet).is_some() {
                    info!("Replaced active wallet adapter");
                }
            }
            Err(e) => error!(
                error = %e,
                namespace = %self.factory.namespace(),
                "Cannot build wallet adapter"
            ),
        }
    }

    fn active_auth(&mut self, action: &'static str) -> Option<&mut A> {
        if self.auth.is_none() {
            warn!(action, "Auth provider not initialized yet");
        }
        self.auth.as_mut()
    }

    fn active_wallet(&self, action: &'static str) -> Option<Arc<dyn WalletProvider>> {
        if self.wallet.is_none() {
            warn!(action, "Wallet provider not initialized yet");
        }
        self.wallet.clone()
    }

    /// Mark the panel busy before a long-running command is awaited, so the
    /// caller can render the indicator. Returns whether the panel is busy.
    pub fn begin(&mut self, command: &Command) -> bool {
        if command.is_long_running() && self.wallet.is_some() {
            self.status.set_busy(true);
        }
        self.status.is_busy()
    }

    /// Run one console command. `Help` and `Quit` belong to the caller.
    pub async fn dispatch(&mut self, command: Command) {
        match command {
            Command::Login => self.login().await,
            Command::Logout => self.logout().await,
            Command::UserInfo => self.get_user_info().await,
            Command::ChainId => self.get_chain_id().await,
            Command::Accounts => self.get_accounts().await,
            Command::CreateAccount => self.create_account(),
            Command::PrivateKey => self.get_private_key().await,
            Command::Balance => self.get_balance().await,
            Command::SendEth => self.send_eth().await,
            Command::BalanceUsdc => self.get_balance_usdc().await,
            Command::SendUsdc => self.send_usdc().await,
            Command::SetTo(to) => self.form.to = to,
            Command::SetAmount(amount) => self.form.amount = amount,
            Command::Help | Command::Quit => {}
        }
    }

    pub async fn login(&mut self) {
        let Some(auth) = self.active_auth("login") else {
            return;
        };
        match auth.connect().await {
            Ok(Some(provider)) => self.set_wallet(provider),
            Ok(None) => info!("Login dismissed"),
            Err(e) => error!(error = %e, error_code = e.error_code(), "Login failed"),
        }
    }

    pub async fn get_user_info(&mut self) {
        let Some(auth) = self.active_auth("user_info") else {
            return;
        };
        match auth.user_info().await {
            Ok(user) => {
                info!(user = ?user, "User info");
                self.status.set_text(user.email.unwrap_or_default());
            }
            Err(e) => error!(error = %e, "Failed to get user info"),
        }
    }

    pub async fn logout(&mut self) {
        let Some(auth) = self.active_auth("logout") else {
            return;
        };
        if let Err(e) = auth.logout().await {
            warn!(error = %e, "Auth provider logout failed");
        }
        self.wallet = None;
    }

    pub async fn get_chain_id(&mut self) {
        let Some(wallet) = self.active_wallet("chain_id") else {
            return;
        };
        match wallet.get_chain_id().await {
            Ok(chain_id) => self.status.set_text(chain_id.to_string()),
            Err(e) => log_failure("chain_id", &e),
        }
    }

    pub async fn get_accounts(&mut self) {
        let Some(wallet) = self.active_wallet("accounts") else {
            return;
        };
        match wallet.get_accounts().await {
            Ok(accounts) => self.status.set_text(accounts.join(",")),
            Err(e) => log_failure("accounts", &e),
        }
    }

    pub fn create_account(&mut self) {
        let Some(wallet) = self.active_wallet("create_account") else {
            return;
        };
        self.status.set_text(wallet.create_account());
    }

    pub async fn get_private_key(&mut self) {
        let Some(wallet) = self.active_wallet("private_key") else {
            return;
        };
        match wallet.get_private_key().await {
            Ok(key) => self.status.set_text(key),
            Err(e) => {
                log_failure("private_key", &e);
                self.status.set_text(e.to_string());
            }
        }
    }

    pub async fn get_balance(&mut self) {
        let Some(wallet) = self.active_wallet("balance") else {
            return;
        };
        match wallet.get_balance().await {
            Ok(balance) => self
                .status
                .set_text(format!("You have {} ETH", balance.unwrap_or_default())),
            Err(e) => log_failure("balance", &e),
        }
    }

    pub async fn get_balance_usdc(&mut self) {
        let Some(wallet) = self.active_wallet("balance_usdc") else {
            return;
        };
        self.status.set_busy(true);
        let result = wallet.get_balance_usdc().await;
        self.status.set_busy(false);

        match result {
            Ok(balance) => self
                .status
                .set_text(format!("You have {} {}", balance.unwrap_or_default(), USDC_GOERLI.symbol)),
            Err(e) => {
                log_failure("balance_usdc", &e);
                self.status.set_text(TRANSACTION_FAILED);
            }
        }
    }

    pub async fn send_eth(&mut self) {
        let Some(wallet) = self.active_wallet("send_eth") else {
            return;
        };
        self.status.set_busy(true);
        let result = wallet.send_eth(&self.form.to, &self.form.amount).await;
        self.finish_transaction("send_eth", result);
    }

    pub async fn send_usdc(&mut self) {
        let Some(wallet) = self.active_wallet("send_usdc") else {
            return;
        };
        self.status.set_busy(true);
        let result = wallet.send_usdc(&self.form.to, &self.form.amount).await;
        self.finish_transaction("send_usdc", result);
    }

    fn finish_transaction(&mut self, action: &'static str, result: Result<TransactionResult, WalletError>) {
        self.status.set_busy(false);
        match result {
            Ok(tx) if tx.success => {
                info!(action, tx_hash = %tx.transaction_hash, "Transaction confirmed");
                self.status
                    .set_text(format!("Transaction sent successfully \n {}", tx.transaction_hash));
            }
            Ok(tx) => warn!(action, tx_hash = %tx.transaction_hash, "Transaction reverted"),
            Err(e) => {
                log_failure(action, &e);
                self.status.set_text(TRANSACTION_FAILED);
            }
        }
    }
}

fn log_failure(action: &'static str, e: &WalletError) {
    error!(action, error = %e, error_code = e.error_code(), "Wallet operation failed");
}
