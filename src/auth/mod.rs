// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! The console never signs in by itself: it asks an [`AuthProvider`] to
//! connect and receives a connected provider for the new session.
//!
//! ## Auth Flow
//!
//! 1. Console calls `init` (may restore a session) and `subscribe`
//! 2. User runs `login`; the provider emits `Connecting`
//! 3. On success the provider emits `Connected(provider)` and returns the
//!    same provider from `connect`
//! 4. `logout` ends the session and emits `Disconnected`

pub mod error;
pub mod events;
pub mod local;
pub mod session;

pub use error::AuthError;
pub use events::{EventReceiver, LifecycleEvent};
pub use local::LocalKeyAuth;
pub use session::{AuthProvider, Session, UserInfo};
