// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Console view state: the status panel and the transfer form.

/// Shown while an operation is in flight.
pub const BUSY_INDICATOR: &str = "...";

/// Single status panel showing the last result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPanel {
    text: String,
    busy: bool,
}

impl StatusPanel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// What the panel displays right now.
    pub fn render(&self) -> &str {
        if self.busy {
            BUSY_INDICATOR
        } else {
            &self.text
        }
    }
}

/// Recipient and amount entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    pub to: String,
    pub amount: String,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            to: String::new(),
            amount: "0".to_string(),
        }
    }
}
