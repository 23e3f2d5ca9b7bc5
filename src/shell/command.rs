// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Console command parsing.

use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  login               log in through the auth provider
  logout              end the session
  user                show the logged-in user's email
  chain-id            show the connected chain id
  accounts            list managed accounts
  create-account      generate a new local address
  private-key         export the session private key
  balance             native balance of the first account
  send-eth            send <amount> ETH to <to>
  balance-usdc        USDC balance of the first account
  send-usdc           send <amount> USDC to <to>
  to <address>        set the recipient
  amount <value>      set the amount
  help                show this help
  quit                exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Logout,
    UserInfo,
    ChainId,
    Accounts,
    CreateAccount,
    PrivateKey,
    Balance,
    SendEth,
    BalanceUsdc,
    SendUsdc,
    SetTo(String),
    SetAmount(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs a value")]
    MissingArgument(&'static str),
}

impl Command {
    /// Commands that keep the panel busy until they finish.
    pub fn is_long_running(&self) -> bool {
        matches!(self, Command::BalanceUsdc | Command::SendEth | Command::SendUsdc)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "login" => Command::Login,
            "logout" => Command::Logout,
            "user" | "user-info" => Command::UserInfo,
            "chain-id" => Command::ChainId,
            "accounts" => Command::Accounts,
            "create-account" => Command::CreateAccount,
            "private-key" => Command::PrivateKey,
            "balance" => Command::Balance,
            "send-eth" => Command::SendEth,
            "balance-usdc" => Command::BalanceUsdc,
            "send-usdc" => Command::SendUsdc,
            "to" if rest.is_empty() => return Err(CommandError::MissingArgument("to")),
            "to" => Command::SetTo(rest.to_string()),
            "amount" if rest.is_empty() => return Err(CommandError::MissingArgument("amount")),
            "amount" => Command::SetAmount(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!("login".parse::<Command>(), Ok(Command::Login));
        assert_eq!("  Send-USDC ".parse::<Command>(), Ok(Command::SendUsdc));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parses_form_fields() {
        assert_eq!(
            "to 0x2222222222222222222222222222222222222222".parse::<Command>(),
            Ok(Command::SetTo("0x2222222222222222222222222222222222222222".into()))
        );
        assert_eq!("amount  1.5".parse::<Command>(), Ok(Command::SetAmount("1.5".into())));
        assert_eq!("amount".parse::<Command>(), Err(CommandError::MissingArgument("amount")));
    }

    #[test]
    fn token_and_transfer_commands_are_long_running() {
        assert!(Command::SendEth.is_long_running());
        assert!(Command::SendUsdc.is_long_running());
        assert!(Command::BalanceUsdc.is_long_running());
        assert!(!Command::Balance.is_long_running());
        assert!(!Command::SetAmount("1".into()).is_long_running());
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "transfer".parse::<Command>(),
            Err(CommandError::Unknown("transfer".into()))
        );
    }
}
