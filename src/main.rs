// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use relational_wallet_console::auth::LocalKeyAuth;
use relational_wallet_console::config::{AppConfig, LogFormat};
use relational_wallet_console::shell::{App, Command, SessionState, HELP};
use relational_wallet_console::wallet::WalletFactory;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    info!(
        network = %config.network.name,
        chain_id = config.network.chain_id,
        namespace = %config.namespace(),
        token = %config.token_address,
        key_source = ?config.session_key,
        "Starting wallet console"
    );

    let factory = match WalletFactory::new(config.namespace(), &config.token_address) {
        Ok(factory) => factory,
        Err(e) => {
            error!(error = %e, "Invalid token configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(factory);
    app.init(LocalKeyAuth::new(&config)).await;

    let shutdown = CancellationToken::new();
    spawn_ctrl_c(shutdown.clone());

    if let Err(e) = run_console(&mut app, &shutdown).await {
        error!(error = %e, "Console I/O failed");
        return ExitCode::FAILURE;
    }

    info!("Wallet console stopped");
    ExitCode::SUCCESS
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

fn spawn_ctrl_c(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received");
            shutdown.cancel();
        }
    });
}

async fn run_console(
    app: &mut App<LocalKeyAuth>,
    shutdown: &CancellationToken,
) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
    prompt(&mut stdout, app.state()).await?;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            Some(event) = app.next_event() => {
                app.handle_event(event);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };
                if line.trim().is_empty() {
                    prompt(&mut stdout, app.state()).await?;
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(Command::Quit) => return Ok(()),
                    Ok(Command::Help) => stdout.write_all(format!("{HELP}\n").as_bytes()).await?,
                    Ok(command) => {
                        if app.begin(&command) {
                            let panel = app.status().render().to_string();
                            stdout.write_all(format!("{panel}\n").as_bytes()).await?;
                            stdout.flush().await?;
                        }
                        tokio::select! {
                            _ = app.dispatch(command) => {}
                            _ = shutdown.cancelled() => {
                                info!("Interrupted while a command was in flight");
                                return Ok(());
                            }
                        }
                        app.drain_events();
                        let panel = app.status().render().to_string();
                        stdout.write_all(format!("{panel}\n").as_bytes()).await?;
                    }
                    Err(e) => stdout.write_all(format!("{e}\n").as_bytes()).await?,
                }
                prompt(&mut stdout, app.state()).await?;
            }
        }
    }
}

async fn prompt(stdout: &mut tokio::io::Stdout, state: SessionState) -> std::io::Result<()> {
    let marker = match state {
        SessionState::LoggedOut => "logged out",
        SessionState::LoggedIn => "logged in",
    };
    stdout.write_all(format!("[{marker}] > ").as_bytes()).await?;
    stdout.flush().await
}
