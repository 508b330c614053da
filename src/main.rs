// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portal command-line client.
//!
//! Keeps its session in a JSON file so consecutive invocations stay logged in.

use anyhow::Context;
use clap::{Parser, Subcommand};
use portal_client::{
    config::Config,
    constants::{CalculationStatus, FileType},
    navigation::{LogNavigator, LoginRedirector},
    services::{CalculationQuery, FileQuery, UploadFile},
    session::{FileStore, Session},
    PortalClient,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "portal-client", about = "Energy calculation portal client")]
struct Args {
    /// Backend origin (overrides PORTAL_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Session file (overrides PORTAL_SESSION_FILE).
    #[arg(long)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session.
    Login {
        username: String,
        /// Password (read from PORTAL_PASSWORD if omitted).
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove the stored session.
    Logout,
    /// Show the current user.
    Whoami,
    /// Manage uploaded files.
    #[command(subcommand)]
    Files(FilesCommand),
    /// Inspect and control calculations.
    #[command(subcommand)]
    Calculations(CalculationsCommand),
    /// List saved configurations.
    Configurations,
}

#[derive(Subcommand, Debug)]
enum FilesCommand {
    /// List uploaded files.
    List {
        #[arg(long)]
        file_type: Option<String>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Upload one or more spreadsheets.
    Upload {
        paths: Vec<PathBuf>,
        /// csv, xls or xlsx (detected from the first file if omitted).
        #[arg(long)]
        file_type: Option<FileType>,
    },
    /// Download a file's contents.
    Download {
        id: String,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Delete an uploaded file.
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum CalculationsCommand {
    /// List calculations (metadata only).
    List {
        /// pending, running, completed, failed or cancelled.
        #[arg(long)]
        status: Option<CalculationStatus>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Wait until a calculation finishes.
    Wait {
        id: String,
        /// Seconds between polls.
        #[arg(long, default_value_t = 3)]
        interval: u64,
        /// Give up after this many seconds.
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },
    /// Cancel a pending or running calculation.
    Cancel {
        id: String,
    },
    /// Export results to a file.
    Export {
        id: String,
        #[arg(long, default_value = "csv")]
        format: String,
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = args.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(path) = args.session_file {
        config.session_file = path;
    }
    tracing::debug!(api = %config.api_v1_url(), session_file = %config.session_file.display(), "Configuration loaded");

    let session = Session::new(Arc::new(FileStore::new(config.session_file.clone())));
    let client = PortalClient::new(config.clone(), session)?;

    let redirector = LoginRedirector::new(LogNavigator, config.login_path.clone());
    let redirects = redirector.spawn(client.gateway.subscribe());

    let result = run(&client, args.command).await;

    // Dropping the client closes the event channel and ends the redirector.
    drop(client);
    redirects.await.ok();

    result
}

async fn run(client: &PortalClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => {
            let login = client.auth.login(&username, &password).await?;
            match login.user {
                Some(user) => println!("Logged in as {} ({})", user.username, user.role.as_str()),
                None => println!("Logged in as {}", username),
            }
        }
        Command::Logout => {
            client.auth.logout()?;
            println!("Logged out");
        }
        Command::Whoami => {
            if !client.auth.is_authenticated() {
                anyhow::bail!("Not logged in");
            }
            let user = client.auth.get_profile().await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Files(FilesCommand::List {
            file_type,
            skip,
            limit,
        }) => {
            let list = client
                .files
                .get_files(&FileQuery {
                    file_type,
                    skip,
                    limit,
                })
                .await?;
            println!("{} file(s)", list.total);
            for file in list.files {
                println!(
                    "{}  {:>10}  {}  {}",
                    file.id, file.file_size, file.created_at, file.original_filename
                );
            }
        }
        Command::Files(FilesCommand::Upload { paths, file_type }) => {
            let mut files = Vec::with_capacity(paths.len());
            for path in &paths {
                files.push(UploadFile::from_path(path).await?);
            }
            let file_type = match file_type {
                Some(t) => t,
                None => files
                    .first()
                    .and_then(|f| FileType::from_file_name(&f.file_name))
                    .context("Cannot detect file type, pass --file-type")?,
            };

            let mut failed = 0;
            for outcome in client.files.upload_files(&files, file_type).await {
                match outcome.result {
                    Ok(record) => println!("{}: uploaded as {}", outcome.file_name, record.id),
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {}", outcome.file_name, e);
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} upload(s) failed", failed, files.len());
            }
        }
        Command::Files(FilesCommand::Download { id, output }) => {
            let bytes = client.files.download_file(&id).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Saved {} bytes to {}", bytes.len(), output.display());
        }
        Command::Files(FilesCommand::Delete { id }) => {
            client.files.delete_file(&id).await?;
            println!("Deleted {}", id);
        }
        Command::Calculations(CalculationsCommand::List { status, limit }) => {
            let list = client
                .calculations
                .get_calculations(&CalculationQuery {
                    status,
                    limit,
                    lightweight: true,
                    ..Default::default()
                })
                .await?;
            println!("{} calculation(s)", list.total);
            for calc in list.calculations {
                println!("{}  {:<9}  {}  {}", calc.id, calc.status.as_str(), calc.created_at, calc.name);
            }
        }
        Command::Calculations(CalculationsCommand::Wait {
            id,
            interval,
            timeout,
        }) => {
            let calc = client
                .calculations
                .wait_for_completion(
                    &id,
                    Duration::from_secs(interval),
                    Duration::from_secs(timeout),
                )
                .await?;
            println!("{}: {}", calc.id, calc.status);
        }
        Command::Calculations(CalculationsCommand::Cancel { id }) => {
            let action = client.calculations.cancel_calculation(&id).await?;
            println!("{}", action.message);
        }
        Command::Calculations(CalculationsCommand::Export { id, format, output }) => {
            let bytes = client.calculations.export_results(&id, &format).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Saved {} bytes to {}", bytes.len(), output.display());
        }
        Command::Configurations => {
            let list = client.configurations.get_configurations().await?;
            for config in list.configurations {
                let marker = if config.is_default { "*" } else { " " };
                println!("{} {}  {}", marker, config.id, config.name);
            }
        }
    }
    Ok(())
}

/// Initialize logging to stderr. `LOG_FORMAT=json` selects structured JSON.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,portal_client=info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
