// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tf-agentd — Executor Agent daemon.
//!
//! Background process that registers with the Farm API, polls for test and
//! benchmark jobs, and drives them to completion (§4.12).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod system_info;

use clap::Parser;
use config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tf_adapters::{Git2RepoSync, SevenZipArchiver};
use tf_client::FarmClient;
use tf_core::MagicVars;
use tf_engine::{AgentLoop, JobContext};
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Parser)]
#[command(name = "tf-agentd", version, about = "Executor Agent daemon")]
struct Cli {
    /// Path to config.json
    #[arg(long = "config", default_value = "config.json")]
    config: PathBuf,

    /// Root directory under which `repos/`, `work/`, and `temp/` live.
    /// Agents sharing a root must not run concurrently (§5 Shared resources).
    #[arg(long = "workspace-root", default_value = ".")]
    workspace_root: PathBuf,

    /// Route logs to stdout instead of the rotating log file.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let _log_guard = setup_logging(&config, cli.debug)?;
    info!(grid = %config.grid_name, base_url = %config.base_url, "starting executor agent");

    let vars = MagicVars::new(
        cli.workspace_root.join("repos"),
        cli.workspace_root.join("work"),
        cli.workspace_root.join("temp"),
    );

    let info = system_info::collect();

    let farm = Arc::new(FarmClient::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs)));
    let ctx = JobContext {
        farm: farm.clone(),
        repo_sync: Arc::new(Git2RepoSync::new()),
        archiver: Arc::new(SevenZipArchiver::new()),
        vars,
        hostname: info.hostname.clone(),
        pythonpath_var: "PYTHONPATH".to_string(),
    };

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let stop = tf_engine::StopSignal::new();
    let signal_stop = stop.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("received SIGINT, shutting down"),
        }
        signal_stop.signal();
    });

    let agent_loop = AgentLoop::new(ctx, farm, config.grid_name.clone(), stop);
    agent_loop.run(&info).await?;

    info!("executor agent stopped");
    Ok(())
}

fn setup_logging(config: &Config, debug: bool) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, std::io::Error> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "tf-agentd.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(non_blocking)).init();

    Ok(Some(guard))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
