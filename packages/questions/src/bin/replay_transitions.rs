//! CLI for replaying recorded question transitions
//!
//! Reads JSON-lines question events, runs them through the notification
//! lifecycle against an in-memory store and prints a JSON report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use questions_core::config::Config;
use questions_core::domains::questions::replay::{replay, ReplayedTransition};
use questions_core::domains::questions::{Notification, QuestionLifecycle};
use questions_core::kernel::{InMemoryNotificationStore, NotificationStore};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "replay_transitions")]
#[command(about = "Replay question transitions and report resulting notifications")]
struct Cli {
    /// JSON-lines file of question events ("-" for stdin)
    input: PathBuf,

    /// Keep duplicate notifications instead of dropping them
    #[arg(long)]
    no_dedupe: bool,
}

#[derive(Serialize)]
struct Report {
    transitions: Vec<ReplayedTransition>,
    /// Remaining notifications per recipient, newest first
    notifications: BTreeMap<String, Vec<Notification>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let dedupe = config.dedupe_notifications && !cli.no_dedupe;
    tracing::info!(input = %cli.input.display(), dedupe, "Replaying question transitions");

    let store = Arc::new(InMemoryNotificationStore::new(dedupe));
    let mut lifecycle = QuestionLifecycle::new(store.clone());

    let transitions = if cli.input.as_os_str() == "-" {
        replay(io::stdin().lock(), &mut lifecycle).await?
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("Failed to open {}", cli.input.display()))?;
        replay(BufReader::new(file), &mut lifecycle).await?
    };

    let mut notifications = BTreeMap::new();
    for user in store.recipients() {
        notifications.insert(user.to_string(), store.notifications_for(user).await?);
    }

    let report = Report {
        transitions,
        notifications,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
