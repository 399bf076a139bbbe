//! Crosslink cron entry point.
//!
//! One-shot Mautic -> HubSpot contact-ID sync, built for a scheduler that
//! runs it every 15-20 minutes. Reads all credentials from the environment,
//! runs one incremental reconciliation pass, posts a Slack summary, and
//! exits 0 on full success or 1 on any configuration, pre-flight, source,
//! or write failure.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crosslink_core::pipeline::{run_sync, SyncOptions};
use crosslink_core::Notifier;
use crosslink_types::error::SyncError;
use crosslink_types::models::{RunReport, SyncConfig, ENV_SLACK_WEBHOOK_URL};

#[derive(Parser, Debug)]
#[command(
    name = "crosslink-cron",
    about = "One-shot Mautic -> HubSpot contact-ID sync",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Only sync contacts modified within the last N minutes (0 scans everything)
    #[arg(long, env = "CROSSLINK_SINCE_MINUTES", default_value = "20")]
    since_minutes: u32,

    /// Scan the whole contact base, ignoring the modification window
    #[arg(long)]
    full_scan: bool,

    /// Write without probing HubSpot for already-set values
    #[arg(long)]
    no_skip_existing: bool,

    /// Log filter (tracing env-filter syntax)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

/// Map a run result to (exit code, optional Slack message).
///
/// Write failures and config/pre-flight errors alert; source-read failures
/// exit 1 silently; a clean run with nothing to do exits 0 silently.
fn outcome(result: &std::result::Result<RunReport, SyncError>) -> (i32, Option<String>) {
    match result {
        Ok(report) if report.is_failure() => (
            1,
            Some(format!(
                ":x: crosslink-sync failed: {} synced, {} failed",
                report.success, report.failed
            )),
        ),
        Ok(report) if report.success > 0 => (
            0,
            Some(format!(
                ":white_check_mark: crosslink-sync: {} contacts synced successfully",
                report.success
            )),
        ),
        Ok(_) => (0, None),
        Err(SyncError::Mautic(_)) => (1, None),
        Err(e) => (1, Some(format!(":x: crosslink-sync failed: {e}"))),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    info!("=== Mautic ID -> HubSpot Sync ===");

    // Built before the config so configuration failures can still alert.
    let notifier = Notifier::new(
        std::env::var(ENV_SLACK_WEBHOOK_URL).ok().filter(|v| !v.trim().is_empty()),
    );

    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            notifier.send(&format!(":x: crosslink-sync failed: {e}")).await;
            std::process::exit(1);
        }
    };

    let options = SyncOptions {
        since_minutes: if cli.full_scan { 0 } else { cli.since_minutes },
        skip_existing: !cli.no_skip_existing,
    };

    let result = run_sync(&config, &options).await;
    if let Err(e) = &result {
        error!("{e}");
    }

    let (code, message) = outcome(&result);
    if let Some(message) = message {
        notifier.send(&message).await;
    }

    info!("=== Sync complete (exit code: {code}) ===");
    std::process::exit(code);
}
