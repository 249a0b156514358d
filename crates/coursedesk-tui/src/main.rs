//! `coursedesk`: terminal front-end for a course catalogue API.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive data from
//! `coursedesk-core`'s [`CourseFeed`](coursedesk_core::CourseFeed).
//! One screen holds the create-course form and the course list, where
//! courses and their disciplines are edited inline.
//!
//! Logs are written to a file (default `/tmp/coursedesk.log`) to avoid
//! corrupting the terminal UI. A background data bridge task streams the
//! course list from the controller into the TUI action loop.
//!
//! Entry point: CLI argument parsing, config layering, tracing setup,
//! panic hooks, and app launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use coursedesk_config::Config;
use coursedesk_core::Controller;

use crate::app::App;

const DEFAULT_LOG_FILE: &str = "/tmp/coursedesk.log";

/// Manage courses and their disciplines from the terminal.
#[derive(Parser, Debug)]
#[command(name = "coursedesk", version, about)]
struct Cli {
    /// Course API base URL (e.g., http://localhost:3000)
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Config file to read instead of the platform default
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/coursedesk.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Config file and `COURSEDESK_*` environment, then command-line flags.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => coursedesk_config::load_config_from(path)?,
        None => coursedesk_config::load_config_or_default(),
    };

    if let Some(url) = &cli.url {
        config.api_url.clone_from(url);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = Some(timeout);
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
    Ok(config)
}

/// Set up file-based tracing. Nothing may log to stdout/stderr while the
/// TUI owns the terminal. The returned guard flushes the log on drop.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "coursedesk={log_level},coursedesk_core={log_level},coursedesk_api={log_level}"
        ))
    });

    let log_dir = log_file.parent().unwrap_or(Path::new("/tmp"));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("coursedesk.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                coursedesk_config::save_config_to(&config, path)?;
                path.clone()
            }
            None => coursedesk_config::save_config(&config)?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    // Reject a bad URL before the terminal is taken over.
    let server = config.to_server_config()?;

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file; the guard flushes logs on exit
    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let _log_guard = setup_tracing(&log_file, cli.verbose);

    info!(url = %server.url, "starting coursedesk");

    let controller = Controller::new(server)?;
    let mut app = App::new(controller);
    app.run().await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        coursedesk_config::save_config_to(
            &Config {
                api_url: "http://files.example:3000".into(),
                timeout: Some(10),
                log_file: None,
            },
            &path,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "coursedesk",
            "--config",
            path.to_str().unwrap(),
            "--url",
            "http://flags.example:4000",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.api_url, "http://flags.example:4000");
        assert_eq!(config.timeout, Some(10));
    }
}
