use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::parsers::{parse_history, read_history_text_or_empty};
use crate::tui::{DEFAULT_REFRESH_INTERVAL, run_dashboard};
use crate::utils::{get_home_dir, resolve_history_path};
use crate::view::text::DEFAULT_HISTORY_LIMIT;
use crate::view::{build, render_history_table, render_panel};

#[derive(Parser)]
#[command(name = "dev-cleaner-status")]
#[command(version = "0.1.0")]
#[command(about = "Status panel for the dev dependency cleaner's run history", long_about = None)]
pub struct Cli {
    /// History file to read [default: $DEV_CLEANER_HISTORY or ~/Desktop/DevCleaner/history.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Home directory shortened to `~` in displayed paths
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status panel for the latest run
    Show {
        /// Print the view model as JSON instead of the panel
        #[arg(long)]
        json: bool,
    },
    /// List past runs with the lifetime total
    History {
        /// Maximum number of runs to list
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
        /// Also list each run's items
        #[arg(short, long)]
        verbose: bool,
    },
    /// Keep the panel open, re-reading the history on a fixed cadence
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs())]
        interval: u64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Show { json }) => show_panel(&cli, *json)?,
        Some(Commands::History { limit, verbose }) => show_history(&cli, *limit, *verbose)?,
        Some(Commands::Watch { interval }) => {
            let (history_path, home_dir) = resolve_inputs(&cli)?;
            run_dashboard(history_path, home_dir, Duration::from_secs(*interval))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Work out the history file and the home directory used for `~` shortening
fn resolve_inputs(cli: &Cli) -> Result<(PathBuf, String)> {
    let detected_home = get_home_dir()
        .inspect_err(|e| tracing::debug!(error = %e, "paths will not be shortened"))
        .ok();

    let history_path = resolve_history_path(cli.history_file.as_deref(), detected_home.as_deref())?;

    let home_dir = match &cli.home {
        Some(home) => home.clone(),
        None => detected_home.map(|p| p.to_string_lossy().into_owned()).unwrap_or_default(),
    };

    tracing::debug!(path = %history_path.display(), home = %home_dir, "resolved inputs");
    Ok((history_path, home_dir))
}

fn show_panel(cli: &Cli, json: bool) -> Result<()> {
    let (history_path, home_dir) = resolve_inputs(cli)?;
    let raw = read_history_text_or_empty(&history_path);
    let view = build(&raw, &home_dir);

    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view model")?;
        println!("{}", out);
    } else {
        print!("{}", render_panel(&view));
    }

    Ok(())
}

fn show_history(cli: &Cli, limit: usize, verbose: bool) -> Result<()> {
    let (history_path, home_dir) = resolve_inputs(cli)?;
    let raw = read_history_text_or_empty(&history_path);

    // Same degradation as the panel: an undecodable log reads as no history
    let history = parse_history(&raw).unwrap_or_else(|e| {
        tracing::warn!(path = %history_path.display(), error = %format!("{:#}", e), "history undecodable");
        Vec::new()
    });

    print!("{}", render_history_table(&history, &home_dir, limit, verbose));
    Ok(())
}
