//! Entry point: parse CLI and dispatch to command handlers.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use nfl_stats::{
    cli::{App, Commands},
    commands::{
        dispatch_view, fetch::handle_fetch, load_store, resolve_data_path, resolve_season,
        shell::run_shell,
    },
};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, otherwise warnings plus whatever `-v` asks for.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nfl_stats={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_logging(app.verbose);

    let season = resolve_season(app.season)?;
    let data = resolve_data_path(app.data);

    match app.command {
        Commands::View(cmd) => {
            let store = load_store(data.as_deref(), season)?;
            dispatch_view(&store, cmd)?;
        }

        Commands::Fetch { top, refresh } => {
            handle_fetch(season, top, refresh)
                .await
                .with_context(|| format!("fetching the {} season from ESPN", season))?;
        }

        Commands::Shell => {
            let store = load_store(data.as_deref(), season)?;
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            if prompt {
                println!(
                    "NFL stats for {}: {} teams, {} players. Type `help` or `quit`.",
                    store.season(),
                    store.teams().len(),
                    store.players().len()
                );
            }
            run_shell(&store, stdin.lock(), prompt).context("reading shell input")?;
        }
    }

    Ok(())
}
