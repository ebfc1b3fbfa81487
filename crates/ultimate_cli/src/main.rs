//! Ultimate Tic-Tac-Toe - command-line front end
//!
//! Creates, plays and inspects games kept as JSON files in a data directory.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_store::{GameDispatcher, GameFileStore, StoreConfig};
use ultimate_tictactoe::{Move, Player, Position};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = StoreConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config = StoreConfig::new(dir);
    }
    debug!(data_dir = %config.data_dir().display(), "Resolved data directory");

    let dispatcher = GameDispatcher::new(GameFileStore::new(&config));

    match cli.command {
        Command::New { id } => run_new(&dispatcher, &id),
        Command::Play {
            id,
            player,
            corner,
            cell,
        } => run_play(&dispatcher, &id, player.into(), corner, cell),
        Command::Show { id } => run_show(&dispatcher, &id),
        Command::History { id } => run_history(&dispatcher, &id),
        Command::List => run_list(&dispatcher),
        Command::Schema => run_schema(),
    }
}

/// Start a new game and print the empty board
#[instrument(skip(dispatcher))]
fn run_new(dispatcher: &GameDispatcher, id: &str) -> Result<()> {
    let game = dispatcher.start_new_game(id)?;
    info!(game_id = id, "Game created");
    println!("{}", game);
    Ok(())
}

/// Apply one move and print the resulting board
#[instrument(skip(dispatcher))]
fn run_play(
    dispatcher: &GameDispatcher,
    id: &str,
    player: Player,
    corner: Position,
    cell: Position,
) -> Result<()> {
    let game = dispatcher.take_turn(id, Move::new(player, corner, cell))?;
    println!("{}", game);
    Ok(())
}

/// Print a stored game
#[instrument(skip(dispatcher))]
fn run_show(dispatcher: &GameDispatcher, id: &str) -> Result<()> {
    let Some(game) = dispatcher.load_game(id)? else {
        bail!("No game '{}'", id);
    };
    println!("{}", game);
    Ok(())
}

/// Print the move list of a stored game
#[instrument(skip(dispatcher))]
fn run_history(dispatcher: &GameDispatcher, id: &str) -> Result<()> {
    let game = dispatcher
        .load_game(id)?
        .with_context(|| format!("No game '{}'", id))?;

    if game.history().is_empty() {
        println!("No moves yet");
    }
    for line in report::history_lines(&game) {
        println!("{}", line);
    }
    println!("Outcome: {}", game.outcome());
    Ok(())
}

/// Print the ids of all stored games
#[instrument(skip(dispatcher))]
fn run_list(dispatcher: &GameDispatcher) -> Result<()> {
    for id in dispatcher.list_games()? {
        println!("{}", id);
    }
    Ok(())
}

/// Print the move request JSON schema
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(Move);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
