mod cli;
mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use dictionary::WordBank;
use game::GameEngine;
use models::GameSnapshot;
use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the game
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.apply_cli(&cli);
    tracing::info!("Configuration loaded");

    let command = cli.cmd.unwrap_or_default();
    if command == Command::Preview {
        let engine = session::preview::preview_engine()?;
        print!("{}", session::terminal::render(&engine.snapshot()));
        return Ok(());
    }

    let bank = match &config.game.words_path {
        Some(path) => WordBank::load(path).await?,
        None => {
            let bank = WordBank::builtin();
            tracing::info!("Using built-in word list ({} words)", bank.len());
            bank
        }
    };

    let rules = config.rules();
    let mut engine = match config.game.seed {
        Some(seed) => GameEngine::with_seed(bank, rules, seed)?,
        None => GameEngine::new(bank, rules)?,
    };

    engine.subscribe(|snapshot: &GameSnapshot| {
        tracing::debug!(
            score = snapshot.score,
            word_count = snapshot.word_count,
            is_guess_wrong = snapshot.is_guess_wrong,
            is_game_over = snapshot.is_game_over,
            "State published"
        );
    });

    let input = BufReader::new(stdin());
    match command {
        Command::Json => session::json::run(&mut engine, input, stdout()).await?,
        Command::Play | Command::Preview => {
            session::terminal::run(&mut engine, input, stdout()).await?
        }
    }

    Ok(())
}
