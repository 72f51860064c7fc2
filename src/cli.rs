use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "unscramble",
    version,
    about = "Unscramble the word using all the letters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Word list file, one word per line
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    /// Words per round
    #[arg(long, global = true)]
    pub max_words: Option<usize>,

    /// Points for each correct answer
    #[arg(long, global = true)]
    pub score_increase: Option<u32>,

    /// Seed for reproducible rounds
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play interactively in the terminal
    #[default]
    Play,
    /// Newline-delimited JSON commands on stdin, state on stdout
    Json,
    /// Show a sample mid-round screen and exit
    Preview,
}
