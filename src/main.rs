//! Cubeword - CLI
//!
//! Generate, play, solve and audit 3×3×3 letter-cube puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubeword::{
    commands::{PlaySession, generate_puzzle, replay_game, run_play, run_survey, solve_seed},
    dictionary::{WordList, loader::load_from_file},
    generator::GeneratorConfig,
    output::{print_game_stats, print_generate_result, print_solve_result, print_survey_statistics},
    rules::{GameMode, Rules},
    snapshot::GameSnapshot,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cubeword",
    about = "Word puzzles on a 3x3x3 lattice of letter cubes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Rules file (JSON); missing fields keep their defaults
    #[arg(short = 'r', long, global = true)]
    rules: Option<PathBuf>,

    /// Generator settings file (JSON); missing fields keep their defaults
    #[arg(short = 'g', long, global = true)]
    generator: Option<PathBuf>,

    /// Log kernel decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print the puzzle for a seed
    Generate {
        /// Puzzle seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Print the puzzle snapshot as JSON instead of a layer view
        #[arg(long)]
        json: bool,
    },

    /// Play a puzzle in the terminal (default)
    Play {
        /// Puzzle seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Game mode: timed or unlimited
        #[arg(short, long, default_value = "unlimited")]
        mode: GameMode,
    },

    /// List every word findable on a puzzle
    Solve {
        /// Puzzle seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show the puzzle and the face path of each word
        #[arg(long)]
        paths: bool,
    },

    /// Re-verify a saved game and print its statistics
    Replay {
        /// Saved game (JSON written by `play`'s save command)
        file: PathBuf,
    },

    /// Generate many puzzles in parallel and report generator statistics
    Survey {
        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// First seed of the run
        #[arg(short, long, default_value = "0")]
        start: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cubeword=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(WordList::embedded()),
    }
}

fn load_json<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let words = load_words(cli.words.as_deref())?;
    let rules: Rules = load_json(cli.rules.as_deref())?;
    let config: GeneratorConfig = load_json(cli.generator.as_deref())?;
    info!(words = words.len(), "dictionary loaded");

    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        mode: GameMode::Unlimited,
    });

    match command {
        Commands::Generate { seed, json } => {
            run_generate_command(seed, json, &words, &rules, &config)
        }
        Commands::Play { seed, mode } => run_play_command(seed, mode, &words, rules, &config),
        Commands::Solve { seed, limit, paths } => {
            let result = solve_seed(seed, &words, &rules, &config, limit);
            print_solve_result(&result, rules.removal_threshold, paths);
            Ok(())
        }
        Commands::Replay { file } => run_replay_command(&file, &words, &rules),
        Commands::Survey { count, start } => {
            println!("Surveying {count} puzzles from seed {start}...");
            let stats = run_survey(&words, &config, start, count).map_err(anyhow::Error::msg)?;
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_generate_command(
    seed: u64,
    json: bool,
    words: &WordList,
    rules: &Rules,
    config: &GeneratorConfig,
) -> Result<()> {
    let result = generate_puzzle(seed, words, config);
    if json {
        println!("{}", serde_json::to_string_pretty(&result.generated.puzzle)?);
    } else {
        print_generate_result(&result, rules.removal_threshold);
    }
    Ok(())
}

fn run_play_command(
    seed: Option<u64>,
    mode: GameMode,
    words: &WordList,
    rules: Rules,
    config: &GeneratorConfig,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Puzzle #{seed} ({mode})");
    let generated = generate_puzzle(seed, words, config).generated;

    let mut session = PlaySession::new(
        generated.puzzle,
        words,
        rules,
        mode,
        config.max_word_length,
    );
    run_play(&mut session).context("Terminal I/O failed")
}

fn run_replay_command(path: &Path, words: &WordList, rules: &Rules) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let game = GameSnapshot::from_json(&text)
        .with_context(|| format!("Invalid saved game {}", path.display()))?;

    let stats = replay_game(&game, words, rules)
        .with_context(|| format!("Saved game {} does not replay", path.display()))?;
    print_game_stats(&stats, rules.removal_threshold);
    Ok(())
}
