use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use reversi::{
    core::{GameConfig, GameState, Side},
    engine::{Engine, HeuristicType},
    shell::{handle_command, parse_command, Flow},
};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "othello> ";

/// Play Reversi against the machine on the command line
#[derive(Parser, Debug)]
#[command(name = "reversi", version)]
struct Args {
    /// Search depth, 1 to 5
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_LEVEL)]
    level: usize,

    /// Let the machine open the game
    #[arg(long)]
    machine_first: bool,

    /// Start from a position string instead of the opening
    #[arg(long)]
    position: Option<String>,

    /// Stop at the first error
    #[arg(long)]
    strict: bool,

    /// Heuristic the machine searches with (positional or random)
    #[arg(long, default_value = "positional")]
    heuristic: HeuristicType,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let first_side = if args.machine_first { Side::Machine } else { Side::Human };
    let config = GameConfig::new(args.level, first_side)?;

    let mut engine = Engine::new(&config);
    engine.options.strict_mode = args.strict;
    engine.options.heuristic = args.heuristic;

    match &args.position {
        Some(fen) => {
            let state = GameState::from_fen(fen).context("Invalid position")?;
            engine.set_game(state);
            if engine.next() == Some(Side::Machine) {
                engine.machine_move()?;
            }
        }
        None => {
            engine.new_game()?;
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", PROMPT);
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let input = line?;

        if let Some(cmd) = parse_command(&input) {
            let result = cmd.and_then(|cmd| handle_command(&cmd, &mut engine, &mut stdout));

            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    eprintln!("Error! {}", err);
                    if engine.options.strict_mode {
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }

        print!("{}", PROMPT);
        stdout.flush()?;
    }

    Ok(ExitCode::SUCCESS)
}
