use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use connect_four_engine::config::GameConfig;
use connect_four_engine::game::GameOutcome;
use connect_four_engine::service::{GameBridge, GameService};

/// Play Connect Four in the terminal against the minimax AI.
///
/// This binary is an in-process transport adapter: it only talks to the
/// engine through the `GameBridge` contract, the same way a host-embedded
/// front end would.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the AI search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Disable the AI opponent (two humans at one terminal)
    #[arg(long)]
    no_ai: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.ai.search_depth = depth;
    }
    if cli.no_ai {
        config.ai.enabled = false;
    }
    config.validate()?;

    let service = GameService::new(&config)?;
    run(&service)
}

fn run(bridge: &dyn GameBridge) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = bridge.get_state();
        println!("{state}\n");

        if let Some(outcome) = state.outcome() {
            match outcome {
                GameOutcome::Winner(id) => {
                    let name = state
                        .player(id)
                        .map(|player| player.name().to_string())
                        .unwrap_or_else(|| format!("Player {id}"));
                    println!("{name} wins!");
                }
                GameOutcome::Draw => println!("The game is a draw."),
            }
            return Ok(());
        }

        if bridge.get_ai_id() == Some(state.current_player()) {
            let col = bridge.get_optimal_col(None)?;
            bridge.drop_disc(col)?;
            println!("AI drops in column {col}");
            continue;
        }

        print!("Column (0-{}), or q to quit: ", state.grid().width() - 1);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "q" || input == "quit" {
            return Ok(());
        }

        match input.parse::<usize>() {
            Ok(col) => {
                if let Err(err) = bridge.drop_disc(col) {
                    eprintln!("{err}");
                }
            }
            Err(_) => eprintln!("enter a column number, or q to quit"),
        }
    }
}
