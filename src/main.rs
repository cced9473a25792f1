use blackjack_game::prelude::*;
use clap::Parser;
use std::io;

/// Play blackjack against an automated dealer at the terminal.
///
/// Rules: S17, double-down on any first two cards, no split, no surrender.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of decks the shoe is built from
    #[arg(long, default_value_t = 4)]
    decks: usize,
    /// Bankroll the player sits down with
    #[arg(long, default_value_t = 100)]
    bankroll: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::new()
        .num_decks(args.decks)
        .starting_bankroll(args.bankroll)
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut table = BlackjackTable::new(config, stdin.lock(), stdout.lock());
    if let Err(e) = table.run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
