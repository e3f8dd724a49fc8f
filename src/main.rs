use std::io;
use std::process::ExitCode;

use clap::Parser;

use ludo_engine::console::Console;
use ludo_engine::core::{GameConfig, GameRng, LudoResult};
use ludo_engine::games::ludo::LudoGameBuilder;
use ludo_engine::rules::FirstOption;

/// Ludo for 2-4 players on one terminal.
#[derive(Parser, Debug)]
#[command(name = "ludo", version, about)]
struct Args {
    /// Number of players (2-4)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Tokens per player
    #[arg(short, long, default_value_t = 4)]
    tokens: usize,

    /// Cells on the track
    #[arg(long, default_value_t = 52)]
    track_size: usize,

    /// Rolls allowed per turn while rolling a six
    #[arg(short, long, default_value_t = 3)]
    chances: u8,

    /// Seed for the dice; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play every decision automatically and print only the result
    #[arg(long)]
    auto: bool,

    /// Stop an automatic game after this many turns
    #[arg(long, default_value_t = 100_000)]
    max_turns: usize,
}

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> LudoResult<()> {
    let config = GameConfig::new(args.players)
        .with_tokens(args.tokens)
        .with_track_size(args.track_size)
        .with_max_chances(args.chances);

    let mut dice = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("Dice seed: {}", dice.seed());

    let (mut game, start) = LudoGameBuilder::from_config(config).build_with_roll_off(&mut dice)?;

    if args.auto {
        match game.play_to_end(&mut dice, &mut FirstOption, args.max_turns)? {
            Some(winner) => println!("{winner} wins after {} rolls", game.history().len()),
            None => println!("No winner after {} turns", args.max_turns),
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.show_start(&start)?;

    while !game.is_over() {
        console.show_board(&game.snapshot())?;
        let report = game.play_turn(&mut dice, &mut console)?;
        console.show_turn(&report)?;
    }

    console.show_board(&game.snapshot())?;
    if let Some(winner) = game.winner() {
        console.say(&format!("{winner} wins!"))?;
    }
    Ok(())
}
