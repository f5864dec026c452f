#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{init_logging, ui, AiPlayer, CliPlayer, GameEngine, Session};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal: w/a/s/d or the arrow keys, then Enter.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the built-in AI play.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Stop after this many moves in total")]
        max_moves: Option<u32>,
        #[arg(long, default_value_t = 1, help = "Number of games to play")]
        games: u32,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = seeded_rng(seed);
            let mut session = Session::new(Box::new(CliPlayer::new()), GameEngine::new());
            let summary = session.run(&mut rng)?;
            println!(
                "Thanks for playing: {} game(s), highest tile {}.",
                summary.games, summary.highest_tile
            );
        }
        Commands::Auto {
            seed,
            max_moves,
            games,
        } => {
            if games == 0 {
                return Err(anyhow::anyhow!("--games must be at least 1"));
            }
            let mut rng = seeded_rng(seed);
            let player = AiPlayer::with_restarts(games - 1);
            let mut session = Session::new(Box::new(player), GameEngine::new());
            if let Some(limit) = max_moves {
                session = session.with_max_moves(limit);
            }
            let summary = session.run(&mut rng)?;
            ui::print_game_view(session.engine());
            ui::print_end_banner(summary.last_status, summary.highest_tile);
            println!(
                "Games: {}, moves made: {}, final status: {:?}",
                summary.games, summary.moves, summary.last_status
            );
        }
    }
    Ok(())
}
