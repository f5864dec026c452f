use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use twenty48::{init_logging_with_default, AiPlayer, GameEngine, Session};

fn main() -> anyhow::Result<()> {
    init_logging_with_default(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = Session::new(Box::new(AiPlayer::new()), GameEngine::new());
    let summary = session.run(&mut rng)?;
    let engine = session.engine();

    let result = json!({
        "status": format!("{:?}", summary.last_status),
        "highest_tile": summary.highest_tile,
        "moves": summary.moves,
        "progress": engine.progress(),
        "grid": engine.grid().rows(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
