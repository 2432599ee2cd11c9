use std::io;

use anyhow::{Result, bail};
use clap::Parser;
use game_core::{Direction, Game, GameConfig, LayoutPack, TurnInput, replay_to_end};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// Built-in layout to fuzz; every play layout when absent
    #[arg(short, long)]
    layout: Option<String>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

const INPUTS: [TurnInput; 5] = [
    TurnInput::Move(Direction::Up),
    TurnInput::Move(Direction::Down),
    TurnInput::Move(Direction::Left),
    TurnInput::Move(Direction::Right),
    TurnInput::Wait,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let pack = LayoutPack::default();
    let names: Vec<String> = match &args.layout {
        Some(name) => vec![name.clone()],
        None => pack.layouts.iter().map(|layout| layout.name.clone()).collect(),
    };

    for name in names {
        let Some(layout) = pack.get(&name) else {
            bail!("unknown layout `{name}`");
        };
        println!("Fuzzing {name} on seed {} for {} turns...", args.seed, args.turns);
        let mut game = Game::new(GameConfig::with_seed(args.seed), layout)?;
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

        let mut captures = 0;
        for _ in 0..args.turns {
            let report = game.play_turn(choose(&mut rng, &INPUTS));
            if let Err(violation) = game.check_invariants() {
                bail!("Invariant failed on {name} at turn {}: {violation}", report.turn);
            }
            if let Some(capture) = report.capture {
                captures += 1;
                if !game.refuges().contains(&capture.refuge) {
                    bail!("Invariant failed on {name}: capture sent the player off the refuges");
                }
            }
        }

        let replay = replay_to_end(&pack, game.journal())?;
        if replay.final_snapshot_hash != game.snapshot_hash() {
            warn!(layout = %name, "replay diverged");
            bail!("Replay of {name} diverged from the live session");
        }
        info!(layout = %name, captures, turn = game.current_turn(), "fuzz run clean");
        println!("{name}: {captures} captures, final turn {}", game.current_turn());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
