use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{InputJournal, Layout, LayoutPack, ReplayResult, replay_to_end};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Layout text file the journal was recorded on, when it is not built in
    #[arg(short, long)]
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal =
        InputJournal::from_json(&journal_data).context("Failed to deserialize journal JSON")?;

    let mut pack = LayoutPack::default();
    if let Some(path) = &args.layout {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        let layout = Layout::parse(&journal.layout_name, &text)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;
        pack.insert(layout);
    }

    let result: ReplayResult =
        replay_to_end(&pack, &journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Layout: {}", journal.layout_name);
    println!("Final Turn: {}", result.final_turn);
    println!("Captures: {}", result.captures);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
