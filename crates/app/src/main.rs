use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app::app_loop::{AppMode, AppState};
use app::seed::{generate_runtime_seed, resolve_seed};
use app::ui_text::render_screen;
use clap::Parser;
use hideout_core::{Layout, LayoutPack};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for enemy movement and layout picks; generated when absent
    #[arg(long)]
    seed: Option<u64>,
    /// Layout text file to play instead of a built-in layout
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Write the session's input journal here on exit
    #[arg(long)]
    journal: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let seed = resolve_seed(args.seed, generate_runtime_seed());
    let mut pack = LayoutPack::default();
    let start = match &args.layout {
        Some(path) => {
            let layout = read_layout(path)?;
            let name = layout.name.clone();
            pack.insert(layout);
            Some(name)
        }
        None => None,
    };
    let mut app = AppState::new(seed.value(), pack, start.as_deref())?;
    info!(?seed, layout = app.layout_name(), "session started");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_screen(&app))?;
    stdout.flush()?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        for key in line.chars() {
            app.handle_key(key)?;
            if app.mode == AppMode::Quit {
                break;
            }
        }
        write!(stdout, "{}", render_screen(&app))?;
        stdout.flush()?;
        if app.mode == AppMode::Quit {
            break;
        }
    }

    if let Some(path) = &args.journal {
        let text = app.game.journal().to_json().context("Failed to encode journal")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
    }
    Ok(())
}

fn read_layout(path: &Path) -> Result<Layout> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    let name = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("custom");
    Layout::parse(name, &text)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}
