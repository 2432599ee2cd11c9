use anyhow::{Context, Result};
use hideout_core::{Direction, Game, GameConfig, Layout, LayoutPack, TurnInput, TurnReport};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Menu,
    Playing,
    ExampleMap,
    Controls,
    Quit,
}

/// Menu state machine wrapped around one play session.
pub struct AppState {
    pub mode: AppMode,
    pub pack: LayoutPack,
    pub game: Game,
    pub last_report: Option<TurnReport>,
    /// Banner shown above the map until the next turn.
    pub notice: Option<String>,
    rng: ChaCha8Rng,
}

impl AppState {
    /// Starts on `layout` when given, otherwise on a random play layout.
    pub fn new(seed: u64, pack: LayoutPack, layout: Option<&str>) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chosen = match layout {
            Some(name) => pack.get(name).with_context(|| format!("unknown layout `{name}`"))?,
            None => pack.pick(&mut rng).context("layout pack has no play layouts")?,
        };
        let game = start_game(seed, chosen)?;
        Ok(Self { mode: AppMode::Menu, pack, game, last_report: None, notice: None, rng })
    }

    pub fn layout_name(&self) -> &str {
        &self.game.journal().layout_name
    }

    /// Handles one key press; letters are case-insensitive.
    pub fn handle_key(&mut self, key: char) -> Result<()> {
        let key = key.to_ascii_lowercase();
        match self.mode {
            AppMode::Menu => match key {
                'w' => self.mode = AppMode::Playing,
                'a' => self.mode = AppMode::ExampleMap,
                's' => self.mode = AppMode::Controls,
                'd' => self.reset()?,
                'q' => self.mode = AppMode::Quit,
                _ => {}
            },
            AppMode::Playing => {
                if key == 'q' {
                    self.mode = AppMode::Menu;
                } else if let Some(input) = turn_input(key) {
                    self.play(input);
                }
            }
            AppMode::ExampleMap | AppMode::Controls => self.mode = AppMode::Menu,
            AppMode::Quit => {}
        }
        Ok(())
    }

    fn play(&mut self, input: TurnInput) {
        let report = self.game.play_turn(input);
        self.notice = report
            .capture
            .map(|_| "You were caught! Back to a hideout you go.".to_string());
        self.last_report = Some(report);
    }

    /// Replaces the session with a fresh one on a different play layout.
    fn reset(&mut self) -> Result<()> {
        let current = self.layout_name().to_string();
        let layout = self
            .pack
            .pick_other(&current, &mut self.rng)
            .context("layout pack has no play layouts")?;
        let seed = self.rng.next_u64();
        let game = start_game(seed, layout)?;
        info!(layout = %layout.name, seed, "session reset");
        self.game = game;
        self.last_report = None;
        self.notice = None;
        Ok(())
    }
}

fn start_game(seed: u64, layout: &Layout) -> Result<Game> {
    Game::new(GameConfig::with_seed(seed), layout)
        .with_context(|| format!("layout `{}` failed to load", layout.name))
}

fn turn_input(key: char) -> Option<TurnInput> {
    match key {
        ' ' | '.' => Some(TurnInput::Wait),
        _ => Direction::from_key(key).map(TurnInput::Move),
    }
}
