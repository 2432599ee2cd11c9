use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct EnemyId;
}

/// Row-major position of a cell inside the grid.
pub type CellIndex = usize;

/// Fixed number of cells an enemy can see along each cardinal ray.
pub const SIGHT_RANGE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Wall,
    Plain,
    SlowGround,
    Refuge,
    Player,
    Enemy,
}

impl Terrain {
    /// Loader symbol mapping. Unknown symbols are plain ground.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'X' => Self::Wall,
            '-' => Self::SlowGround,
            'H' => Self::Refuge,
            'O' => Self::Player,
            '#' => Self::Enemy,
            _ => Self::Plain,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Wall => 'X',
            Self::Plain => ' ',
            Self::SlowGround => '-',
            Self::Refuge => 'H',
            Self::Player => 'O',
            Self::Enemy => '#',
        }
    }

    /// Wall is impassable and costs nothing; slow ground costs two.
    pub fn movement_cost(self) -> u32 {
        match self {
            Self::Wall => 0,
            Self::SlowGround => 2,
            Self::Plain | Self::Refuge | Self::Player | Self::Enemy => 1,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `w`/`a`/`s`/`d`, case-insensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::Up),
            's' => Some(Self::Down),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
}

impl ActorKind {
    pub fn marker(self) -> Terrain {
        match self {
            Self::Player => Terrain::Player,
            Self::Enemy => Terrain::Enemy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnInput {
    Move(Direction),
    Wait,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: u64,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: CellIndex, to: CellIndex },
    Stuck,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub enemy: EnemyId,
    pub cell: CellIndex,
    pub refuge: CellIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Wandered { from: CellIndex, to: CellIndex },
    Pursued { from: CellIndex, to: CellIndex },
    Stuck,
    /// No legal move this turn.
    Waited,
    /// Next hop held by another enemy.
    Blocked { cell: CellIndex },
    NoPath,
    Captured(Capture),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    /// `None` when the player waited.
    pub player: Option<StepOutcome>,
    pub enemies: Vec<(EnemyId, EnemyAction)>,
    pub capture: Option<Capture>,
    pub spotted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerMoved { from: CellIndex, to: CellIndex },
    PlayerStuck { cell: CellIndex },
    PlayerBlocked { direction: Direction },
    PlayerHidden { refuge: CellIndex },
    EnemySpotted { enemy: EnemyId },
    EnemyNoPath { enemy: EnemyId, from: CellIndex, target: CellIndex },
    Captured { enemy: EnemyId, from: CellIndex, refuge: CellIndex },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("flat layout of {cells} cells is not a perfect square")]
    NotSquare { cells: usize },
    #[error("layout has no player start")]
    MissingPlayer,
    #[error("layout has a second player start at cell {second} (first at {first})")]
    MultiplePlayers { first: CellIndex, second: CellIndex },
    #[error("layout has enemies but no refuge cell")]
    MissingRefuge,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no path from cell {from} to cell {to}")]
    NoPath { from: CellIndex, to: CellIndex },
    #[error("cell {cell} is outside the graph")]
    OutOfRange { cell: CellIndex },
}

/// Data-model invariant broken by a session, found by `Game::check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("expected exactly one player marker, found {count}")]
    PlayerMarkers { count: usize },
    #[error("player is at cell {cell} but the marker is elsewhere")]
    PlayerMisplaced { cell: CellIndex },
    #[error("{markers} enemy markers for {enemies} enemies")]
    EnemyMarkers { markers: usize, enemies: usize },
    #[error("enemy at cell {cell} is not shown there")]
    EnemyMisplaced { cell: CellIndex },
    #[error("actor standing on a wall at cell {cell}")]
    OnWall { cell: CellIndex },
}
