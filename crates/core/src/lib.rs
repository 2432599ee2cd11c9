pub mod content;
pub mod game;
pub mod graph;
pub mod grid;
pub mod journal;
pub mod replay;
pub mod router;
pub mod state;
pub mod types;
pub mod visibility;

pub use content::{Layout, LayoutPack};
pub use game::Game;
pub use graph::{Edge, Graph};
pub use grid::{Cell, Grid};
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use router::Router;
pub use state::{Actor, GameState};
pub use types::*;
