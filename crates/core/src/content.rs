//! Built-in layouts and the text layout format.
//! A layout is rows of terrain symbols; `_` stands for plain ground and
//! whitespace inside a row is ignored.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::LoadError;

pub mod names {
    pub const EXAMPLE: &str = "example";
    pub const COURTYARD: &str = "courtyard";
    pub const RUINS: &str = "ruins";
    pub const MEADOW: &str = "meadow";
}

const EXAMPLE_ROWS: [&str; 8] = [
    "XXXXXXXX",
    "XO__-__X",
    "X_XX-X_X",
    "X_H__X#X",
    "X--X___X",
    "X_XX_X_X",
    "X___H__X",
    "XXXXXXXX",
];

const COURTYARD_ROWS: [&str; 12] = [
    "XXXXXXXXXXXX",
    "XO___X____HX",
    "X_XX_X_XX__X",
    "X_X-----X__X",
    "X_X-XXX-X#_X",
    "X___X_H____X",
    "XX__X_XX_X_X",
    "X#__-___-__X",
    "X_XXXX_XX__X",
    "X_H_____X#_X",
    "X____X_____X",
    "XXXXXXXXXXXX",
];

const RUINS_ROWS: [&str; 10] = [
    "XXXXXXXXXX",
    "XH___X___X",
    "X_X_---_#X",
    "X_X_XXX__X",
    "X___X_H__X",
    "XX_XX_XX_X",
    "X__O_____X",
    "X_--X_X#_X",
    "X_H_____HX",
    "XXXXXXXXXX",
];

const MEADOW_ROWS: [&str; 14] = [
    "XXXXXXXXXXXXXX",
    "X#----____---X",
    "X-XXX-__XX_--X",
    "X--H--__XH__-X",
    "X____XX____#_X",
    "X-X__-------_X",
    "X-X__-XXXX-__X",
    "X____-XHHX-__X",
    "X_XX_-X__X-X_X",
    "X____------__X",
    "X--X____#__X_X",
    "X--X_XX__XXX_X",
    "X___O___-----X",
    "XXXXXXXXXXXXXX",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub rows: Vec<String>,
}

impl Layout {
    pub fn new<S: AsRef<str>>(name: &str, rows: &[S]) -> Self {
        Self { name: name.to_string(), rows: rows.iter().map(|row| clean_row(row.as_ref())).collect() }
    }

    /// One row per non-empty line.
    pub fn parse(name: &str, text: &str) -> Result<Self, LoadError> {
        let rows: Vec<String> =
            text.lines().map(clean_row).filter(|row| !row.is_empty()).collect();
        if rows.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { name: name.to_string(), rows })
    }

    /// Row-major symbol sequence.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flat_map(|row| row.chars())
    }

    pub fn to_grid(&self) -> Result<Grid, LoadError> {
        Grid::from_rows(&self.rows)
    }
}

fn clean_row(row: &str) -> String {
    row.chars().filter(|symbol| !symbol.is_whitespace()).collect()
}

#[derive(Clone, Debug)]
pub struct LayoutPack {
    pub example: Layout,
    pub layouts: Vec<Layout>,
}

impl Default for LayoutPack {
    fn default() -> Self {
        Self {
            example: Layout::new(names::EXAMPLE, &EXAMPLE_ROWS),
            layouts: vec![
                Layout::new(names::COURTYARD, &COURTYARD_ROWS),
                Layout::new(names::RUINS, &RUINS_ROWS),
                Layout::new(names::MEADOW, &MEADOW_ROWS),
            ],
        }
    }
}

impl LayoutPack {
    /// Looks up a play layout or the example layout by name. Play layouts shadow
    /// the example, so an inserted layout is always the one returned.
    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts
            .iter()
            .find(|layout| layout.name == name)
            .or_else(|| (self.example.name == name).then_some(&self.example))
    }

    /// Adds a play layout, replacing one with the same name.
    pub fn insert(&mut self, layout: Layout) {
        match self.layouts.iter_mut().find(|existing| existing.name == layout.name) {
            Some(existing) => *existing = layout,
            None => self.layouts.push(layout),
        }
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Layout> {
        if self.layouts.is_empty() {
            return None;
        }
        let index = (rng.next_u64() % self.layouts.len() as u64) as usize;
        self.layouts.get(index)
    }

    /// Uniform choice among play layouts other than `current`; falls back to
    /// `current` when it is the only one.
    pub fn pick_other<R: Rng>(&self, current: &str, rng: &mut R) -> Option<&Layout> {
        let others: Vec<&Layout> =
            self.layouts.iter().filter(|layout| layout.name != current).collect();
        if others.is_empty() {
            return self.get(current);
        }
        let index = (rng.next_u64() % others.len() as u64) as usize;
        others.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::iter;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn inserted_layout_named_example_shadows_the_builtin_example() {
        let mut pack = LayoutPack::default();
        assert_eq!(pack.get(names::EXAMPLE), Some(&pack.example));

        let custom = Layout::parse(names::EXAMPLE, "XXX\nXOX\nXHX\n").expect("custom layout");
        pack.insert(custom.clone());
        let found = pack.get(names::EXAMPLE).expect("custom layout is found");
        assert_eq!(found, &custom);
        assert_eq!(found.rows, vec!["XXX", "XOX", "XHX"]);
    }

    #[test]
    fn builtin_layouts_are_square_with_one_player() {
        let pack = LayoutPack::default();
        for layout in iter::once(&pack.example).chain(pack.layouts.iter()) {
            let grid = Grid::load(layout.symbols()).expect("builtin layout loads");
            assert!(grid.player_start().is_some(), "{} has no player", layout.name);
            assert!(!grid.refuges().is_empty(), "{} has no refuge", layout.name);
            assert_eq!(grid.width(), layout.rows.len());
        }
    }

    #[test]
    fn parse_skips_whitespace_and_blank_lines() {
        let layout = Layout::parse("tiny", "X X X\n\nX O X\nX H X\n").expect("parse");
        assert_eq!(layout.rows, vec!["XXX", "XOX", "XHX"]);
        assert_eq!(Layout::parse("none", "  \n\n"), Err(LoadError::Empty));
    }

    #[test]
    fn pick_other_never_returns_current() {
        let pack = LayoutPack::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let next = pack.pick_other(names::RUINS, &mut rng).expect("layout");
            assert_ne!(next.name, names::RUINS);
        }
    }

    #[test]
    fn insert_replaces_layouts_by_name() {
        let mut pack = LayoutPack::default();
        let count = pack.layouts.len();
        pack.insert(Layout::new(names::RUINS, &["XOX"]));
        assert_eq!(pack.layouts.len(), count);
        assert_eq!(pack.get(names::RUINS).map(|layout| layout.rows.len()), Some(1));
        pack.insert(Layout::new("custom", &["XOX"]));
        assert_eq!(pack.layouts.len(), count + 1);
    }
}
