//! Flat terrain store built once from a loaded layout.
//! Cells are addressed by stable row-major indices; neighbor lookups respect row
//! boundaries so a step off either side of a row does not wrap.

use crate::types::{CellIndex, Direction, LoadError, Terrain};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub index: CellIndex,
    pub terrain: Terrain,
    pub cost: u32,
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    player_start: Option<CellIndex>,
    enemy_starts: Vec<CellIndex>,
    refuges: Vec<CellIndex>,
}

impl Grid {
    /// Loads a flat row-major symbol sequence. The length must be a perfect square.
    pub fn load<I>(symbols: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(LoadError::Empty);
        }
        let side = symbols.len().isqrt();
        if side * side != symbols.len() {
            return Err(LoadError::NotSquare { cells: symbols.len() });
        }
        Self::scan(side, side, symbols)
    }

    /// Loads explicit rows; every row must have the same number of cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LoadError> {
        let Some(first) = rows.first() else {
            return Err(LoadError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(LoadError::Empty);
        }
        let mut symbols = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let found = text.as_ref().chars().count();
            if found != width {
                return Err(LoadError::Ragged { row, expected: width, found });
            }
            symbols.extend(text.as_ref().chars());
        }
        Self::scan(width, rows.len(), symbols)
    }

    fn scan(width: usize, height: usize, symbols: Vec<char>) -> Result<Self, LoadError> {
        let mut grid = Self {
            width,
            height,
            cells: Vec::new(),
            player_start: None,
            enemy_starts: Vec::new(),
            refuges: Vec::new(),
        };
        for symbol in symbols {
            let index = grid.cells.len();
            let terrain = Terrain::from_symbol(symbol);
            match terrain {
                Terrain::Player => {
                    if let Some(first) = grid.player_start {
                        return Err(LoadError::MultiplePlayers { first, second: index });
                    }
                    grid.player_start = Some(index);
                }
                Terrain::Enemy => grid.enemy_starts.push(index),
                Terrain::Refuge => grid.refuges.push(index),
                Terrain::Wall | Terrain::Plain | Terrain::SlowGround => {}
            }
            grid.cells.push(Cell { index, terrain, cost: terrain.movement_cost() });
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn terrain(&self, index: CellIndex) -> Option<Terrain> {
        self.cells.get(index).map(|cell| cell.terrain)
    }

    /// Movement cost fixed at load time; `0` for walls and out-of-range cells.
    pub fn cost(&self, index: CellIndex) -> u32 {
        self.cells.get(index).map_or(0, |cell| cell.cost)
    }

    pub(crate) fn set_terrain(&mut self, index: CellIndex, terrain: Terrain) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.terrain = terrain;
        }
    }

    /// `(row, column)` of an in-range cell.
    pub fn position(&self, index: CellIndex) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.width, index % self.width))
    }

    pub fn neighbor(&self, index: CellIndex, direction: Direction) -> Option<CellIndex> {
        let (row, column) = self.position(index)?;
        match direction {
            Direction::Up => row.checked_sub(1).map(|r| r * self.width + column),
            Direction::Down => (row + 1 < self.height).then(|| index + self.width),
            Direction::Left => column.checked_sub(1).map(|_| index - 1),
            Direction::Right => (column + 1 < self.width).then(|| index + 1),
        }
    }

    pub fn are_adjacent(&self, a: CellIndex, b: CellIndex) -> bool {
        Direction::ALL.iter().any(|&direction| self.neighbor(a, direction) == Some(b))
    }

    pub fn player_start(&self) -> Option<CellIndex> {
        self.player_start
    }

    pub fn enemy_starts(&self) -> &[CellIndex] {
        &self.enemy_starts
    }

    pub fn refuges(&self) -> &[CellIndex] {
        &self.refuges
    }

    /// Row-major snapshot of the displayed symbols.
    pub fn symbols(&self) -> Vec<char> {
        self.cells.iter().map(|cell| cell.terrain.symbol()).collect()
    }

    /// One line per row with symbols separated by a space.
    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                let symbols: Vec<String> =
                    row.iter().map(|cell| cell.terrain.symbol().to_string()).collect();
                symbols.join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_assigns_costs_and_records_landmarks() {
        let grid = Grid::load("XXXXO-H#_".chars()).expect("square layout");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cost(0), 0);
        assert_eq!(grid.cost(4), 1);
        assert_eq!(grid.cost(5), 2);
        assert_eq!(grid.cost(6), 1);
        assert_eq!(grid.cost(8), 1);
        assert_eq!(grid.terrain(8), Some(Terrain::Plain));
        assert_eq!(grid.player_start(), Some(4));
        assert_eq!(grid.enemy_starts(), &[7]);
        assert_eq!(grid.refuges(), &[6]);
    }

    #[test]
    fn load_rejects_empty_and_non_square_input() {
        assert_eq!(Grid::load("".chars()).unwrap_err(), LoadError::Empty);
        assert_eq!(Grid::load("XXXXX".chars()).unwrap_err(), LoadError::NotSquare { cells: 5 });
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(&["XXX", "X", "XXX"]).unwrap_err();
        assert_eq!(err, LoadError::Ragged { row: 1, expected: 3, found: 1 });
    }

    #[test]
    fn second_player_start_is_rejected() {
        let err = Grid::from_rows(&["O_O"]).unwrap_err();
        assert_eq!(err, LoadError::MultiplePlayers { first: 0, second: 2 });
    }

    #[test]
    fn neighbors_do_not_wrap_across_rows() {
        let grid = Grid::from_rows(&["___", "___"]).expect("rows");
        assert_eq!(grid.neighbor(2, Direction::Right), None);
        assert_eq!(grid.neighbor(3, Direction::Left), None);
        assert_eq!(grid.neighbor(0, Direction::Up), None);
        assert_eq!(grid.neighbor(4, Direction::Down), None);
        assert_eq!(grid.neighbor(1, Direction::Down), Some(4));
        assert_eq!(grid.neighbor(4, Direction::Up), Some(1));
        assert_eq!(grid.neighbor(9, Direction::Up), None);
        assert!(grid.are_adjacent(0, 1));
        assert!(!grid.are_adjacent(2, 3));
    }

    #[test]
    fn out_of_range_queries_are_absent() {
        let grid = Grid::from_rows(&["_-"]).expect("rows");
        assert_eq!(grid.terrain(7), None);
        assert_eq!(grid.cost(7), 0);
        assert_eq!(grid.position(7), None);
    }

    #[test]
    fn render_rows_shows_plain_ground_as_blank() {
        let grid = Grid::from_rows(&["X_H", "O-#"]).expect("rows");
        assert_eq!(grid.render_rows(), vec!["X   H".to_string(), "O - #".to_string()]);
        assert_eq!(grid.symbols(), vec!['X', ' ', 'H', 'O', '-', '#']);
    }
}
