//! Static adjacency derived from the grid once per loaded layout.
//! Edges live in one contiguous store; each cell owns an index span into it.

use std::fmt::Write as _;
use std::ops::Range;

use crate::grid::Grid;
use crate::types::{CellIndex, Direction, Terrain};

/// Directed edge carrying the destination's cost and terrain as they were at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: CellIndex,
    pub cost: u32,
    pub terrain: Terrain,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    spans: Vec<Range<usize>>,
}

impl Graph {
    pub fn build(grid: &Grid) -> Self {
        let mut edges = Vec::new();
        let mut spans = Vec::with_capacity(grid.len());
        for cell in grid.cells() {
            let start = edges.len();
            if !cell.terrain.is_wall() {
                for direction in Direction::ALL {
                    let Some(to) = grid.neighbor(cell.index, direction) else {
                        continue;
                    };
                    let Some(target) = grid.cell(to) else {
                        continue;
                    };
                    if target.terrain.is_wall() || edges[start..].iter().any(|e: &Edge| e.to == to)
                    {
                        continue;
                    }
                    edges.push(Edge { to, cost: target.cost, terrain: target.terrain });
                }
            }
            spans.push(start..edges.len());
        }
        Self { edges, spans }
    }

    /// Number of vertices, one per grid cell.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges_from(&self, from: CellIndex) -> &[Edge] {
        match self.spans.get(from) {
            Some(span) => &self.edges[span.clone()],
            None => &[],
        }
    }

    pub fn edge(&self, from: CellIndex, to: CellIndex) -> Option<&Edge> {
        self.edges_from(from).iter().find(|edge| edge.to == to)
    }

    pub fn has_edge(&self, from: CellIndex, to: CellIndex) -> bool {
        self.edge(from, to).is_some()
    }

    /// Edge cost, or `0` when there is no such edge.
    pub fn weight(&self, from: CellIndex, to: CellIndex) -> u32 {
        self.edge(from, to).map_or(0, |edge| edge.cost)
    }

    /// Adjacency listing, one `| u: v(w) ...` line per cell.
    pub fn describe(&self) -> String {
        let mut text = String::new();
        for from in 0..self.len() {
            let _ = write!(text, "| {from}:");
            for edge in self.edges_from(from) {
                let _ = write!(text, " {}({})", edge.to, edge.cost);
            }
            text.push('\n');
        }
        text
    }
}
