//! Single-source shortest-path queries over the static graph.
//! Edges into refuge cells are never relaxed, so refuges are neither transit
//! cells nor destinations for routed movement.

use crate::graph::Graph;
use crate::types::{CellIndex, RouteError, Terrain};

const UNREACHED: u32 = u32::MAX;

/// Dijkstra search with reusable scratch buffers, reset at the start of every query.
#[derive(Clone, Debug, Default)]
pub struct Router {
    dist: Vec<u32>,
    pred: Vec<Option<CellIndex>>,
    finalized: Vec<bool>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// First cell after `source` on a shortest path to `target`.
    ///
    /// Returns `source` itself when `source == target`.
    pub fn next_hop(
        &mut self,
        graph: &Graph,
        source: CellIndex,
        target: CellIndex,
    ) -> Result<CellIndex, RouteError> {
        self.search(graph, source, target)?;
        if source == target {
            return Ok(source);
        }
        let mut current = target;
        for _ in 0..graph.len() {
            let prev = self.pred[current].ok_or(RouteError::NoPath { from: source, to: target })?;
            if prev == source {
                return Ok(current);
            }
            current = prev;
        }
        Err(RouteError::NoPath { from: source, to: target })
    }

    /// Hops from `source` to `target`, excluding `source`.
    pub fn shortest_path(
        &mut self,
        graph: &Graph,
        source: CellIndex,
        target: CellIndex,
    ) -> Result<Vec<CellIndex>, RouteError> {
        self.search(graph, source, target)?;
        let mut path = Vec::new();
        let mut current = target;
        for _ in 0..=graph.len() {
            if current == source {
                path.reverse();
                return Ok(path);
            }
            path.push(current);
            current =
                self.pred[current].ok_or(RouteError::NoPath { from: source, to: target })?;
        }
        Err(RouteError::NoPath { from: source, to: target })
    }

    /// Total edge cost of a shortest path.
    pub fn distance(
        &mut self,
        graph: &Graph,
        source: CellIndex,
        target: CellIndex,
    ) -> Result<u32, RouteError> {
        self.search(graph, source, target)?;
        Ok(self.dist[target])
    }

    fn search(
        &mut self,
        graph: &Graph,
        source: CellIndex,
        target: CellIndex,
    ) -> Result<(), RouteError> {
        let count = graph.len();
        for cell in [source, target] {
            if cell >= count {
                return Err(RouteError::OutOfRange { cell });
            }
        }
        self.reset(count);
        self.dist[source] = 0;

        for _ in 0..count {
            let Some(current) = self.select_min() else {
                break;
            };
            if self.dist[current] == UNREACHED {
                break;
            }
            self.finalized[current] = true;
            if current == target {
                return Ok(());
            }
            let base = self.dist[current];
            for edge in graph.edges_from(current) {
                if self.finalized[edge.to] || edge.terrain == Terrain::Refuge {
                    continue;
                }
                let candidate = base.saturating_add(edge.cost);
                if candidate < self.dist[edge.to] {
                    self.dist[edge.to] = candidate;
                    self.pred[edge.to] = Some(current);
                }
            }
        }
        Err(RouteError::NoPath { from: source, to: target })
    }

    fn reset(&mut self, count: usize) {
        self.dist.clear();
        self.dist.resize(count, UNREACHED);
        self.pred.clear();
        self.pred.resize(count, None);
        self.finalized.clear();
        self.finalized.resize(count, false);
    }

    /// Left-to-right scan with a non-strict comparison: among equal tentative
    /// distances the highest index is selected.
    fn select_min(&self) -> Option<CellIndex> {
        let mut best = None;
        let mut min = UNREACHED;
        for (cell, &dist) in self.dist.iter().enumerate() {
            if !self.finalized[cell] && dist <= min {
                min = dist;
                best = Some(cell);
            }
        }
        best
    }
}
