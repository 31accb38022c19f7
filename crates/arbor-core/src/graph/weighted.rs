//! Directed weighted graph storage
//!
//! Vertices are interned into dense indices in insertion order; each vertex
//! owns a list of outgoing `(destination, weight)` pairs with at most one
//! entry per destination. Iteration over vertices and over a vertex's edges
//! follows insertion order, which makes traversal output reproducible.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

use crate::error::{ArborError, Result};

use super::algos;
use super::observer::GraphObserver;
use super::types::{SearchOutcome, ShortestPath, Weight};

/// Directed graph with non-negative integer edge weights
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<(usize, u32)>>,
    observers: Vec<Rc<dyn GraphObserver<V>>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl<V: Debug> Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertices", &self.vertices)
            .field("adjacency", &self.adjacency)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for all subsequent algorithm runs.
    ///
    /// Returns `false` if this exact observer (by pointer identity) is
    /// already registered.
    pub fn add_observer(&mut self, observer: Rc<dyn GraphObserver<V>>) -> bool {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Add a vertex with no outgoing edges
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.index.contains_key(&vertex) {
            return Err(ArborError::duplicate_vertex(&vertex));
        }
        let id = self.vertices.len();
        trace!(vertex = ?vertex, id, "add_vertex");
        self.index.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Set the weight of the directed edge `from -> to`, replacing any existing weight.
    ///
    /// Both endpoints must already be vertices and the weight must lie in
    /// `0..=u32::MAX`.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) -> Result<()> {
        let (Some(&src), Some(&dst)) = (self.index.get(from), self.index.get(to)) else {
            return Err(ArborError::invalid_edge(from, to, "endpoint not in graph"));
        };
        if weight < 0 {
            return Err(ArborError::invalid_edge(
                from,
                to,
                format!("negative weight {}", weight),
            ));
        }
        let weight = u32::try_from(weight).map_err(|_| {
            ArborError::invalid_edge(
                from,
                to,
                format!("weight {} exceeds {}", weight, u32::MAX),
            )
        })?;

        let edges = &mut self.adjacency[src];
        match edges.iter_mut().find(|(d, _)| *d == dst) {
            Some(edge) => edge.1 = weight,
            None => edges.push((dst, weight)),
        }
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when there is no such edge.
    ///
    /// Fails if either endpoint is not a vertex.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<u32>> {
        let src = self.require(from)?;
        let dst = self.require(to)?;
        Ok(self.adjacency[src]
            .iter()
            .find(|(d, _)| *d == dst)
            .map(|&(_, w)| w))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Outgoing `(destination, weight)` pairs of `vertex` in edge insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<(&V, u32)>> {
        let id = self.require(vertex)?;
        Ok(self.adjacency[id]
            .iter()
            .map(|&(d, w)| (&self.vertices[d], w))
            .collect())
    }

    /// Breadth-first search from `start`, stopping once `end` is visited
    pub fn do_bfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        algos::bfs_search(self, start, end)
    }

    /// Depth-first search from `start`, stopping once `end` is visited
    pub fn do_dfs(&self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        algos::dfs_search(self, start, end)
    }

    /// Single-source shortest paths from `start`, reporting the path to `end`
    pub fn do_dijkstra(&self, start: &V, end: &V) -> Result<ShortestPath<V>> {
        algos::dijkstra_shortest_path(self, start, end)
    }

    pub(crate) fn require(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| ArborError::invalid_vertex(vertex))
    }

    pub(crate) fn vertex_at(&self, id: usize) -> &V {
        &self.vertices[id]
    }

    pub(crate) fn edges_from(&self, id: usize) -> &[(usize, u32)] {
        &self.adjacency[id]
    }

    /// Call `f` on every observer in registration order
    pub(crate) fn notify(&self, f: impl Fn(&dyn GraphObserver<V>)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}
