//! Progress notifications for graph algorithms
//!
//! Observers are registered on a [`WeightedGraph`](super::WeightedGraph) and
//! called synchronously, in registration order, while an algorithm runs.
//! Every method has a no-op default so an observer only implements what it
//! cares about. Methods take `&self`; observers that record state use
//! interior mutability.

use std::cell::RefCell;
use std::fmt::Debug;

use serde::Serialize;
use tracing::debug;

use super::types::Cost;

/// Receiver of algorithm progress callbacks
pub trait GraphObserver<V> {
    fn bfs_begun(&self) {}

    fn dfs_begun(&self) {}

    fn dijkstra_begun(&self) {}

    /// A vertex was visited by BFS or DFS
    fn visit(&self, _vertex: &V) {}

    /// BFS or DFS reached its end vertex; no further vertices are processed
    fn search_over(&self) {}

    /// A vertex entered Dijkstra's finished set with its final cost
    fn dijkstra_vertex_finished(&self, _vertex: &V, _cost: Cost) {}

    /// Dijkstra completed; `path` runs from start to end
    fn dijkstra_over(&self, _path: &[V]) {}
}

/// One notification, as recorded by [`EventLog`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GraphEvent<V> {
    BfsBegun,
    DfsBegun,
    DijkstraBegun,
    Visit { vertex: V },
    SearchOver,
    VertexFinished { vertex: V, cost: Cost },
    DijkstraOver { path: Vec<V> },
}

impl<V> GraphEvent<V> {
    /// Short identifier used by line-oriented output
    pub fn kind(&self) -> &'static str {
        match self {
            GraphEvent::BfsBegun => "bfs_begun",
            GraphEvent::DfsBegun => "dfs_begun",
            GraphEvent::DijkstraBegun => "dijkstra_begun",
            GraphEvent::Visit { .. } => "visit",
            GraphEvent::SearchOver => "search_over",
            GraphEvent::VertexFinished { .. } => "vertex_finished",
            GraphEvent::DijkstraOver { .. } => "dijkstra_over",
        }
    }
}

/// Observer that records every notification in order
#[derive(Debug)]
pub struct EventLog<V> {
    events: RefCell<Vec<GraphEvent<V>>>,
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }
}

impl<V: Clone> EventLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<GraphEvent<V>> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events, leaving the log empty
    pub fn take(&self) -> Vec<GraphEvent<V>> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn record(&self, event: GraphEvent<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone> GraphObserver<V> for EventLog<V> {
    fn bfs_begun(&self) {
        self.record(GraphEvent::BfsBegun);
    }

    fn dfs_begun(&self) {
        self.record(GraphEvent::DfsBegun);
    }

    fn dijkstra_begun(&self) {
        self.record(GraphEvent::DijkstraBegun);
    }

    fn visit(&self, vertex: &V) {
        self.record(GraphEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn search_over(&self) {
        self.record(GraphEvent::SearchOver);
    }

    fn dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) {
        self.record(GraphEvent::VertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn dijkstra_over(&self, path: &[V]) {
        self.record(GraphEvent::DijkstraOver {
            path: path.to_vec(),
        });
    }
}

/// Observer that forwards notifications to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<V: Debug> GraphObserver<V> for TracingObserver {
    fn bfs_begun(&self) {
        debug!("bfs_begun");
    }

    fn dfs_begun(&self) {
        debug!("dfs_begun");
    }

    fn dijkstra_begun(&self) {
        debug!("dijkstra_begun");
    }

    fn visit(&self, vertex: &V) {
        debug!(vertex = ?vertex, "visit");
    }

    fn search_over(&self) {
        debug!("search_over");
    }

    fn dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) {
        debug!(vertex = ?vertex, cost = cost.value(), "dijkstra_vertex_finished");
    }

    fn dijkstra_over(&self, path: &[V]) {
        debug!(path = ?path, "dijkstra_over");
    }
}
