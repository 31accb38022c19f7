use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{ArborError, Result};
use crate::graph::types::{Cost, FinishedVertex, ShortestPath};
use crate::graph::WeightedGraph;

/// Min-heap entry (wrapped in `Reverse`), ordered by cost and then by vertex
/// index, so equal-cost candidates are finished in vertex insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub cost: Cost,
    pub vertex: usize,
}

/// Best known way to reach a vertex
#[derive(Debug, Clone, Copy)]
struct Best {
    cost: Cost,
    predecessor: usize,
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    finished: Vec<bool>,
    best: Vec<Option<Best>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    order: Vec<(usize, Cost)>,
}

impl DijkstraState {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut best = vec![None; vertex_count];
        best[start] = Some(Best {
            cost: Cost::ZERO,
            predecessor: start,
        });

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            cost: Cost::ZERO,
            vertex: start,
        }));

        Self {
            finished: vec![false; vertex_count],
            best,
            heap,
            order: Vec::with_capacity(vertex_count),
        }
    }

    /// Record `candidate` for `vertex` if it has no cost yet or this one is lower
    fn relax(&mut self, vertex: usize, candidate: Cost, via: usize) {
        let improves = self.best[vertex].is_none_or(|best| candidate < best.cost);
        if improves {
            self.best[vertex] = Some(Best {
                cost: candidate,
                predecessor: via,
            });
            self.heap.push(Reverse(HeapEntry {
                cost: candidate,
                vertex,
            }));
        }
    }

    /// Follow predecessors from `end` back to `start`
    fn path_to(&self, start: usize, end: usize) -> Option<Vec<usize>> {
        let mut path = vec![end];
        let mut current = end;
        while current != start {
            current = self.best[current]?.predecessor;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Single-source shortest paths from `start`; reports the path to `end`.
///
/// Every vertex reachable from `start` is finished, even after `end` has
/// been: the run never stops early. Vertices with no path from `start` are
/// never finished. If `end` is one of them the run fails with
/// `UnreachableTarget` after the finished notifications, and
/// `dijkstra_over` is not sent.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra_shortest_path<V>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> Result<ShortestPath<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let (start_id, end_id) = (graph.require(start)?, graph.require(end)?);

    graph.notify(|o| o.dijkstra_begun());
    let mut state = DijkstraState::new(graph.vertex_count(), start_id);

    while let Some(Reverse(HeapEntry { cost, vertex })) = state.heap.pop() {
        // Superseded entry for a vertex already finished at a lower cost
        if state.finished[vertex] {
            continue;
        }
        state.finished[vertex] = true;
        state.order.push((vertex, cost));

        let finished = graph.vertex_at(vertex);
        trace!(vertex = ?finished, cost = cost.value(), "vertex_finished");
        graph.notify(|o| o.dijkstra_vertex_finished(finished, cost));

        for &(next, weight) in graph.edges_from(vertex) {
            if !state.finished[next] {
                state.relax(next, cost + Cost::from(weight), vertex);
            }
        }
    }

    let Some(ids) = state.path_to(start_id, end_id) else {
        debug!(finished = state.order.len(), "dijkstra_unreachable");
        return Err(ArborError::unreachable(start, end));
    };

    let path: Vec<V> = ids.iter().map(|&id| graph.vertex_at(id).clone()).collect();
    graph.notify(|o| o.dijkstra_over(&path));

    let cost = state.best[end_id].map(|best| best.cost).unwrap_or_default();
    debug!(
        finished = state.order.len(),
        cost = cost.value(),
        hops = path.len() - 1,
        "dijkstra_complete"
    );

    Ok(ShortestPath {
        path,
        cost,
        finished: state
            .order
            .into_iter()
            .map(|(id, cost)| FinishedVertex {
                vertex: graph.vertex_at(id).clone(),
                cost,
            })
            .collect(),
    })
}
