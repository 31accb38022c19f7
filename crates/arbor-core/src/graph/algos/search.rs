use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::error::Result;
use crate::graph::types::SearchOutcome;
use crate::graph::WeightedGraph;

/// Pending-vertex container that decides visitation order
pub(crate) trait Frontier {
    fn put(&mut self, id: usize);
    fn next(&mut self) -> Option<usize>;
}

/// FIFO: breadth-first
impl Frontier for VecDeque<usize> {
    fn put(&mut self, id: usize) {
        self.push_back(id);
    }

    fn next(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// LIFO: depth-first
impl Frontier for Vec<usize> {
    fn put(&mut self, id: usize) {
        self.push(id);
    }

    fn next(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Shared search loop.
///
/// Pops a vertex; if it has not been visited yet, observers are told about
/// the visit. Reaching `end` notifies `search_over` and returns at once.
/// Otherwise the vertex is marked visited and its unvisited neighbours are
/// queued in edge insertion order. The same vertex may sit in the frontier
/// more than once; the visited check on pop filters the repeats.
fn run_search<V, F>(
    graph: &WeightedGraph<V>,
    start: usize,
    end: usize,
    mut frontier: F,
) -> SearchOutcome<V>
where
    V: Clone + Eq + Hash + Debug,
    F: Frontier,
{
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    frontier.put(start);

    while let Some(current) = frontier.next() {
        if visited[current] {
            continue;
        }

        let vertex = graph.vertex_at(current);
        graph.notify(|o| o.visit(vertex));
        order.push(vertex.clone());

        if current == end {
            graph.notify(|o| o.search_over());
            return SearchOutcome {
                visited: order,
                found: true,
            };
        }

        visited[current] = true;
        for &(next, _) in graph.edges_from(current) {
            if !visited[next] {
                frontier.put(next);
            }
        }
    }

    SearchOutcome {
        visited: order,
        found: false,
    }
}

/// Breadth-first search from `start` until `end` is visited
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs_search<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let (start_id, end_id) = (graph.require(start)?, graph.require(end)?);

    graph.notify(|o| o.bfs_begun());
    let outcome = run_search(graph, start_id, end_id, VecDeque::new());

    debug!(visited = outcome.visited.len(), found = outcome.found, "bfs_complete");
    Ok(outcome)
}

/// Depth-first search from `start` until `end` is visited
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs_search<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let (start_id, end_id) = (graph.require(start)?, graph.require(end)?);

    graph.notify(|o| o.dfs_begun());
    let outcome = run_search(graph, start_id, end_id, Vec::new());

    debug!(visited = outcome.visited.len(), found = outcome.found, "dfs_complete");
    Ok(outcome)
}
