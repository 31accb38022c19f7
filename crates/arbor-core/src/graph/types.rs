use std::fmt;

use serde::Serialize;

/// Edge weight as supplied by callers.
///
/// `add_edge` accepts `0..=u32::MAX` and stores the weight as `u32`.
pub type Weight = i64;

/// Accumulated cost of a path.
///
/// Stored edge weights fit in `u32`, so a `u64` sum over any path of fewer
/// than 2^32 edges is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(u64::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a breadth- or depth-first search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<V> {
    /// Vertices in the order they were visited
    pub visited: Vec<V>,
    /// Whether the end vertex was reached
    pub found: bool,
}

/// A vertex committed to the finished set, with its final cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishedVertex<V> {
    pub vertex: V,
    pub cost: Cost,
}

/// Result of a single-source shortest-path run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from start to end, both inclusive
    pub path: Vec<V>,
    /// Total cost of `path`
    pub cost: Cost,
    /// Every reachable vertex in the order it was finished
    pub finished: Vec<FinishedVertex<V>>,
}
