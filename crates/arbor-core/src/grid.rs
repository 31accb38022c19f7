//! Rectangular grid to graph conversion
//!
//! A grid of `width` x `height` cells, with `(0, 0)` in the upper left
//! corner. Adjacent cells not separated by a wall are joined by a pair of
//! opposite edges carrying the same weight. Only the public graph API is used.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{ArborError, Result};
use crate::graph::{Weight, WeightedGraph};

/// Grid coordinate used as a graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = ArborError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ArborError::invalid_value("cell (expected X,Y)", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ArborError::invalid_value("cell (expected X,Y)", s))
        };
        Ok(Cell::new(parse(x)?, parse(y)?))
    }
}

/// Side of a cell that borders the neighbour above or to the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Above,
    Left,
}

impl FromStr for Side {
    type Err = ArborError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" | "up" => Ok(Side::Above),
            "left" => Ok(Side::Left),
            other => Err(ArborError::invalid_value(
                "side (expected: above, left)",
                other,
            )),
        }
    }
}

/// Description of a walled, weighted grid
pub trait GridSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_wall_above(&self, cell: Cell) -> bool;
    fn is_wall_to_left(&self, cell: Cell) -> bool;
    fn weight_above(&self, cell: Cell) -> Weight;
    fn weight_to_left(&self, cell: Cell) -> Weight;
}

/// Build a graph with one vertex per cell, row by row.
///
/// Fails with `InvalidEdge` if the source reports a weight outside `0..=u32::MAX`.
pub fn grid_graph<S: GridSource + ?Sized>(source: &S) -> Result<WeightedGraph<Cell>> {
    let mut graph = WeightedGraph::new();

    for y in 0..source.height() {
        for x in 0..source.width() {
            let cell = Cell::new(x, y);
            graph.add_vertex(cell)?;

            if y > 0 && !source.is_wall_above(cell) {
                let above = Cell::new(x, y - 1);
                let weight = source.weight_above(cell);
                graph.add_edge(&cell, &above, weight)?;
                graph.add_edge(&above, &cell, weight)?;
            }
            if x > 0 && !source.is_wall_to_left(cell) {
                let left = Cell::new(x - 1, y);
                let weight = source.weight_to_left(cell);
                graph.add_edge(&cell, &left, weight)?;
                graph.add_edge(&left, &cell, weight)?;
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "grid_graph"
    );
    Ok(graph)
}

/// Grid with a uniform default weight plus explicit walls and weight overrides
#[derive(Debug, Clone)]
pub struct OpenGrid {
    width: usize,
    height: usize,
    default_weight: Weight,
    walls: HashSet<(Cell, Side)>,
    weights: HashMap<(Cell, Side), Weight>,
}

impl OpenGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            default_weight: 1,
            walls: HashSet::new(),
            weights: HashMap::new(),
        }
    }

    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// Block the passage on `side` of `cell`
    pub fn with_wall(mut self, cell: Cell, side: Side) -> Self {
        self.walls.insert((cell, side));
        self
    }

    /// Override the weight of the passage on `side` of `cell`
    pub fn with_weight(mut self, cell: Cell, side: Side, weight: Weight) -> Self {
        self.weights.insert((cell, side), weight);
        self
    }

    fn weight(&self, cell: Cell, side: Side) -> Weight {
        self.weights
            .get(&(cell, side))
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl GridSource for OpenGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall_above(&self, cell: Cell) -> bool {
        self.walls.contains(&(cell, Side::Above))
    }

    fn is_wall_to_left(&self, cell: Cell) -> bool {
        self.walls.contains(&(cell, Side::Left))
    }

    fn weight_above(&self, cell: Cell) -> Weight {
        self.weight(cell, Side::Above)
    }

    fn weight_to_left(&self, cell: Cell) -> Weight {
        self.weight(cell, Side::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parse_and_display() {
        let cell: Cell = "3, 4".parse().unwrap();
        assert_eq!(cell, Cell::new(3, 4));
        assert_eq!(cell.to_string(), "3,4");
        assert!("3".parse::<Cell>().is_err());
        assert!("a,1".parse::<Cell>().is_err());
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("above".parse::<Side>().unwrap(), Side::Above);
        assert_eq!("UP".parse::<Side>().unwrap(), Side::Above);
        assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
        assert!("right".parse::<Side>().is_err());
    }

    #[test]
    fn test_open_grid_is_fully_connected() {
        let graph = grid_graph(&OpenGrid::new(3, 2)).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 4 horizontal and 3 vertical passages, two edges each
        assert_eq!(graph.edge_count(), 14);
        assert_eq!(
            graph.get_weight(&Cell::new(1, 1), &Cell::new(1, 0)).unwrap(),
            Some(1)
        );
        assert_eq!(
            graph.get_weight(&Cell::new(0, 0), &Cell::new(1, 1)).unwrap(),
            None
        );
    }

    #[test]
    fn test_walls_remove_both_directions() {
        let grid = OpenGrid::new(2, 1).with_wall(Cell::new(1, 0), Side::Left);
        let graph = grid_graph(&grid).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            graph.get_weight(&Cell::new(0, 0), &Cell::new(1, 0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_weights_apply_symmetrically() {
        let grid = OpenGrid::new(1, 2)
            .with_default_weight(2)
            .with_weight(Cell::new(0, 1), Side::Above, 9);
        let graph = grid_graph(&grid).unwrap();
        assert_eq!(
            graph.get_weight(&Cell::new(0, 0), &Cell::new(0, 1)).unwrap(),
            Some(9)
        );
        assert_eq!(
            graph.get_weight(&Cell::new(0, 1), &Cell::new(0, 0)).unwrap(),
            Some(9)
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let grid = OpenGrid::new(2, 1).with_default_weight(-1);
        assert!(matches!(
            grid_graph(&grid),
            Err(ArborError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn test_shortest_path_goes_around_wall() {
        // 2x2 grid; the direct drop from (0,0) to (0,1) is walled off
        let grid = OpenGrid::new(2, 2).with_wall(Cell::new(0, 1), Side::Above);
        let graph = grid_graph(&grid).unwrap();

        let result = graph
            .do_dijkstra(&Cell::new(0, 0), &Cell::new(0, 1))
            .unwrap();
        assert_eq!(
            result.path,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1)
            ]
        );
        assert_eq!(result.cost.value(), 3);
    }

    #[test]
    fn test_wall_on_edge_of_grid_is_ignored() {
        let grid = OpenGrid::new(1, 1).with_wall(Cell::new(0, 0), Side::Above);
        let graph = grid_graph(&grid).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
