//! Command implementations for arbor

pub mod dispatch;
pub mod graph;
pub mod grid;
pub mod map;
pub mod records;
