mod basics;
mod config;
mod graph;
mod grid;
mod map;
