//! `arbor graph`: build a weighted graph and run an observed search
//!
//! The search helpers here are shared with `arbor grid`.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::rc::Rc;
use std::time::Instant;

use serde::Serialize;
use serde_json::json;

use arbor_core::error::Result;
use arbor_core::graph::{
    EventLog, GraphEvent, SearchOutcome, ShortestPath, TracingObserver, WeightedGraph,
};
use arbor_core::trace_time;

use super::dispatch::{Command, CommandContext};
use super::records::{header, quoted};
use crate::cli::{Algorithm, GraphArgs};
use crate::output_by_format;

/// Result of one algorithm run
pub enum Outcome<V> {
    Search(SearchOutcome<V>),
    Path(ShortestPath<V>),
}

/// Notifications and result of one algorithm run
pub struct Report<V> {
    pub algorithm: Algorithm,
    pub from: V,
    pub to: V,
    pub events: Vec<GraphEvent<V>>,
    pub outcome: Outcome<V>,
}

/// Run `algorithm` from `from` to `to` with an event log and a tracing observer attached
pub fn run_algorithm<V>(
    graph: &mut WeightedGraph<V>,
    algorithm: Algorithm,
    from: V,
    to: V,
) -> Result<Report<V>>
where
    V: Clone + Eq + Hash + Debug + 'static,
{
    let start = Instant::now();
    let log: Rc<EventLog<V>> = Rc::new(EventLog::new());
    graph.add_observer(log.clone());
    graph.add_observer(Rc::new(TracingObserver));

    let outcome = match algorithm {
        Algorithm::Bfs => Outcome::Search(graph.do_bfs(&from, &to)?),
        Algorithm::Dfs => Outcome::Search(graph.do_dfs(&from, &to)?),
        Algorithm::Dijkstra => Outcome::Path(graph.do_dijkstra(&from, &to)?),
    };
    trace_time!(start, "run_algorithm", events = log.len());

    Ok(Report {
        algorithm,
        from,
        to,
        events: log.take(),
        outcome,
    })
}

impl Command for GraphArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut graph = WeightedGraph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone())?;
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_built"
        );

        let report = run_algorithm(&mut graph, self.algorithm, self.from.clone(), self.to.clone())?;
        print_report(ctx, "graph", &report)
    }
}

/// Print a report in the context's output format
pub fn print_report<V>(ctx: &CommandContext, mode: &str, report: &Report<V>) -> Result<()>
where
    V: Display + Serialize,
{
    output_by_format!(ctx.format,
        json => { print_json(report)? },
        human => { print_human(report, ctx.quiet()); },
        records => { print_records(mode, report); }
    );
    Ok(())
}

fn join<V: Display>(vertices: &[V], separator: &str) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn describe_event<V: Display>(event: &GraphEvent<V>) -> String {
    match event {
        GraphEvent::Visit { vertex } => format!("visit {}", vertex),
        GraphEvent::VertexFinished { vertex, cost } => {
            format!("vertex_finished {} {}", vertex, cost)
        }
        GraphEvent::DijkstraOver { path } => format!("dijkstra_over {}", join(path, " -> ")),
        other => other.kind().to_string(),
    }
}

fn print_human<V: Display>(report: &Report<V>, quiet: bool) {
    if !quiet {
        for event in &report.events {
            println!("{}", describe_event(event));
        }
    }

    match &report.outcome {
        Outcome::Search(outcome) if outcome.found => println!(
            "found {} after visiting {} vertices",
            report.to,
            outcome.visited.len()
        ),
        Outcome::Search(outcome) => println!(
            "{} not reachable from {} ({} vertices visited)",
            report.to,
            report.from,
            outcome.visited.len()
        ),
        Outcome::Path(path) => {
            println!("path: {} (cost {})", join(&path.path, " -> "), path.cost)
        }
    }
}

fn print_json<V: Serialize>(report: &Report<V>) -> Result<()> {
    let mut output = json!({
        "algorithm": report.algorithm.name(),
        "from": report.from,
        "to": report.to,
        "events": report.events,
    });
    let result = match &report.outcome {
        Outcome::Search(outcome) => serde_json::to_value(outcome)?,
        Outcome::Path(path) => serde_json::to_value(path)?,
    };
    if let (Some(output), serde_json::Value::Object(result)) = (output.as_object_mut(), result) {
        output.extend(result);
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_records<V: Display>(mode: &str, report: &Report<V>) {
    header(
        mode,
        &[
            ("algorithm", report.algorithm.name().to_string()),
            ("from", quoted(&report.from)),
            ("to", quoted(&report.to)),
        ],
    );

    for event in &report.events {
        match event {
            GraphEvent::Visit { vertex } => println!("E visit vertex={}", quoted(vertex)),
            GraphEvent::VertexFinished { vertex, cost } => {
                println!("E vertex_finished vertex={} cost={}", quoted(vertex), cost)
            }
            GraphEvent::DijkstraOver { path } => {
                println!("E dijkstra_over path={}", quoted(join(path, " ")))
            }
            other => println!("E {}", other.kind()),
        }
    }

    match &report.outcome {
        Outcome::Search(outcome) => println!(
            "S found={} visited={}",
            outcome.found,
            quoted(join(&outcome.visited, " "))
        ),
        Outcome::Path(path) => println!(
            "P cost={} path={}",
            path.cost,
            quoted(join(&path.path, " "))
        ),
    }
}
