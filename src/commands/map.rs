//! `arbor map`: drive a search-tree map from the command line

use serde_json::json;
use tracing::debug;

use arbor_core::error::Result;
use arbor_core::tree::SearchTreeMap;

use super::dispatch::{Command, CommandContext};
use super::records::{header, quoted};
use crate::cli::MapArgs;
use crate::output_by_format;

/// Everything the map command reports
struct MapReport {
    map: SearchTreeMap<i64, String>,
    removed: Vec<(i64, Option<String>)>,
    lookups: Vec<(i64, Option<String>)>,
    range: Option<(i64, i64, SearchTreeMap<i64, String>)>,
}

impl MapArgs {
    fn apply(&self) -> MapReport {
        let mut map = SearchTreeMap::new();
        for (key, value) in &self.puts {
            map.put(*key, value.clone());
        }

        let removed = self
            .removes
            .iter()
            .map(|key| (*key, map.remove(key)))
            .collect();

        let lookups = self
            .gets
            .iter()
            .map(|key| (*key, map.get(key).cloned()))
            .collect();

        let range = self
            .range
            .map(|(from, to)| (from, to, map.sub_map(&from, &to)));

        debug!(
            size = map.size(),
            height = map.root().height(),
            "map_applied"
        );
        MapReport {
            map,
            removed,
            lookups,
            range,
        }
    }
}

impl Command for MapArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let report = self.apply();

        output_by_format!(ctx.format,
            json => { print_json(&report)? },
            human => { print_human(&report, ctx.quiet()); },
            records => { print_records(&report); }
        );
        Ok(())
    }
}

fn join_keys(keys: &[i64]) -> String {
    keys.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_human(report: &MapReport, quiet: bool) {
    if !quiet {
        for (key, value) in &report.removed {
            match value {
                Some(value) => println!("removed {} = {}", key, value),
                None => println!("remove {}: not present", key),
            }
        }
    }

    println!("size: {}", report.map.size());
    println!("keys: {}", join_keys(&report.map.key_list()));

    for (key, value) in &report.lookups {
        match value {
            Some(value) => println!("get {} = {}", key, value),
            None => println!("get {}: not present", key),
        }
    }

    if let Some((from, to, sub)) = &report.range {
        println!("range {}..{}: {}", from, to, join_keys(&sub.key_list()));
    }
}

fn entries_json(map: &SearchTreeMap<i64, String>) -> Vec<serde_json::Value> {
    map.entries()
        .into_iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect()
}

fn print_json(report: &MapReport) -> Result<()> {
    let pairs = |items: &[(i64, Option<String>)]| -> Vec<serde_json::Value> {
        items
            .iter()
            .map(|(key, value)| json!({ "key": key, "value": value }))
            .collect()
    };

    let range = report.range.as_ref().map(|(from, to, sub)| {
        json!({
            "from": from,
            "to": to,
            "keys": sub.key_list(),
            "entries": entries_json(sub),
        })
    });

    let output = json!({
        "size": report.map.size(),
        "keys": report.map.key_list(),
        "entries": entries_json(&report.map),
        "removed": pairs(&report.removed),
        "lookups": pairs(&report.lookups),
        "range": range,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_records(report: &MapReport) {
    header("map", &[("size", report.map.size().to_string())]);

    for (key, value) in report.map.entries() {
        println!("K key={} value={}", key, quoted(value));
    }
    for (key, value) in &report.removed {
        match value {
            Some(value) => println!("D key={} value={}", key, quoted(value)),
            None => println!("D key={} missing", key),
        }
    }
    for (key, value) in &report.lookups {
        match value {
            Some(value) => println!("G key={} value={}", key, quoted(value)),
            None => println!("G key={} missing", key),
        }
    }
    if let Some((from, to, sub)) = &report.range {
        let keys: Vec<String> = sub.key_list().iter().map(i64::to_string).collect();
        println!("R from={} to={} keys={}", from, to, quoted(keys.join(" ")));
    }
}
