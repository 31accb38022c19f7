use arbor_core::format::OutputFormat;
use arbor_core::graph::Weight;
use arbor_core::grid::{Cell, Side};

/// Directed edge as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse `KEY=VALUE` with an integer key
pub fn parse_key_value(s: &str) -> Result<(i64, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("key must be an integer, got '{}'", key))?;
    Ok((key, value.to_string()))
}

/// Parse `FROM..TO` into inclusive integer bounds
pub fn parse_range(s: &str) -> Result<(i64, i64), String> {
    let (from, to) = s
        .split_once("..")
        .ok_or_else(|| format!("expected FROM..TO, got '{}'", s))?;
    let bound = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|_| format!("range bound must be an integer, got '{}'", part))
    };
    Ok((bound(from)?, bound(to)?))
}

/// Parse `FROM:TO:WEIGHT`; the weight is the part after the last colon
pub fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    let malformed = || format!("expected FROM:TO:WEIGHT, got '{}'", s);
    let (ends, weight) = s.rsplit_once(':').ok_or_else(malformed)?;
    let (from, to) = ends.split_once(':').ok_or_else(malformed)?;
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }
    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|_| format!("weight must be an integer, got '{}'", weight))?;
    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Parse a grid cell `X,Y`
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    s.parse::<Cell>().map_err(|e| e.to_string())
}

/// Parse `X,Y:above` or `X,Y:left`
pub fn parse_wall(s: &str) -> Result<(Cell, Side), String> {
    let (cell, side) = s
        .split_once(':')
        .ok_or_else(|| format!("expected X,Y:above|left, got '{}'", s))?;
    let cell = parse_cell(cell)?;
    let side = side.parse::<Side>().map_err(|e| e.to_string())?;
    Ok((cell, side))
}
