//! Helpers for line-oriented records output
//!
//! Every records stream opens with an `H` header line; values that may
//! contain spaces are double-quoted.

use std::fmt::Display;

/// Escape double quotes in a quoted records value
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Quote any displayable value for records output
pub fn quoted(value: impl Display) -> String {
    format!("\"{}\"", escape_quotes(&value.to_string()))
}

/// Print the `H` header line for `mode` followed by extra `key=value` fields
pub fn header(mode: &str, fields: &[(&str, String)]) {
    let mut line = format!("H arbor=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}
