//! Format output dispatch helpers

/// Dispatch on an output format with one block per variant.
///
/// ```rust,ignore
/// output_by_format!(ctx.format,
///     json => { print_json(&report)? },
///     human => { print_human(&report); },
///     records => { print_records(&report); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
