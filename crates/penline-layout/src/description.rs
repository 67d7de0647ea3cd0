//! Breaking route descriptions into display lines
//!
//! Purely syntactic: rendered width plays no part.

/// Separator between origin and destination
const ROUTE_SEPARATOR: &str = " - ";

/// Words that start a new line, applied in this order
pub const CONNECTORS: [&str; 4] = ["via", "or", "and", "&"];

/// Splits a description into lines.
///
/// `"Dudley Station - Ruggles Station via Melnea Cass Blvd"` becomes
/// `["Dudley Station -", "Ruggles Station", "via Melnea Cass Blvd"]`.
/// Each connector splits a line at its first occurrence; the remainder
/// keeps any later occurrences.
pub fn split_description(description: &str) -> Vec<String> {
    match description.split_once(ROUTE_SEPARATOR) {
        Some((from, to)) => {
            let mut lines = split_on_connectors(format!("{from} -"));
            lines.extend(split_on_connectors(to.to_string()));
            lines
        }
        None => split_on_connectors(description.to_string()),
    }
}

fn split_on_connectors(line: String) -> Vec<String> {
    CONNECTORS.iter().fold(vec![line], |lines, connector| {
        let needle = format!(" {connector} ");
        lines
            .into_iter()
            .flat_map(|l| match l.split_once(&needle) {
                Some((head, tail)) => vec![head.to_string(), format!("{connector} {tail}")],
                None => vec![l],
            })
            .collect()
    })
}
