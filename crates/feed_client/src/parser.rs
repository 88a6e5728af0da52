//! Tolerant parser for the transition feed's indentation-based line format.

use shared::domain::Transition;

/// Marker introducing one package entry under a transition header.
const PACKAGE_MARKER: &str = "- ";

/// Single linear pass over the feed text, no backtracking.
///
/// The upstream format is not formally specified, so classification is
/// per-line and forgiving: a non-empty line starting in column zero opens a
/// new record (one trailing `:` stripped if present), a line whose trimmed
/// form starts with `"- "` adds a package to the open record, and every
/// other line is ignored. Package lines before the first header have no
/// record to join and are dropped. Records come back in encounter order
/// with no deduplication and no validation of package names.
pub fn parse_transitions(text: &str) -> Vec<Transition> {
    let mut transitions = Vec::new();
    let mut current: Option<Transition> = None;

    for line in text.lines() {
        if !line.is_empty() && !line.starts_with(|c: char| c.is_whitespace()) {
            if let Some(finished) = current.take() {
                transitions.push(finished);
            }
            let name = line.strip_suffix(':').unwrap_or(line);
            current = Some(Transition::new(name));
        } else if let Some(package) = line.trim().strip_prefix(PACKAGE_MARKER) {
            if let Some(open) = current.as_mut() {
                open.packages.push(package.to_string());
            }
        }
    }

    if let Some(finished) = current {
        transitions.push(finished);
    }
    transitions
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
