//! Text parsing for item lists and pair constraints.
//!
//! Parse failures here are caller-side input problems, reported through
//! `anyhow` with line context; the engine's typed errors cover only
//! validated input.

use anyhow::{anyhow, Result};

/// Split free text into item names.
///
/// Newlines and commas separate names; tokens are trimmed, blanks are
/// dropped, and duplicates keep their first occurrence so item order
/// stays stable.
pub fn parse_items(text: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for token in text.split(['\n', ',']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !items.iter().any(|existing| existing == token) {
            items.push(token.to_string());
        }
    }
    items
}

/// Parse pairing constraints, one `A,B` line per pair.
///
/// Each non-empty line must carry exactly two non-empty comma-separated
/// names; a pair of an item with itself and symmetric duplicates are
/// rejected.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 2 || fields.iter().any(|f| f.is_empty()) {
            return Err(anyhow!(
                "line {}: expected two comma-separated items, got '{line}'",
                lineno + 1
            ));
        }
        let (a, b) = (fields[0], fields[1]);
        if a == b {
            return Err(anyhow!(
                "line {}: pair must be two different items",
                lineno + 1
            ));
        }
        if pairs
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
        {
            return Err(anyhow!("line {}: pair {a},{b} already listed", lineno + 1));
        }
        pairs.push((a.to_string(), b.to_string()));
    }
    Ok(pairs)
}
