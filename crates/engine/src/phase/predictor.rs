//! Working-set prediction.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::Symbol;

/// Predicts the next working set from a look-ahead window.
///
/// Ranks the window's symbols by descending occurrence count, breaking ties by first
/// appearance in the window, and keeps the top `capacity`.
pub fn predict_working_set<S: Symbol>(lookahead: &[S], capacity: usize) -> Vec<S> {
    let mut counts: HashMap<&S, usize> = HashMap::new();
    let mut first_seen: Vec<&S> = Vec::new();
    for symbol in lookahead {
        let count = counts.entry(symbol).or_insert(0);
        if *count == 0 {
            first_seen.push(symbol);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order within equal counts.
    first_seen.sort_by_key(|symbol| Reverse(counts.get(symbol).copied().unwrap_or(0)));
    first_seen.into_iter().take(capacity).cloned().collect()
}
