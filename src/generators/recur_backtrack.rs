use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::Rng;

use crate::error::MazeError;
use crate::generators::{check_ready, get_rng, remove_random};
use crate::graph::CellGraph;

/// Carves a spanning tree by randomized recursive backtracking (depth-first
/// search), starting from a uniformly random cell.
///
/// The walk keeps an explicit stack rather than recursing: the carve depth
/// reaches N on a snake-shaped maze, which would overflow the call stack for
/// large grids. Each cell's unvisited-neighbor candidate list is created
/// lazily on first visit and re-filtered against the visited set every time
/// the walk returns to the cell, since a neighbor may have been claimed
/// through another corridor in between.
pub fn recursive_backtrack(graph: &mut CellGraph, seed: Option<u64>) -> Result<(), MazeError> {
    check_ready(graph)?;
    let mut rng = get_rng(seed);

    let mut visited = vec![false; graph.cell_count()];
    let mut candidates: HashMap<usize, Vec<usize>> = HashMap::new();

    let first = rng.random_range(0..graph.cell_count());
    visited[first] = true;
    let mut stack = vec![first];

    while let Some(&cell) = stack.last() {
        let list = match candidates.entry(cell) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(graph.neighbors(cell)?.to_vec()),
        };
        list.retain(|&nbc| !visited[nbc]);

        match remove_random(list, &mut rng) {
            Some(dest) => {
                graph.add_edge(cell, dest)?;
                visited[dest] = true;
                stack.push(dest);
            }
            // Dead end: backtrack.
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}
