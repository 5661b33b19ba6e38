use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;
mod recur_backtrack;

pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;

use crate::error::MazeError;
use crate::graph::CellGraph;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Removes and returns a uniformly random element of `items`, or `None` if
/// the collection is empty. Both generator variants draw from their candidate
/// pools through this one primitive.
fn remove_random<T>(items: &mut Vec<T>, rng: &mut impl Rng) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items.swap_remove(rng.random_range(0..items.len())))
    }
}

/// Rejects a graph that still holds open edges from a previous pass.
fn check_ready(graph: &CellGraph) -> Result<(), MazeError> {
    match graph.edge_count() {
        0 => Ok(()),
        open => Err(MazeError::UnreadyState(open)),
    }
}

/// The available spanning-tree strategies. Both carve a perfect maze; they
/// differ in texture (Prim tends to short dead ends, the backtracker to long
/// winding corridors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Prim,
    RecurBacktrack,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::RecurBacktrack => write!(f, "Randomized Recursive Backtracking"),
        }
    }
}

/// Carves a random spanning tree into `graph` with the chosen generator.
///
/// The graph must be freshly reset: a graph that still holds edges from a
/// previous pass is rejected with [`MazeError::UnreadyState`]. On success the
/// open edges form a spanning tree over all cells, exactly
/// `cell_count() - 1` of them.
pub fn generate_maze(
    graph: &mut CellGraph,
    generator: Generator,
    seed: Option<u64>,
) -> Result<(), MazeError> {
    match generator {
        Generator::Prim => randomized_prim(graph, seed),
        Generator::RecurBacktrack => recursive_backtrack(graph, seed),
    }
}
