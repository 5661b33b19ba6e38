use crate::error::MazeError;
use crate::generators::{check_ready, get_rng, remove_random};
use crate::graph::CellGraph;

/// Carves a spanning tree by randomized frontier growth (Prim's algorithm).
///
/// The tree starts as cell 0 alone. The frontier holds `(tree_cell, neighbor)`
/// wall candidates along the tree's boundary; each step removes a uniformly
/// random candidate and, if its far cell is still outside the tree, opens the
/// passage and extends the frontier with that cell's own walls. Candidates
/// whose far cell joined the tree in the meantime are pruned lazily as they
/// are drawn.
pub fn randomized_prim(graph: &mut CellGraph, seed: Option<u64>) -> Result<(), MazeError> {
    check_ready(graph)?;
    let mut rng = get_rng(seed);

    let mut in_tree = vec![false; graph.cell_count()];
    in_tree[0] = true;
    let mut walls = wall_candidates(graph, 0)?;

    while let Some((source, dest)) = remove_random(&mut walls, &mut rng) {
        if in_tree[dest] {
            // Stale candidate from an earlier extension.
            continue;
        }
        graph.add_edge(source, dest)?;
        in_tree[dest] = true;
        walls.extend(wall_candidates(graph, dest)?);
    }
    Ok(())
}

/// The still-closed walls of `cell`: its grid neighbors minus the open edges.
fn wall_candidates(graph: &CellGraph, cell: usize) -> Result<Vec<(usize, usize)>, MazeError> {
    Ok(graph
        .neighbors(cell)?
        .iter()
        .filter(|&&nbc| !graph.has_edge(cell, nbc))
        .map(|&nbc| (cell, nbc))
        .collect())
}
