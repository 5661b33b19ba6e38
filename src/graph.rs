use crate::error::MazeError;

/// An undirected, unweighted graph of cells on a square grid. Edges indicate
/// open passages; the absence of an edge between grid-adjacent cells means a
/// wall.
///
/// Cell ids are `y * width + x`, in `[0, width * height)`. The grid shape and
/// the neighbor relation are fixed at construction; only the open-edge state
/// is mutable, and it can be cleared with [`CellGraph::reset_edges`] so the
/// same graph can be reused across generation passes.
#[derive(Debug)]
pub struct CellGraph {
    width: u16,
    height: u16,
    /// Grid-adjacent cells per cell, precomputed once. Immutable.
    neighbors: Box<[Vec<usize>]>,
    /// Open-edge adjacency lists. Undirected: an edge a-b appears in both
    /// `edges[a]` and `edges[b]`. Set semantics, insertion-ordered.
    edges: Box<[Vec<usize>]>,
}

impl CellGraph {
    /// Creates a graph over a `width` x `height` grid with all walls closed.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let count = width as usize * height as usize;
        let neighbors = (0..count)
            .map(|cell| gen_neighbors(cell, width, height))
            .collect::<Box<[_]>>();
        let edges = vec![Vec::new(); count].into_boxed_slice();
        Ok(CellGraph {
            width,
            height,
            neighbors,
            edges,
        })
    }

    /// Returns the width of the grid in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the grid in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks whether `(x, y)` names a cell of the grid. Accepts negative
    /// probes so callers can test one step past any boundary.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Maps grid coordinates to a cell id. Inverse of [`CellGraph::coords_of`].
    pub fn cell_at(&self, x: u16, y: u16) -> Result<usize, MazeError> {
        if x >= self.width || y >= self.height {
            return Err(MazeError::InvalidCell(
                y as usize * self.width as usize + x as usize,
            ));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Maps a cell id to its grid coordinates. Inverse of [`CellGraph::cell_at`].
    pub fn coords_of(&self, cell: usize) -> Result<(u16, u16), MazeError> {
        self.check_cell(cell)?;
        Ok((
            (cell % self.width as usize) as u16,
            (cell / self.width as usize) as u16,
        ))
    }

    /// Returns the grid-adjacent cells of `cell`, precomputed at construction.
    pub fn neighbors(&self, cell: usize) -> Result<&[usize], MazeError> {
        self.check_cell(cell)?;
        Ok(&self.neighbors[cell])
    }

    /// Opens the passage between `a` and `b`. The two cells must be
    /// grid-adjacent; only the id range is validated here, adjacency is the
    /// caller's precondition. Inserting an edge that is already open is a
    /// no-op.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), MazeError> {
        self.check_cell(a)?;
        self.check_cell(b)?;
        if !self.edges[a].contains(&b) {
            self.edges[a].push(b);
            // recall that this is an undirected graph
            self.edges[b].push(a);
        }
        Ok(())
    }

    /// Checks whether the passage between `a` and `b` is open. Out-of-range
    /// ids simply report no edge.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.get(a).is_some_and(|dests| dests.contains(&b))
    }

    /// Returns the open edges incident to `cell` as ordered `(cell, dest)`
    /// pairs.
    pub fn edges_from(&self, cell: usize) -> Result<Vec<(usize, usize)>, MazeError> {
        self.check_cell(cell)?;
        Ok(self.edges[cell].iter().map(|&dest| (cell, dest)).collect())
    }

    /// Returns the number of open (undirected) edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Closes every passage, returning the graph to its all-walls state.
    /// Must be called before each generation pass when reusing a graph.
    pub fn reset_edges(&mut self) {
        for dests in &mut self.edges {
            dests.clear();
        }
    }

    fn check_cell(&self, cell: usize) -> Result<(), MazeError> {
        if cell < self.cell_count() {
            Ok(())
        } else {
            Err(MazeError::InvalidCell(cell))
        }
    }
}

/// Grid-adjacent cells of `cell`: the four cardinal offsets, clipped to the
/// grid bounds.
fn gen_neighbors(cell: usize, width: u16, height: u16) -> Vec<usize> {
    let x = (cell % width as usize) as i32;
    let y = (cell / width as usize) as i32;
    [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32)
        .map(|(nx, ny)| ny as usize * width as usize + nx as usize)
        .collect()
}
