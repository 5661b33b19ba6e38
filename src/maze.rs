use crate::error::MazeError;
use crate::generators::{self, Generator};
use crate::graph::CellGraph;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// All sides, in the fixed order wall derivation reports them.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// The grid offset of the neighbor on this side.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Top => (0, -1),
            Side::Bottom => (0, 1),
        }
    }
}

/// A maze over a rectangular grid: a [`CellGraph`] whose open edges form a
/// spanning tree, plus a designated entrance (cell 0, top-left) and exit
/// (cell N-1, bottom-right).
pub struct Maze {
    graph: CellGraph,
    start: usize,
    end: usize,
}

impl Maze {
    /// Creates a maze with all walls closed. Call [`Maze::generate`] to carve
    /// passages.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        let graph = CellGraph::new(width, height)?;
        let end = graph.cell_count() - 1;
        Ok(Maze {
            graph,
            start: 0,
            end,
        })
    }

    /// Returns the maze dimensions as `(width, height)` in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.graph.width(), self.graph.height())
    }

    /// The entrance cell. Its top side is always reported open.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The exit cell. Its bottom side is always reported open.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the underlying cell graph.
    pub fn graph(&self) -> &CellGraph {
        &self.graph
    }

    /// Returns the underlying cell graph for mutation, e.g. to drive a
    /// generator against it directly.
    pub fn graph_mut(&mut self) -> &mut CellGraph {
        &mut self.graph
    }

    /// Resets the open-edge state and carves a fresh spanning tree with the
    /// chosen generator. Passing the same seed and generator reproduces the
    /// same maze; `None` draws entropy from the OS.
    pub fn generate(&mut self, generator: Generator, seed: Option<u64>) -> Result<(), MazeError> {
        self.graph.reset_edges();
        generators::generate_maze(&mut self.graph, generator, seed)?;
        tracing::debug!(
            width = self.graph.width(),
            height = self.graph.height(),
            edges = self.graph.edge_count(),
            %generator,
            "generated maze"
        );
        Ok(())
    }

    /// Computes which sides of `cell` are walls, in [`Side::ALL`] order.
    ///
    /// A side is closed iff the neighbor in that direction is off-grid, or
    /// on-grid with no open edge to `cell`. The entrance's top side and the
    /// exit's bottom side are then forced open regardless of the raw wall
    /// state, so every maze has a way in and a way out.
    pub fn closed_sides(&self, cell: usize) -> Result<Vec<Side>, MazeError> {
        let (cx, cy) = self.graph.coords_of(cell)?;
        let mut result = Vec::new();
        for side in Side::ALL {
            let (dx, dy) = side.delta();
            let (nx, ny) = (cx as i32 + dx, cy as i32 + dy);
            if !self.graph.in_bounds(nx, ny) {
                result.push(side);
                continue;
            }
            let neighbor = self.graph.cell_at(nx as u16, ny as u16)?;
            if !self.graph.has_edge(cell, neighbor) {
                result.push(side);
            }
        }
        if cell == self.start {
            result.retain(|&side| side != Side::Top);
        }
        if cell == self.end {
            result.retain(|&side| side != Side::Bottom);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(1, 1).unwrap();
        maze.generate(Generator::Prim, Some(0)).unwrap();
        assert_eq!(maze.graph().edge_count(), 0);
        // The one cell is both entrance and exit, so only the untouched
        // lateral walls remain.
        assert_eq!(maze.closed_sides(0).unwrap(), vec![Side::Left, Side::Right]);
    }

    #[test]
    fn test_two_by_one_maze() {
        for generator in [Generator::Prim, Generator::RecurBacktrack] {
            let mut maze = Maze::new(2, 1).unwrap();
            maze.generate(generator, Some(42)).unwrap();
            // Only one spanning tree exists: the 0-1 edge.
            assert!(maze.graph().has_edge(0, 1));
            assert_eq!(maze.closed_sides(0).unwrap(), vec![Side::Left, Side::Bottom]);
            assert_eq!(maze.closed_sides(1).unwrap(), vec![Side::Right, Side::Top]);
        }
    }

    #[test]
    fn test_entrance_and_exit_forced_open() {
        let mut maze = Maze::new(5, 4).unwrap();
        for generator in [Generator::Prim, Generator::RecurBacktrack] {
            for seed in 0..10 {
                maze.generate(generator, Some(seed)).unwrap();
                assert!(!maze.closed_sides(maze.start()).unwrap().contains(&Side::Top));
                assert!(
                    !maze
                        .closed_sides(maze.end())
                        .unwrap()
                        .contains(&Side::Bottom)
                );
            }
        }
    }

    #[test]
    fn test_closed_sides_without_generation() {
        // All walls closed: every cell reports all sides except the forced
        // entrance/exit openings.
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            maze.closed_sides(0).unwrap(),
            vec![Side::Left, Side::Right, Side::Bottom]
        );
        assert_eq!(
            maze.closed_sides(3).unwrap(),
            vec![Side::Left, Side::Right, Side::Top]
        );
    }

    #[test]
    fn test_closed_sides_invalid_cell() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(maze.closed_sides(4).unwrap_err(), MazeError::InvalidCell(4));
    }

    #[test]
    fn test_shared_walls_are_symmetric() {
        let mut maze = Maze::new(4, 4).unwrap();
        maze.generate(Generator::Prim, Some(7)).unwrap();
        for cell in 0..maze.graph().cell_count() {
            let (x, y) = maze.graph().coords_of(cell).unwrap();
            if x + 1 < 4 {
                let right = maze.graph().cell_at(x + 1, y).unwrap();
                assert_eq!(
                    maze.graph().has_edge(cell, right),
                    maze.graph().has_edge(right, cell)
                );
            }
        }
    }
}
