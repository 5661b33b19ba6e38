//! Perfect-maze generation: spanning trees over a rectangular cell grid,
//! turned into drawable wall segments.
//!
//! A [`Maze`] wraps a [`CellGraph`] (grid adjacency plus mutable open-edge
//! state) with fixed entrance and exit cells. [`generators`] carve a random
//! spanning tree into the graph; [`MazeRenderer`] converts the resulting
//! wall state into line segments for whatever drawing layer the caller owns.
//!
//! ```
//! use mazegen::{Generator, Maze, MazeRenderer};
//!
//! let mut maze = Maze::new(10, 8)?;
//! maze.generate(Generator::RecurBacktrack, Some(42))?;
//! let lines = MazeRenderer::new(8.0)?.render_lines(&maze)?;
//! assert!(!lines.is_empty());
//! # Ok::<(), mazegen::MazeError>(())
//! ```

pub mod error;
pub mod generators;
pub mod graph;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use generators::{Generator, generate_maze};
pub use graph::CellGraph;
pub use maze::{Maze, Side};
pub use render::{LineSegment, MazeRenderer, Point};
