use thiserror::Error;

/// Structural failures of the maze core. There are no transient or retryable
/// errors: every variant is a bad argument or a protocol violation by the
/// caller.
#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    /// Grid construction with a zero width or height.
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },

    /// A cell id or coordinate outside the grid was requested.
    #[error("cell {0} is outside the grid")]
    InvalidCell(usize),

    /// A generator was run on a graph that still holds edges from a previous
    /// pass. Callers must `reset_edges` between generation runs.
    #[error("generator requires a freshly reset graph, found {0} open edges")]
    UnreadyState(usize),

    /// The renderer scale must be a finite, positive number.
    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f64),
}
