use crate::error::MazeError;
use crate::maze::{Maze, Side};

/// A point in the caller's unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A drawable wall segment. Recomputed on every render call, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        LineSegment {
            start: Point {
                x: start.0,
                y: start.1,
            },
            end: Point { x: end.0, y: end.1 },
        }
    }
}

/// Converts a maze's wall state into line segments at a fixed cell scale.
/// Owns no styling, page layout, or file format; a drawing layer consumes
/// the segments.
pub struct MazeRenderer {
    cell_size: f64,
}

impl MazeRenderer {
    /// Creates a renderer with the given cell edge length.
    pub fn new(cell_size: f64) -> Result<Self, MazeError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(MazeError::InvalidCellSize(cell_size));
        }
        Ok(MazeRenderer { cell_size })
    }

    /// Emits one segment per closed side of every cell, iterating cells in
    /// row-major order for reproducible output.
    ///
    /// A wall shared by two adjacent cells is closed from both perspectives
    /// and is emitted twice; that duplication is harmless for drawing and is
    /// left in place.
    pub fn render_lines(&self, maze: &Maze) -> Result<Vec<LineSegment>, MazeError> {
        let (cols, rows) = maze.size();
        let mut lines = Vec::new();
        for y in 0..rows {
            for x in 0..cols {
                let corners = self.corners(x, y);
                let cell = maze.graph().cell_at(x, y)?;
                for side in maze.closed_sides(cell)? {
                    lines.push(match side {
                        Side::Top => LineSegment::new(corners.ul, corners.ur),
                        Side::Bottom => LineSegment::new(corners.bl, corners.br),
                        Side::Left => LineSegment::new(corners.ul, corners.bl),
                        Side::Right => LineSegment::new(corners.ur, corners.br),
                    });
                }
            }
        }
        Ok(lines)
    }

    fn corners(&self, x: u16, y: u16) -> Corners {
        let s = self.cell_size;
        let (x, y) = (x as f64, y as f64);
        Corners {
            ul: (x * s, y * s),
            ur: ((x + 1.0) * s, y * s),
            bl: (x * s, (y + 1.0) * s),
            br: ((x + 1.0) * s, (y + 1.0) * s),
        }
    }
}

struct Corners {
    ul: (f64, f64),
    ur: (f64, f64),
    bl: (f64, f64),
    br: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Generator;

    #[test]
    fn test_rejects_bad_cell_size() {
        assert!(MazeRenderer::new(0.0).is_err());
        assert!(MazeRenderer::new(-2.5).is_err());
        assert!(MazeRenderer::new(f64::NAN).is_err());
        assert!(MazeRenderer::new(8.0).is_ok());
    }

    #[test]
    fn test_single_cell_segments() {
        let mut maze = Maze::new(1, 1).unwrap();
        maze.generate(Generator::Prim, Some(0)).unwrap();
        let renderer = MazeRenderer::new(10.0).unwrap();
        let lines = renderer.render_lines(&maze).unwrap();
        // Left and right walls only; top and bottom are the forced openings.
        assert_eq!(
            lines,
            vec![
                LineSegment::new((0.0, 0.0), (0.0, 10.0)),
                LineSegment::new((10.0, 0.0), (10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_segment_count_matches_closed_sides() {
        let mut maze = Maze::new(6, 5).unwrap();
        maze.generate(Generator::RecurBacktrack, Some(21)).unwrap();
        let renderer = MazeRenderer::new(4.0).unwrap();
        let lines = renderer.render_lines(&maze).unwrap();
        let expected: usize = (0..maze.graph().cell_count())
            .map(|cell| maze.closed_sides(cell).unwrap().len())
            .sum();
        assert_eq!(lines.len(), expected);
    }

    #[test]
    fn test_render_is_reproducible() {
        let mut maze = Maze::new(6, 5).unwrap();
        maze.generate(Generator::Prim, Some(77)).unwrap();
        let renderer = MazeRenderer::new(4.0).unwrap();
        assert_eq!(
            renderer.render_lines(&maze).unwrap(),
            renderer.render_lines(&maze).unwrap()
        );
    }

    #[test]
    fn test_two_by_one_segments() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.generate(Generator::Prim, Some(0)).unwrap();
        let renderer = MazeRenderer::new(1.0).unwrap();
        let lines = renderer.render_lines(&maze).unwrap();
        assert_eq!(
            lines,
            vec![
                // Cell 0: left, then bottom.
                LineSegment::new((0.0, 0.0), (0.0, 1.0)),
                LineSegment::new((0.0, 1.0), (1.0, 1.0)),
                // Cell 1: right, then top.
                LineSegment::new((2.0, 0.0), (2.0, 1.0)),
                LineSegment::new((1.0, 0.0), (2.0, 0.0)),
            ]
        );
    }
}
