use std::io::{BufWriter, Write};

use mazegen::{Generator, Maze, MazeRenderer};

/// Drawable page area in output units, sized to mostly fill a letter sheet.
const PAGE_WIDTH: f64 = 536.0;
const PAGE_HEIGHT: f64 = 720.0;
const DEFAULT_WIDTH: u16 = 67;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let width = match args.next() {
        Some(s) => match s.parse::<u16>() {
            Ok(w) if w >= 1 => w,
            _ => return usage(),
        },
        None => DEFAULT_WIDTH,
    };
    let pages = match args.next() {
        Some(s) => match s.parse::<u32>() {
            Ok(p) if p >= 1 => p,
            _ => return usage(),
        },
        None => 1,
    };
    let seed = match args.next() {
        Some(s) => match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => return usage(),
        },
        None => None,
    };

    let Some((cell_size, height)) = page_layout(width) else {
        return usage();
    };
    tracing::info!(width, height, cell_size, pages, "generating mazes");

    let mut maze = Maze::new(width, height)?;
    let renderer = MazeRenderer::new(cell_size)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{PAGE_WIDTH}" height="{}" viewBox="0 0 {PAGE_WIDTH} {}">"#,
        PAGE_HEIGHT * pages as f64,
        PAGE_HEIGHT * pages as f64,
    )?;
    for page in 0..pages {
        // A fixed seed still varies per page, otherwise every page would
        // carry the same maze.
        maze.generate(
            Generator::RecurBacktrack,
            seed.map(|s| s.wrapping_add(page as u64)),
        )?;
        writeln!(
            out,
            r#"<g transform="translate(0 {})" stroke="black" stroke-width="1" stroke-linecap="square">"#,
            PAGE_HEIGHT * page as f64
        )?;
        for line in renderer.render_lines(&maze)? {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                line.start.x, line.start.y, line.end.x, line.end.y
            )?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</svg>")?;
    out.flush()?;
    Ok(())
}

/// Derives the cell scale from the page width and the maze height from
/// whatever fits the page vertically at that scale. `None` when the derived
/// height does not fit a cell coordinate.
fn page_layout(width: u16) -> Option<(f64, u16)> {
    let cell_size = PAGE_WIDTH / width as f64;
    let height = u16::try_from((PAGE_HEIGHT / cell_size) as u32).ok()?;
    Some((cell_size, height))
}

fn usage() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Usage: mazegen [WIDTH] [PAGES] [SEED]");
    eprintln!("  WIDTH  maze width in cells, at least 1 (defaults to {DEFAULT_WIDTH})");
    eprintln!("  PAGES  number of mazes in the output document (defaults to 1)");
    eprintln!("  SEED   optional seed for reproducible output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_default_width() {
        let (cell_size, height) = page_layout(DEFAULT_WIDTH).unwrap();
        assert_eq!(cell_size, 8.0);
        assert_eq!(height, 90);
    }

    #[test]
    fn test_page_layout_rejects_unrepresentable_height() {
        // At extreme widths the derived height exceeds the cell coordinate
        // range; the layout must refuse rather than silently truncate.
        assert!(page_layout(u16::MAX).is_none());
        assert!(page_layout(1).is_some());
        assert!(page_layout(1000).is_some());
    }
}
