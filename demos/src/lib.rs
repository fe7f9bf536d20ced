//! Helpers shared by the `tessel` command-line runner: reading grids,
//! generating random ones and drawing solved routes.

use std::io::Read;

use rand::{Rng, RngExt};
use tessel_core::{BinaryGrid, Cell, GridError, Point};
use tessel_paths::NO_PATH;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is neither a JSON grid nor an ASCII picture: {json}")]
    Format { json: serde_json::Error },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("density must be between 0 and 1, got {0}")]
    Density(f64),
}

/// Read a grid from `reader`.
///
/// JSON input (`[[0,1],[1,0]]`) is tried first; anything that does not look
/// like JSON is parsed as an ASCII picture (`.` open, `#` blocked). Invalid
/// JSON grids report the validation error rather than falling back.
pub fn read_grid(mut reader: impl Read) -> Result<BinaryGrid, DemoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text)
}

/// Parse a grid from text; see [`read_grid`].
pub fn parse_grid(text: &str) -> Result<BinaryGrid, DemoError> {
    if !text.trim_start().starts_with('[') {
        return Ok(text.parse::<BinaryGrid>()?);
    }
    let rows: Vec<Vec<i64>> =
        serde_json::from_str(text).map_err(|json| DemoError::Format { json })?;
    Ok(BinaryGrid::from_rows(&rows)?)
}

/// An `n`×`n` grid where each cell is blocked with probability `density`.
pub fn random_grid(n: usize, density: f64, rng: &mut impl Rng) -> Result<BinaryGrid, DemoError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(DemoError::Density(density));
    }
    Ok(BinaryGrid::from_fn(n, |_| {
        let r: f64 = rng.random();
        Cell::from(r < density)
    })?)
}

/// Draw `grid` with the cells of `route` marked `*`.
pub fn render_route(grid: &BinaryGrid, route: &[Point]) -> String {
    let n = grid.size();
    let mut out = String::with_capacity(n * (n + 1));
    for (p, cell) in grid.iter() {
        if p.x == 0 && p.y > 0 {
            out.push('\n');
        }
        let glyph = match cell {
            Cell::Blocked => '#',
            Cell::Open if route.contains(&p) => '*',
            Cell::Open => '.',
        };
        out.push(glyph);
    }
    out
}

/// The answer line for a solved grid: the path length, or [`NO_PATH`].
pub fn path_answer(len: Option<usize>) -> String {
    len.map_or_else(|| NO_PATH.to_string(), |n| n.to_string())
}

/// Draw a distance map as right-aligned columns. Blocked cells are `#` and
/// open cells the search never reached are `.`.
pub fn render_distances(grid: &BinaryGrid, distances: &[Vec<Option<usize>>]) -> String {
    let width = distances
        .iter()
        .flatten()
        .flatten()
        .max()
        .map_or(1, |d| d.to_string().len());
    let lines: Vec<String> = distances
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, d)| {
                    let glyph = match d {
                        Some(d) => d.to_string(),
                        None if grid.is_open(Point::new(x as i32, y as i32)) => ".".into(),
                        None => "#".into(),
                    };
                    format!("{glyph:>width$}")
                })
                .collect();
            cells.join(" ")
        })
        .collect();
    lines.join("\n")
}

/// Parse a comma-separated list of integers, ignoring blanks.
pub fn parse_list(s: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tessel_paths::{ClearPathSolver, shortest_clear_path, shortest_clear_route};

    #[test]
    fn json_and_ascii_inputs() {
        let a = parse_grid("[[0,1],[1,0]]").unwrap();
        let b = parse_grid(".#\n#.\n").unwrap();
        assert_eq!(a, b);
        let c = read_grid("[[0, 0], [0, 0]]".as_bytes()).unwrap();
        assert_eq!(c.blocked_count(), 0);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            parse_grid("[[0,1]]"),
            Err(DemoError::Grid(GridError::NotSquare { .. }))
        ));
        assert!(matches!(parse_grid("[[0,"), Err(DemoError::Format { .. })));
        assert!(matches!(
            parse_grid("..\n.?"),
            Err(DemoError::Grid(GridError::InvalidChar { ch: '?', .. }))
        ));
        assert!(matches!(parse_grid(""), Err(DemoError::Grid(GridError::Empty))));
    }

    #[test]
    fn random_grid_is_reproducible() {
        let mut r1 = rand::rngs::StdRng::seed_from_u64(7);
        let mut r2 = rand::rngs::StdRng::seed_from_u64(7);
        let a = random_grid(12, 0.3, &mut r1).unwrap();
        let b = random_grid(12, 0.3, &mut r2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 12);

        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert_eq!(random_grid(5, 0.0, &mut rng).unwrap().blocked_count(), 0);
        assert_eq!(random_grid(5, 1.0, &mut rng).unwrap().blocked_count(), 25);
        assert!(matches!(
            random_grid(5, 1.5, &mut rng),
            Err(DemoError::Density(_))
        ));
    }

    #[test]
    fn route_drawing() {
        let grid = parse_grid("...\n##.\n##.").unwrap();
        let route = shortest_clear_route(&grid).unwrap();
        assert_eq!(render_route(&grid, &route), "**.\n##*\n##*");
    }

    #[test]
    fn answers() {
        let blocked = parse_grid("#.\n..").unwrap();
        assert_eq!(path_answer(shortest_clear_path(&blocked)), "-1");
        let walled = parse_grid("...\n###\n...").unwrap();
        assert_eq!(path_answer(shortest_clear_path(&walled)), "-1");
        let open = parse_grid("..\n..").unwrap();
        assert_eq!(path_answer(shortest_clear_path(&open)), "2");
    }

    #[test]
    fn distance_drawing() {
        let grid = parse_grid("...\n##.\n#..").unwrap();
        let d = ClearPathSolver::default().distances(&grid);
        assert_eq!(render_distances(&grid, &d), "1 2 3\n# # 3\n# 4 4");

        let cut = parse_grid("..#\n###\n#..").unwrap();
        let d = ClearPathSolver::default().distances(&cut);
        assert_eq!(render_distances(&cut, &d), "1 2 #\n# # #\n# . .");
    }

    #[test]
    fn lists() {
        assert_eq!(parse_list("1, 3,, -2"), Ok(vec![1, 3, -2]));
        assert_eq!(parse_list(""), Ok(vec![]));
        assert!(parse_list("1,x").is_err());
    }
}
