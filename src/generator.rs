use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MazeError, Result};
use crate::grid::{CellKind, Grid, Point};

/// Default cap on validation retries.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Carving offsets between lattice vertices
const CARVE_OFFSETS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Randomized iterative backtracking maze generator
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    pub max_attempts: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Generator {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Generator {
    pub fn new(max_attempts: u32) -> Self {
        Generator {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generate a `dimension x dimension` maze.
    ///
    /// With `validate` set, every attempt must connect entrance to exit;
    /// failing attempts are regenerated up to `max_attempts` times.
    /// Without it the first attempt is returned as-is.
    /// Returns the grid and the number of attempts used.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        dimension: usize,
        rng: &mut R,
        validate: bool,
    ) -> Result<(Grid, u32)> {
        let mut grid = Grid::new(dimension, dimension)?;

        for attempt in 1..=self.max_attempts {
            carve(&mut grid, rng)?;
            if !validate || is_solvable(&grid) {
                debug!("Carved {}x{} maze in {} attempt(s)", dimension, dimension, attempt);
                return Ok((grid, attempt));
            }
            warn!(
                "Maze attempt {} of {}x{} failed validation, regenerating",
                attempt, dimension, dimension
            );
        }

        Err(MazeError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Carve one maze into `grid` in place, starting from the entrance.
/// The grid is reset to walls first.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<()> {
    grid.fill_walls();

    let start = grid.entrance();
    grid.set(start, CellKind::Open)?;
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        let candidates = carve_candidates(grid, current);
        let Some(&chosen) = candidates.choose(rng) else {
            continue;
        };

        stack.push(current);
        let between = Point::new(
            (current.row + chosen.row) / 2,
            (current.col + chosen.col) / 2,
        );
        grid.set(between, CellKind::Open)?;
        grid.set(chosen, CellKind::Open)?;
        stack.push(chosen);
    }

    Ok(())
}

/// Walls two steps away that lie strictly inside the border
fn carve_candidates(grid: &Grid, from: Point) -> Vec<Point> {
    let inner_max = grid.dimension() - 2;
    CARVE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|p| {
            (1..=inner_max).contains(&p.row)
                && (1..=inner_max).contains(&p.col)
                && grid.kind(*p) == CellKind::Wall
        })
        .collect()
}

/// Depth-first reachability from the entrance to the exit over open cells
pub fn is_solvable(grid: &Grid) -> bool {
    let start = grid.entrance();
    let goal = grid.exit();
    if !grid.is_open(start) || !grid.is_open(goal) {
        return false;
    }

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut stack = vec![start];
    visited[start.row * grid.cols() + start.col] = true;

    while let Some(current) = stack.pop() {
        if current == goal {
            return true;
        }
        for next in grid.open_neighbors(current) {
            let idx = next.row * grid.cols() + next.col;
            if !visited[idx] {
                visited[idx] = true;
                stack.push(next);
            }
        }
    }

    false
}
