#![allow(dead_code)]

use maze_solver::{CellKind, Grid, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashSet, VecDeque};

/// 5x5 maze with a single route (1,1) -> (1,3) -> (3,3)
pub const MAZE_5: &str = "\
#####
#...#
###.#
#...#
#####
";

/// 7x7 maze where the entrance opens both east (on the path) and south (off it)
pub const MAZE_7_FORK: &str = "\
#######
#.....#
#.###.#
#.#...#
#.#.###
#.#...#
#######
";

/// Parse a text layout into a grid.
/// `#` or `■` is a wall, `.` or `□` is open; blank lines are skipped.
pub fn parse_grid(layout: &str) -> Grid {
    let lines: Vec<&str> = layout
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let rows = lines.len();
    let cols = lines[0].chars().count();
    let mut grid = Grid::new(rows, cols).expect("layout has valid dimensions");

    for (row, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "ragged row {}", row);
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch {
                '#' | '■' => CellKind::Wall,
                '.' | '□' => CellKind::Open,
                other => panic!("unexpected layout character {:?}", other),
            };
            grid.set(Point::new(row, col), kind).unwrap();
        }
    }

    grid
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Plain BFS distance used as an oracle for path lengths
pub fn bfs_distance(grid: &Grid, src: Point, dst: Point) -> Option<usize> {
    let mut seen = HashSet::from([src]);
    let mut queue = VecDeque::from([(src, 0usize)]);
    while let Some((p, d)) = queue.pop_front() {
        if p == dst {
            return Some(d);
        }
        for n in grid.open_neighbors(p) {
            if seen.insert(n) {
                queue.push_back((n, d + 1));
            }
        }
    }
    None
}

/// Assert `path` is a walk of 4-adjacent open cells from `src` to `dst`
pub fn assert_valid_path(grid: &Grid, path: &[Point], src: Point, dst: Point) {
    assert_eq!(path.first(), Some(&src), "path must start at {}", src);
    assert_eq!(path.last(), Some(&dst), "path must end at {}", dst);
    for p in path {
        assert!(grid.is_open(*p), "path crosses wall at {}", p);
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{} and {} are not adjacent", pair[0], pair[1]);
    }
}

pub fn assert_border_is_wall(grid: &Grid) {
    let last = grid.dimension() - 1;
    for i in 0..=last {
        for p in [
            Point::new(0, i),
            Point::new(last, i),
            Point::new(i, 0),
            Point::new(i, last),
        ] {
            assert_eq!(grid.kind(p), CellKind::Wall, "border cell {} is open", p);
        }
    }
}

/// Open cells are connected and form a tree (edges == nodes - 1)
pub fn assert_perfect_maze(grid: &Grid) {
    let mut nodes = 0usize;
    let mut edges = 0usize;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let p = Point::new(row, col);
            if !grid.is_open(p) {
                continue;
            }
            nodes += 1;
            // count east and south edges only, so each edge is seen once
            edges += grid
                .open_neighbors(p)
                .filter(|n| n.row > p.row || n.col > p.col)
                .count();
        }
    }
    assert_eq!(edges + 1, nodes, "open cells do not form a tree");

    let entrance = grid.entrance();
    let mut seen = HashSet::from([entrance]);
    let mut stack = vec![entrance];
    while let Some(p) = stack.pop() {
        for n in grid.open_neighbors(p) {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    assert_eq!(seen.len(), nodes, "open cells are not connected");
}
