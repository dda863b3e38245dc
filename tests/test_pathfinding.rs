mod common;

use common::{assert_valid_path, bfs_distance, parse_grid, seeded, MAZE_5, MAZE_7_FORK};
use maze_solver::generator::Generator;
use maze_solver::pathfinding::{path_to_string, shortest_path};
use maze_solver::{MazeError, Point};

#[test]
fn test_single_route_maze() {
    let grid = parse_grid(MAZE_5);
    let path = shortest_path(&grid, Point::new(1, 1), Point::new(3, 3)).unwrap();

    assert_eq!(
        path,
        vec![
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(3, 3),
        ]
    );
    assert_eq!(path_to_string(&path), "(1,1) -> (1,2) -> (1,3) -> (2,3) -> (3,3)");
}

#[test]
fn test_fork_maze_takes_the_long_way_round() {
    let grid = parse_grid(MAZE_7_FORK);
    let path = shortest_path(&grid, grid.entrance(), grid.exit()).unwrap();

    assert_eq!(path.len(), 13);
    assert!(!path.contains(&Point::new(2, 1)), "dead-end branch is not on the path");
    assert_valid_path(&grid, &path, grid.entrance(), grid.exit());
}

#[test]
fn test_ties_break_east_before_south() {
    // Open room: both (1,1)->(1,2)->(2,2) and (1,1)->(2,1)->(2,2) are shortest
    let grid = parse_grid(
        "\
#####
#...#
#...#
#...#
#####
",
    );
    let path = shortest_path(&grid, Point::new(1, 1), Point::new(2, 2)).unwrap();
    assert_eq!(path, vec![Point::new(1, 1), Point::new(1, 2), Point::new(2, 2)]);

    // First discoverer of (3,3) is (2,3), reached through the east-first row
    let path = shortest_path(&grid, Point::new(1, 1), Point::new(3, 3)).unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path[1], Point::new(1, 2));
}

#[test]
fn test_same_source_and_destination() {
    let grid = parse_grid(MAZE_5);
    let path = shortest_path(&grid, Point::new(1, 2), Point::new(1, 2)).unwrap();
    assert_eq!(path, vec![Point::new(1, 2)]);
}

#[test]
fn test_unreachable_destination() {
    let grid = parse_grid(
        "\
#####
#.#.#
#.#.#
#.#.#
#####
",
    );
    let from = Point::new(1, 1);
    let to = Point::new(3, 3);
    assert_eq!(
        shortest_path(&grid, from, to),
        Err(MazeError::NoPath { from, to })
    );
}

#[test]
fn test_wall_endpoint_has_no_path() {
    let grid = parse_grid(MAZE_5);
    assert!(shortest_path(&grid, Point::new(1, 1), Point::new(2, 2)).is_err());
}

#[test]
fn test_generated_mazes_match_bfs_and_are_deterministic() {
    let mut rng = seeded(11);
    let generator = Generator::default();

    for dimension in [5, 7, 9, 15, 21, 35, 61] {
        let (grid, _) = generator.generate(dimension, &mut rng, true).unwrap();
        let (src, dst) = (grid.entrance(), grid.exit());

        let path = shortest_path(&grid, src, dst).unwrap();
        assert_valid_path(&grid, &path, src, dst);
        assert_eq!(Some(path.len() - 1), bfs_distance(&grid, src, dst));

        let again = shortest_path(&grid, src, dst).unwrap();
        assert_eq!(path, again, "path changed between runs on {}x{}", dimension, dimension);
    }
}
