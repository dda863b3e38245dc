use crate::error::{MazeError, Result};
use crate::grid::{Grid, Point};
use log::trace;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A frontier entry: a point with its tentative distance.
/// `seq` records insertion order so equal distances pop first-in first-out.
#[derive(Debug, Clone, Copy)]
struct FrontierNode {
    position: Point,
    distance: usize,
    seq: u64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Shortest path over open cells with unit-weight 4-adjacency.
///
/// Neighbors are explored East, South, West, North and the first
/// predecessor to reach a cell keeps it, so the result is deterministic
/// for a given grid. The returned path includes both endpoints.
pub fn shortest_path(grid: &Grid, src: Point, dst: Point) -> Result<Vec<Point>> {
    let no_path = MazeError::NoPath { from: src, to: dst };
    if !grid.is_open(src) || !grid.is_open(dst) {
        return Err(no_path);
    }

    let mut queue: BinaryHeap<FrontierNode> = BinaryHeap::new();
    // Missing entries are treated as infinitely far away
    let mut distances: HashMap<Point, usize> = HashMap::new();
    let mut previous: HashMap<Point, Point> = HashMap::new();
    let mut seq = 0u64;

    distances.insert(src, 0);
    queue.push(FrontierNode {
        position: src,
        distance: 0,
        seq,
    });

    let mut expanded = 0usize;
    while let Some(node) = queue.pop() {
        if node.position == dst {
            break;
        }
        // Stale entry superseded by a shorter one
        if distances.get(&node.position).is_some_and(|&d| node.distance > d) {
            continue;
        }
        expanded += 1;

        for next in grid.open_neighbors(node.position) {
            let candidate = node.distance + 1;
            let improves = distances.get(&next).map_or(true, |&d| candidate < d);
            if improves {
                distances.insert(next, candidate);
                previous.insert(next, node.position);
                seq += 1;
                queue.push(FrontierNode {
                    position: next,
                    distance: candidate,
                    seq,
                });
            }
        }
    }

    if !distances.contains_key(&dst) {
        trace!("no path {} -> {} after {} expansions", src, dst, expanded);
        return Err(no_path);
    }

    let mut path = vec![dst];
    let mut current = dst;
    while let Some(&prev) = previous.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    trace!(
        "path {} -> {}: {} cells, {} expansions",
        src,
        dst,
        path.len(),
        expanded
    );
    Ok(path)
}

/// Format path for display
pub fn path_to_string(path: &[Point]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
