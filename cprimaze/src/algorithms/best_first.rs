use std::{cmp::Ordering, collections::BinaryHeap};

use super::{MazeSolver, Path};
use crate::{array::Array2D, dims::Pos, error::MazeError, grid::Grid};

/// Greedy best-first search.
///
/// The frontier is ordered only by the Manhattan distance to the goal, the length of the path
/// walked so far is ignored. On a perfect maze there's exactly one route between two cells, so
/// the route found is also the shortest one. On mazes with loops it doesn't have to be.
#[derive(Debug)]
pub struct BestFirst;

impl MazeSolver for BestFirst {
    fn solve(&self, grid: &Grid, start: Pos, end: Pos) -> Result<Option<Path>, MazeError> {
        for pos in [start, end] {
            if !grid.in_bounds(pos) {
                return Err(MazeError::OutOfRange {
                    pos,
                    size: grid.size(),
                });
            }
        }

        let mut visited = Array2D::new(false, grid.row_count(), grid.col_count());
        let mut frontier = Frontier::default();
        frontier.push(0, start, Vec::new());

        while let Some(Entry { pos, path, .. }) = frontier.pop() {
            if pos == end {
                let mut path = path;
                path.push(end);
                log::trace!(
                    "Found route {} -> {} of {} cells, {} queued",
                    start,
                    end,
                    path.len(),
                    frontier.len()
                );
                return Ok(Some(path));
            }

            if visited[pos] {
                continue;
            }
            visited[pos] = true;

            for neighbor in Pos::ORTHOGONAL.map(|off| pos + off) {
                if !grid.is_passage(neighbor) || visited[neighbor] {
                    continue;
                }

                let mut next = path.clone();
                next.push(pos);
                frontier.push(neighbor.manhattan(end), neighbor, next);
            }
        }

        Ok(None)
    }
}

#[derive(Debug)]
struct Entry {
    priority: i32,
    seq: u64,
    pos: Pos,
    path: Path,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, `BinaryHeap` is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of entries, equal priorities come out in insertion order.
///
/// The tie-break only makes the search reproducible, nothing relies on it being FIFO.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    fn push(&mut self, priority: i32, pos: Pos, path: Path) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            pos,
            path,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
