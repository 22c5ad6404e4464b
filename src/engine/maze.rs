// Maze topology: random spanning tree over a rows x cols grid.
//
// Layer 1: DisjointSet: union-find forest, only alive during generation.
// Layer 2: MazeGraph: open/closed wall bitmaps and the wall queries every
//          other component builds on.
//
// Wall slots:
//   horizontal (r, c), r in 0..=rows, c in 0..cols: the wall on the -Z side of cell (r, c)
//   vertical   (r, c), r in 0..rows, c in 0..=cols: the wall on the -X side of cell (r, c)

use std::fmt;

use log::debug;
use rand::Rng;

use crate::error::{MazeError, Result};

// ============================================================================
// UNION-FIND
// ============================================================================

struct DisjointSet {
    father: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            father: (0..len).collect(),
        }
    }

    /// Root of `i`, compressing the walked path onto it.
    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.father[root] != root {
            root = self.father[root];
        }
        let mut cur = i;
        while self.father[cur] != root {
            let next = self.father[cur];
            self.father[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.father[ra] = rb;
        true
    }
}

// ============================================================================
// MAZE GRAPH
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    Down,
    Right,
}

/// Generated maze topology. `true` in an open buffer means passable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGraph {
    rows: usize,
    cols: usize,
    /// (rows + 1) x cols, row-major.
    open_horizontal: Vec<bool>,
    /// rows x (cols + 1), row-major.
    open_vertical: Vec<bool>,
}

impl MazeGraph {
    /// Build a random spanning tree over the grid and open the entrance.
    ///
    /// Probes pick a random cell (never the bottom-right one) and a random
    /// down/right neighbour; a probe that joins two components opens the slot
    /// between them. Generation ends when a single component remains, so the
    /// result has exactly `rows * cols - 1` internal openings.
    pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let mut maze = Self {
            rows,
            cols,
            open_horizontal: vec![false; (rows + 1) * cols],
            open_vertical: vec![false; rows * (cols + 1)],
        };

        let mut forest = DisjointSet::new(rows * cols);
        let mut components = rows * cols;
        let mut probes: u64 = 0;
        let terminal = (rows - 1, cols - 1);

        while components > 1 {
            probes += 1;
            let r = rng.gen_range(0..rows);
            let c = rng.gen_range(0..cols);
            if (r, c) == terminal {
                continue;
            }
            let probe = if rng.gen_bool(0.5) { Probe::Down } else { Probe::Right };
            let (p, q) = match probe {
                Probe::Down => (r + 1, c),
                Probe::Right => (r, c + 1),
            };
            if p >= rows || q >= cols {
                continue;
            }
            if forest.union(r * cols + c, p * cols + q) {
                components -= 1;
                match probe {
                    Probe::Down => {
                        let i = maze.h_index(r + 1, c);
                        maze.open_horizontal[i] = true;
                    }
                    Probe::Right => {
                        let i = maze.v_index(r, c + 1);
                        maze.open_vertical[i] = true;
                    }
                }
            }
        }

        maze.force_entrance();
        debug!("generated {}x{} maze after {} probes", rows, cols, probes);
        Ok(maze)
    }

    /// Maze with explicit slot states, `true` = open. Buffers are row-major:
    /// `(rows + 1) * cols` horizontal slots, `rows * (cols + 1)` vertical slots.
    /// No spanning-tree check is made; the entrance is not forced.
    pub fn from_open_slots(
        rows: usize,
        cols: usize,
        open_horizontal: Vec<bool>,
        open_vertical: Vec<bool>,
    ) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        for (expected, actual) in [
            ((rows + 1) * cols, open_horizontal.len()),
            (rows * (cols + 1), open_vertical.len()),
        ] {
            if expected != actual {
                return Err(MazeError::SlotCount { rows, cols, expected, actual });
            }
        }
        Ok(Self {
            rows,
            cols,
            open_horizontal,
            open_vertical,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Horizontal slot that is always open: top boundary, middle column.
    pub fn entrance(&self) -> (usize, usize) {
        (0, self.cols / 2)
    }

    fn force_entrance(&mut self) {
        let (r, c) = self.entrance();
        let i = self.h_index(r, c);
        self.open_horizontal[i] = true;
    }

    #[inline]
    fn h_index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    #[inline]
    fn v_index(&self, r: usize, c: usize) -> usize {
        r * (self.cols + 1) + c
    }

    /// Wall present on horizontal slot `(r, c)`.
    ///
    /// Coordinates outside `0..=rows` x `0..cols` report no wall, so callers
    /// can probe one slot past the grid without special cases.
    pub fn is_horizontal_wall(&self, r: i32, c: i32) -> bool {
        if r < 0 || c < 0 || r as usize > self.rows || c as usize >= self.cols {
            return false;
        }
        !self.open_horizontal[self.h_index(r as usize, c as usize)]
    }

    /// Wall present on vertical slot `(r, c)`; out of range reports no wall.
    pub fn is_vertical_wall(&self, r: i32, c: i32) -> bool {
        if r < 0 || c < 0 || r as usize >= self.rows || c as usize > self.cols {
            return false;
        }
        !self.open_vertical[self.v_index(r as usize, c as usize)]
    }

    /// Cells reachable from `(row, col)` in one step through an open slot.
    /// The entrance leads outside the grid and is not reported.
    pub fn open_neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (r, c) = (row as i32, col as i32);
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        [
            (r - 1, c, !self.is_horizontal_wall(r, c)),
            (r + 1, c, !self.is_horizontal_wall(r + 1, c)),
            (r, c - 1, !self.is_vertical_wall(r, c)),
            (r, c + 1, !self.is_vertical_wall(r, c + 1)),
        ]
        .into_iter()
        .filter(move |&(nr, nc, open)| open && nr >= 0 && nc >= 0 && nr < rows && nc < cols)
        .map(|(nr, nc, _)| (nr as usize, nc as usize))
    }

    /// Uniformly random cell, used for spawn points.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, usize) {
        (rng.gen_range(0..self.rows), rng.gen_range(0..self.cols))
    }
}

/// ASCII dump: `-` horizontal walls, `|` vertical walls.
impl fmt::Display for MazeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        for r in 0..=rows {
            for c in 0..cols {
                let ch = if self.is_horizontal_wall(r, c) { '-' } else { ' ' };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
            if r == rows {
                break;
            }
            for c in 0..=cols {
                let ch = if self.is_vertical_wall(r, c) { '|' } else { ' ' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
