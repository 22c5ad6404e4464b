// Player-placed build marks on open wall slots.
//
// A mark proposes a wall. It is only allowed where the new wall would hang off
// two existing walls, and it never changes the maze topology itself.

use log::trace;

use super::maze::MazeGraph;

/// Which wall grid a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Result of a mark toggle, so callers can pick distinct feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The mark was flipped.
    Accepted,
    /// No pair of supporting walls next to the slot.
    NoSupport,
    /// A real wall already occupies the slot.
    WallPresent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkOverlay {
    rows: usize,
    cols: usize,
    /// (rows + 1) x cols, parallel to the horizontal wall grid.
    marked_horizontal: Vec<bool>,
    /// rows x (cols + 1), parallel to the vertical wall grid.
    marked_vertical: Vec<bool>,
}

impl MarkOverlay {
    /// Empty overlay sized for `maze`.
    pub fn new(maze: &MazeGraph) -> Self {
        let (rows, cols) = (maze.rows(), maze.cols());
        Self {
            rows,
            cols,
            marked_horizontal: vec![false; (rows + 1) * cols],
            marked_vertical: vec![false; rows * (cols + 1)],
        }
    }

    fn h_index(&self, r: i32, c: i32) -> Option<usize> {
        if r < 0 || c < 0 || r as usize > self.rows || c as usize >= self.cols {
            return None;
        }
        Some(r as usize * self.cols + c as usize)
    }

    fn v_index(&self, r: i32, c: i32) -> Option<usize> {
        if r < 0 || c < 0 || r as usize >= self.rows || c as usize > self.cols {
            return None;
        }
        Some(r as usize * (self.cols + 1) + c as usize)
    }

    pub fn is_horizontal_mark(&self, r: i32, c: i32) -> bool {
        self.h_index(r, c).is_some_and(|i| self.marked_horizontal[i])
    }

    pub fn is_vertical_mark(&self, r: i32, c: i32) -> bool {
        self.v_index(r, c).is_some_and(|i| self.marked_vertical[i])
    }

    pub fn is_mark(&self, orientation: Orientation, r: i32, c: i32) -> bool {
        match orientation {
            Orientation::Horizontal => self.is_horizontal_mark(r, c),
            Orientation::Vertical => self.is_vertical_mark(r, c),
        }
    }

    /// Toggle the mark on horizontal slot `(r, c)`.
    ///
    /// Supported when the vertical walls on both ends of the slot exist in the
    /// row below it (`r`) or in the row above it (`r - 1`).
    pub fn toggle_horizontal(&mut self, maze: &MazeGraph, r: i32, c: i32) -> MarkOutcome {
        if maze.is_horizontal_wall(r, c) {
            return MarkOutcome::WallPresent;
        }
        let below = maze.is_vertical_wall(r, c) && maze.is_vertical_wall(r, c + 1);
        let above = r >= 1 && maze.is_vertical_wall(r - 1, c) && maze.is_vertical_wall(r - 1, c + 1);
        match self.h_index(r, c) {
            Some(i) if below || above => {
                self.marked_horizontal[i] = !self.marked_horizontal[i];
                trace!("horizontal mark ({r}, {c}) -> {}", self.marked_horizontal[i]);
                MarkOutcome::Accepted
            }
            _ => MarkOutcome::NoSupport,
        }
    }

    /// Toggle the mark on vertical slot `(r, c)`.
    ///
    /// Mirror of [`Self::toggle_horizontal`]: supported by the horizontal walls
    /// on both ends of the slot in column `c` or in column `c - 1`.
    pub fn toggle_vertical(&mut self, maze: &MazeGraph, r: i32, c: i32) -> MarkOutcome {
        if maze.is_vertical_wall(r, c) {
            return MarkOutcome::WallPresent;
        }
        let right = maze.is_horizontal_wall(r, c) && maze.is_horizontal_wall(r + 1, c);
        let left = c >= 1 && maze.is_horizontal_wall(r, c - 1) && maze.is_horizontal_wall(r + 1, c - 1);
        match self.v_index(r, c) {
            Some(i) if right || left => {
                self.marked_vertical[i] = !self.marked_vertical[i];
                trace!("vertical mark ({r}, {c}) -> {}", self.marked_vertical[i]);
                MarkOutcome::Accepted
            }
            _ => MarkOutcome::NoSupport,
        }
    }

    pub fn toggle(&mut self, maze: &MazeGraph, orientation: Orientation, r: i32, c: i32) -> MarkOutcome {
        match orientation {
            Orientation::Horizontal => self.toggle_horizontal(maze, r, c),
            Orientation::Vertical => self.toggle_vertical(maze, r, c),
        }
    }

    /// Every marked slot, horizontal first, for overlay rendering.
    pub fn marked(&self) -> impl Iterator<Item = (Orientation, usize, usize)> + '_ {
        let h = self
            .marked_horizontal
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(i, _)| (Orientation::Horizontal, i / self.cols, i % self.cols));
        let v = self
            .marked_vertical
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(i, _)| (Orientation::Vertical, i / (self.cols + 1), i % (self.cols + 1)));
        h.chain(v)
    }
}
