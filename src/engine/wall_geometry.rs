// Wall boxes derived from maze topology.
//
// Two adjacent wall slabs meeting at a right angle leave a wall_width x
// wall_width notch at the shared corner. The stitching rules below grow one of
// the boxes to cover it, looking only at wall presence, never at other boxes.

use std::sync::Arc;

use glam::Vec3;
use log::debug;

use super::geometry::{WallBox, WallSet};
use super::maze::MazeGraph;
use crate::config::MazeLayout;

/// Box derivation for one maze under one cell layout.
pub struct WallGeometry<'a> {
    maze: &'a MazeGraph,
    layout: MazeLayout,
}

impl<'a> WallGeometry<'a> {
    pub fn new(maze: &'a MazeGraph, layout: MazeLayout) -> Self {
        Self { maze, layout }
    }

    /// Box for horizontal slot `(r, c)`.
    ///
    /// A present wall also covers the corner on its right. When nothing covers
    /// the corner on its left (first column, or no wall at `c - 1`), the box is
    /// extended left over that corner too.
    pub fn horizontal_box(&self, r: usize, c: usize) -> WallBox {
        let MazeLayout { wall_width, path_width, wall_height } = self.layout;
        let pitch = self.layout.pitch();
        let (ri, ci) = (r as i32, c as i32);

        let mut pos = Vec3::new(c as f32 * pitch + wall_width, 0.0, r as f32 * pitch);
        let mut size = Vec3::new(path_width, wall_height, wall_width);
        if self.maze.is_horizontal_wall(ri, ci) {
            size.x += wall_width;
        }
        if c == 0 || !self.maze.is_horizontal_wall(ri, ci - 1) {
            pos.x -= wall_width;
            size.x += wall_width;
        }
        WallBox::new(pos, size)
    }

    /// Box for vertical slot `(r, c)`.
    ///
    /// A present wall grows along Z over the corner below it when the run
    /// continues downward (another vertical wall at `r + 1`, or this is the
    /// last row) and neither horizontal wall meeting that corner exists.
    pub fn vertical_box(&self, r: usize, c: usize) -> WallBox {
        let MazeLayout { wall_width, path_width, wall_height } = self.layout;
        let pitch = self.layout.pitch();
        let (ri, ci) = (r as i32, c as i32);

        let pos = Vec3::new(c as f32 * pitch, 0.0, r as f32 * pitch + wall_width);
        let mut size = Vec3::new(wall_width, wall_height, path_width);

        let continues_down = r + 1 == self.maze.rows() || self.maze.is_vertical_wall(ri + 1, ci);
        let corner_uncovered = !self.maze.is_horizontal_wall(ri + 1, ci - 1)
            && !self.maze.is_horizontal_wall(ri + 1, ci);
        if self.maze.is_vertical_wall(ri, ci) && continues_down && corner_uncovered {
            size.z += wall_width;
        }
        WallBox::new(pos, size)
    }

    /// Boxes of every present wall: horizontal slots row-major, then vertical.
    pub fn boxes(&self) -> Vec<WallBox> {
        let (rows, cols) = (self.maze.rows(), self.maze.cols());
        let mut walls = Vec::new();
        for r in 0..=rows {
            for c in 0..cols {
                if self.maze.is_horizontal_wall(r as i32, c as i32) {
                    walls.push(self.horizontal_box(r, c));
                }
            }
        }
        for r in 0..rows {
            for c in 0..=cols {
                if self.maze.is_vertical_wall(r as i32, c as i32) {
                    walls.push(self.vertical_box(r, c));
                }
            }
        }
        walls
    }

    /// Shared, immutable snapshot of [`Self::boxes`] for agents.
    pub fn wall_set(&self) -> WallSet {
        let walls = self.boxes();
        debug!("built wall set with {} boxes", walls.len());
        Arc::from(walls)
    }
}
