// Player movement on the maze floor plane.
//
// Moves are all-or-nothing: a step whose destination comes within `margin` of
// any wall box is dropped entirely. There is no sliding along walls.

use glam::Vec3;
use log::trace;

use super::geometry::{WallSet, first_hit};

pub struct Navigator {
    position: Vec3,
    walls: WallSet,
    /// XZ clearance kept from every wall box.
    margin: f32,
    /// Cell pitch, for `cell()`.
    pitch: f32,
}

impl Navigator {
    pub fn new(start: Vec3, walls: WallSet, margin: f32, pitch: f32) -> Self {
        Self {
            position: start,
            walls,
            margin,
            pitch,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// True if `p` lies inside the margin-inflated footprint of any wall.
    pub fn collides(&self, p: Vec3) -> bool {
        first_hit(&self.walls, p, self.margin).is_some()
    }

    /// Translate by `(dx, 0, dz)`; `dy` is discarded.
    ///
    /// Returns false and leaves the position untouched if the destination
    /// collides with a wall.
    pub fn try_move(&mut self, dx: f32, _dy: f32, dz: f32) -> bool {
        let target = self.position + Vec3::new(dx, 0.0, dz);
        if self.collides(target) {
            trace!("navigator blocked at {:?} -> {:?}", self.position, target);
            return false;
        }
        self.position = target;
        true
    }

    /// Grid `(row, col)` under the navigator. Negative once it has left through
    /// the entrance.
    pub fn cell(&self) -> (i32, i32) {
        (
            (self.position.z / self.pitch).floor() as i32,
            (self.position.x / self.pitch).floor() as i32,
        )
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }
}
