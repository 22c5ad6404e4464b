// Geometry primitives shared by maze construction, collision and rendering.
//
// Points, sizes and directions are all plain `Vec3`; the only addition here is
// the axis-aligned wall box and a random unit vector source.

use std::sync::Arc;

use glam::Vec3;
use rand::Rng;

/// 3D position, size or direction.
pub type Point = Vec3;

/// Read-only wall set shared by every agent of one generated maze.
pub type WallSet = Arc<[WallBox]>;

/// Uniformly distributed unit vector.
///
/// Rejection-samples the unit ball so directions are not biased toward the
/// cube corners, then normalizes.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

// ============================================================================
// WALL BOX
// ============================================================================

/// Axis-aligned render and collision volume of one wall segment.
///
/// `position` is the minimum corner; `size` is non-negative on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBox {
    position: Vec3,
    size: Vec3,
}

impl WallBox {
    pub fn new(position: Vec3, size: Vec3) -> Self {
        debug_assert!(size.cmpge(Vec3::ZERO).all(), "negative box size {size:?}");
        Self { position, size }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec3 {
        self.position + self.size * 0.5
    }

    /// Inflated AABB test on the XZ plane. Y is ignored; bounds are inclusive.
    pub fn contains_xz(&self, p: Vec3, margin: f32) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x - margin && p.x <= max.x + margin && p.z >= min.z - margin && p.z <= max.z + margin
    }

    /// True when the box is thinner along X than along Z (a vertical wall slab).
    #[inline]
    pub fn is_thin_x(&self) -> bool {
        self.size.x < self.size.z
    }
}

/// First box in `walls` whose margin-inflated XZ footprint contains `p`.
pub fn first_hit(walls: &[WallBox], p: Vec3, margin: f32) -> Option<&WallBox> {
    walls.iter().find(|b| b.contains_xz(p, margin))
}
