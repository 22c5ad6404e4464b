// Session parameters: grid size, wall/path dimensions, agent speeds and margins.
// Defaults match the tuning the game ships with.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Thickness of a wall slab, world units.
    pub wall_width: f32,
    /// Width of the walkable corridor between two walls.
    pub path_width: f32,
    pub wall_height: f32,
    /// Navigator (camera) height above the floor.
    pub eye_height: f32,
    /// Wanderers spawn this far below eye height.
    pub wanderer_height_offset: f32,

    /// Navigator displacement per tick while a heading is held.
    pub step_length: f32,
    /// XZ clearance kept between the navigator and any wall.
    pub navigator_margin: f32,

    /// Clearance for wanderers on all three axes.
    pub wanderer_margin: f32,
    /// Wanderer displacement per tick.
    pub wanderer_speed: f32,
    /// Weight of the random vector mixed in on a course change.
    pub wander_blend: f32,
    /// Ticks before the first course change.
    pub wander_first_period: u32,
    /// Later periods are drawn from `1..=wander_period_max`.
    pub wander_period_max: u32,
    pub wanderer_count: usize,

    pub initial_rows: usize,
    pub initial_cols: usize,
    /// Each level advance grows rows and cols by `growth_min..=growth_max`.
    pub growth_min: usize,
    pub growth_max: usize,

    /// Fixed seed for reproducible sessions; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_width: 0.2,
            path_width: 0.5,
            wall_height: 1.0,
            eye_height: 0.7,
            wanderer_height_offset: 0.15,
            step_length: 0.01,
            navigator_margin: 0.1,
            wanderer_margin: 0.1,
            wanderer_speed: 0.001,
            wander_blend: 0.2,
            wander_first_period: 100,
            wander_period_max: 150,
            wanderer_count: 1,
            initial_rows: 4,
            initial_cols: 4,
            growth_min: 1,
            growth_max: 2,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: MazeConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject parameter sets that would make the maze impassable or degenerate.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(MazeError::InvalidConfig {
                reason: reason.to_string(),
            })
        };

        if !(self.wall_width > 0.0 && self.path_width > 0.0 && self.wall_height > 0.0) {
            return invalid("wall_width, path_width and wall_height must be positive");
        }
        if self.navigator_margin < 0.0 || self.wanderer_margin < 0.0 {
            return invalid("margins must not be negative");
        }
        if 2.0 * self.navigator_margin >= self.path_width {
            return invalid("navigator_margin closes the corridor");
        }
        if 2.0 * self.wanderer_margin >= self.wall_height {
            return invalid("wanderer_margin leaves no vertical room");
        }
        let spawn = self.eye_height - self.wanderer_height_offset;
        if spawn - self.wanderer_margin < 0.0 || spawn + self.wanderer_margin > self.wall_height {
            return invalid("wanderers would spawn outside the floor/ceiling band");
        }
        if self.wander_first_period == 0 || self.wander_period_max == 0 {
            return invalid("wander periods must be at least one tick");
        }
        if self.growth_min > self.growth_max {
            return invalid("growth_min exceeds growth_max");
        }
        if self.initial_rows == 0 || self.initial_cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.initial_rows,
                cols: self.initial_cols,
            });
        }
        Ok(())
    }

    pub fn layout(&self) -> MazeLayout {
        MazeLayout {
            wall_width: self.wall_width,
            path_width: self.path_width,
            wall_height: self.wall_height,
        }
    }
}

/// World-space dimensions of one grid cell. X runs along columns, Z along rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeLayout {
    pub wall_width: f32,
    pub path_width: f32,
    pub wall_height: f32,
}

impl MazeLayout {
    /// Distance between consecutive wall lines on either axis.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.wall_width + self.path_width
    }

    /// Centre of the walkable square of cell `(row, col)` at the given height.
    pub fn cell_center(&self, row: usize, col: usize, height: f32) -> Vec3 {
        let half = self.wall_width + 0.5 * self.path_width;
        Vec3::new(
            col as f32 * self.pitch() + half,
            height,
            row as f32 * self.pitch() + half,
        )
    }

    /// Far corner of a `rows x cols` maze, including the closing wall line.
    pub fn extent(&self, rows: usize, cols: usize) -> Vec3 {
        Vec3::new(
            cols as f32 * self.pitch() + self.wall_width,
            self.wall_height,
            rows as f32 * self.pitch() + self.wall_width,
        )
    }
}

impl Default for MazeLayout {
    fn default() -> Self {
        MazeConfig::default().layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MazeConfig::from_json_str(r#"{ "initial_rows": 7, "seed": 42 }"#).unwrap();
        assert_eq!(config.initial_rows, 7);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.initial_cols, MazeConfig::default().initial_cols);
        assert_eq!(config.path_width, 0.5);
    }

    #[test]
    fn test_rejects_margin_wider_than_corridor() {
        let err = MazeConfig::from_json_str(r#"{ "navigator_margin": 0.3 }"#).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = MazeConfig::from_json_str(r#"{ "initial_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, MazeError::InvalidDimensions { rows: 4, cols: 0 }));
    }

    #[test]
    fn test_malformed_json() {
        let err = MazeConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, MazeError::Config(_)));
    }

    #[test]
    fn test_cell_center_and_extent() {
        let layout = MazeLayout::default();
        let c = layout.cell_center(1, 2, 0.7);
        assert!((c.x - (2.0 * 0.7 + 0.45)).abs() < 1e-6);
        assert!((c.z - (0.7 + 0.45)).abs() < 1e-6);
        assert_eq!(c.y, 0.7);

        let e = layout.extent(3, 4);
        assert!((e.x - (4.0 * 0.7 + 0.2)).abs() < 1e-6);
        assert!((e.z - (3.0 * 0.7 + 0.2)).abs() < 1e-6);
    }
}
