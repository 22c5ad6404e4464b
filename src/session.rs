// Game session: the current level plus the single RNG everything draws from.
//
// A level bundles one generated maze with everything bound to it (wall set,
// marks, navigator, wanderers). Advancing builds a complete new level first
// and only then swaps it in, so nothing ever sees a half-built maze.

use bevy_ecs::world::World;
use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{MazeConfig, MazeLayout};
use crate::engine::{
    AgentPose, MarkOutcome, MarkOverlay, MazeGraph, Navigator, Orientation, WallGeometry, WallInstance,
    WallSet, WanderParams, WanderingAgent, agent_poses, mark_instances, spawn_wanderer, wall_instances,
    wander_system,
};
use crate::error::Result;

// ============================================================================
// FACING
// ============================================================================

/// Cardinal direction the player faces, used to pick the wall slot to mark.
/// North is -Z (toward the entrance row), East is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// Dominant horizontal axis of a look direction.
    pub fn from_direction(dir: Vec3) -> Self {
        if dir.x.abs() > dir.z.abs() {
            if dir.x > 0.0 { Facing::East } else { Facing::West }
        } else if dir.z > 0.0 {
            Facing::South
        } else {
            Facing::North
        }
    }

    /// Wall slot on this side of cell `(row, col)`.
    pub fn slot(self, row: i32, col: i32) -> (Orientation, i32, i32) {
        match self {
            Facing::North => (Orientation::Horizontal, row, col),
            Facing::South => (Orientation::Horizontal, row + 1, col),
            Facing::West => (Orientation::Vertical, row, col),
            Facing::East => (Orientation::Vertical, row, col + 1),
        }
    }
}

// ============================================================================
// LEVEL
// ============================================================================

pub struct Level {
    number: u32,
    maze: MazeGraph,
    layout: MazeLayout,
    walls: WallSet,
    marks: MarkOverlay,
    navigator: Navigator,
    agents: World,
}

impl Level {
    fn build(number: u32, rows: usize, cols: usize, config: &MazeConfig, rng: &mut StdRng) -> Result<Self> {
        let maze = MazeGraph::generate(rows, cols, rng)?;
        let layout = config.layout();
        let walls = WallGeometry::new(&maze, layout).wall_set();
        let marks = MarkOverlay::new(&maze);

        let (r, c) = maze.random_cell(rng);
        let start = layout.cell_center(r, c, config.eye_height);
        let navigator = Navigator::new(start, walls.clone(), config.navigator_margin, layout.pitch());

        let params = WanderParams {
            speed: config.wanderer_speed,
            margin: config.wanderer_margin,
            wall_height: config.wall_height,
            blend: config.wander_blend,
            first_period: config.wander_first_period,
            period_max: config.wander_period_max,
        };
        let mut agents = World::new();
        for _ in 0..config.wanderer_count {
            let (r, c) = maze.random_cell(rng);
            let spawn = layout.cell_center(r, c, config.eye_height - config.wanderer_height_offset);
            spawn_wanderer(&mut agents, WanderingAgent::new(spawn, walls.clone(), params));
        }

        info!(
            "level {number}: {rows}x{cols} maze, {} wall boxes, navigator at cell ({r}, {c})",
            walls.len()
        );
        Ok(Self {
            number,
            maze,
            layout,
            walls,
            marks,
            navigator,
            agents,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    pub fn layout(&self) -> MazeLayout {
        self.layout
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn marks(&self) -> &MarkOverlay {
        &self.marks
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn geometry(&self) -> WallGeometry<'_> {
        WallGeometry::new(&self.maze, self.layout)
    }

    /// Floor and ceiling extent of this level's maze.
    pub fn extent(&self) -> Vec3 {
        self.layout.extent(self.maze.rows(), self.maze.cols())
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Outcome of one simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// `Some(false)` when a requested step hit a wall, `None` when no step was requested.
    pub moved: Option<bool>,
    /// The navigator has left the maze through the entrance.
    pub escaped: bool,
    /// Wanderers that reflected this tick.
    pub bounced: usize,
}

pub struct Session {
    config: MazeConfig,
    rng: StdRng,
    level: Level,
}

impl Session {
    pub fn new(config: MazeConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let level = Level::build(1, config.initial_rows, config.initial_cols, &config, &mut rng)?;
        Ok(Self { config, rng, level })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Step wanderers, then the navigator along `heading` (scaled by the step length).
    pub fn tick(&mut self, heading: Option<Vec3>) -> TickReport {
        let bounced = wander_system(&mut self.level.agents, &mut self.rng);
        let moved = heading.map(|dir| {
            let step = dir * self.config.step_length;
            self.level.navigator.try_move(step.x, step.y, step.z)
        });
        let escaped = self.level.navigator.position().z < 0.0;
        TickReport { moved, escaped, bounced }
    }

    /// Replace the level with a bigger freshly generated one.
    pub fn advance_level(&mut self) -> Result<()> {
        let (min, max) = (self.config.growth_min, self.config.growth_max);
        let rows = self.level.maze.rows() + self.rng.gen_range(min..=max);
        let cols = self.level.maze.cols() + self.rng.gen_range(min..=max);
        let next = Level::build(self.level.number + 1, rows, cols, &self.config, &mut self.rng)?;
        self.level = next;
        Ok(())
    }

    pub fn toggle_mark(&mut self, orientation: Orientation, row: i32, col: i32) -> MarkOutcome {
        let level = &mut self.level;
        let outcome = level.marks.toggle(&level.maze, orientation, row, col);
        if outcome != MarkOutcome::Accepted {
            debug!("mark {orientation:?} ({row}, {col}) rejected: {outcome:?}");
        }
        outcome
    }

    /// Toggle the mark on the wall slot the navigator is facing.
    pub fn toggle_facing_mark(&mut self, facing: Facing) -> MarkOutcome {
        let (row, col) = self.level.navigator.cell();
        let (orientation, r, c) = facing.slot(row, col);
        self.toggle_mark(orientation, r, c)
    }

    pub fn agent_poses(&mut self) -> Vec<AgentPose> {
        agent_poses(&mut self.level.agents)
    }

    pub fn wall_instances(&self) -> Vec<WallInstance> {
        wall_instances(&self.level.walls)
    }

    pub fn mark_instances(&self) -> Vec<WallInstance> {
        mark_instances(&self.level.geometry(), &self.level.marks)
    }
}
