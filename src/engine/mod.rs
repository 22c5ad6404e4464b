// Engine module - maze topology, wall geometry and the agents moving through it.
// Everything here is headless; rendering consumes `render_data` only.

pub mod components;
pub mod geometry;
pub mod marks;
pub mod maze;
pub mod navigator;
pub mod render_data;
pub mod systems;
pub mod wall_geometry;
pub mod wanderer;

// Re-export commonly used items
pub use components::*;
pub use geometry::{Point, WallBox, WallSet};
pub use marks::{MarkOutcome, MarkOverlay, Orientation};
pub use maze::MazeGraph;
pub use navigator::Navigator;
pub use render_data::{WallInstance, agent_model, mark_instances, wall_instances};
pub use systems::{AgentPose, agent_poses, spawn_wanderer, wander_system};
pub use wall_geometry::WallGeometry;
pub use wanderer::{Bounce, WanderParams, WanderingAgent};
