// Per-instance data handed to the external renderer.
//
// Every wall and mark is drawn as one unit cube scaled to its box and
// translated to the box centre, so the renderer only needs a model matrix.

use glam::{Mat4, Quat, Vec3};

use super::geometry::WallBox;
use super::marks::{MarkOverlay, Orientation};
use super::wall_geometry::WallGeometry;

/// GPU-ready instance record: a column-major model matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WallInstance {
    pub model: [[f32; 4]; 4],
}

impl WallInstance {
    /// Unit cube centred at the origin -> `wall`.
    pub fn from_box(wall: &WallBox) -> Self {
        let model = Mat4::from_scale_rotation_translation(wall.size(), Quat::IDENTITY, wall.center());
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Instances for every present wall, horizontal slots first.
pub fn wall_instances(walls: &[WallBox]) -> Vec<WallInstance> {
    walls.iter().map(WallInstance::from_box).collect()
}

/// Instances for every marked slot, sized like the wall it proposes.
pub fn mark_instances(geometry: &WallGeometry<'_>, marks: &MarkOverlay) -> Vec<WallInstance> {
    marks
        .marked()
        .map(|(orientation, r, c)| {
            let wall = match orientation {
                Orientation::Horizontal => geometry.horizontal_box(r, c),
                Orientation::Vertical => geometry.vertical_box(r, c),
            };
            WallInstance::from_box(&wall)
        })
        .collect()
}

/// Model matrix for an agent flying from `previous` to `current`.
///
/// The model's local -Z points along the motion. A stationary agent keeps the
/// identity orientation.
pub fn agent_model(previous: Vec3, current: Vec3, scale: f32) -> Mat4 {
    let heading = current - previous;
    let rotation = match heading.try_normalize() {
        Some(forward) if forward.cross(Vec3::Y).length_squared() > 1e-8 => {
            Mat4::look_to_rh(current, forward, Vec3::Y).inverse()
        }
        // straight up or down: any horizontal up vector works
        Some(forward) => Mat4::look_to_rh(current, forward, Vec3::Z).inverse(),
        None => Mat4::from_translation(current),
    };
    rotation * Mat4::from_scale(Vec3::splat(scale))
}
