// ECS components for the agents living inside one maze level.

use bevy_ecs::prelude::*;
use glam::Vec3;

use super::wanderer::WanderingAgent;

/// Where an agent is now and where it was one tick ago.
/// The renderer orients models along `previous -> position`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub previous: Vec3,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            previous: position,
        }
    }
}

/// Autonomous bouncing agent (the mosquito).
#[derive(Component, Debug, Clone)]
pub struct Wanderer(pub WanderingAgent);

/// Number of wall or floor reflections an agent has made, for diagnostics.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceCount(pub u32);
