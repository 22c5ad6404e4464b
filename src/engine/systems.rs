// ECS systems for stepping level agents.
// Systems take the world plus the session RNG explicitly; nothing here owns
// randomness or timing.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::trace;
use rand::Rng;

use super::components::*;
use super::wanderer::{Bounce, WanderingAgent};

/// Agent pose handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentPose {
    pub entity: Entity,
    pub position: Vec3,
    pub previous: Vec3,
}

/// Spawn one wanderer entity with its transform seeded from the agent.
pub fn spawn_wanderer(world: &mut World, agent: WanderingAgent) -> Entity {
    let transform = Transform::from_position(agent.position());
    world
        .spawn((transform, Wanderer(agent), BounceCount::default()))
        .id()
}

/// Advance every wanderer one tick and mirror its pose into `Transform`.
/// Returns how many agents bounced this tick.
pub fn wander_system<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> usize {
    let mut bounced = 0;
    let mut query = world.query::<(Entity, &mut Wanderer, &mut Transform, &mut BounceCount)>();
    for (entity, mut wanderer, mut transform, mut count) in query.iter_mut(world) {
        let bounce = wanderer.0.tick(rng);
        transform.position = wanderer.0.position();
        transform.previous = wanderer.0.previous();
        if bounce != Bounce::None {
            count.0 += 1;
            bounced += 1;
            trace!("{entity:?} bounced {bounce:?} at {:?}", transform.position);
        }
    }
    bounced
}

/// Current pose of every agent that has a transform.
pub fn agent_poses(world: &mut World) -> Vec<AgentPose> {
    let mut query = world.query::<(Entity, &Transform)>();
    query
        .iter(world)
        .map(|(entity, t)| AgentPose {
            entity,
            position: t.position,
            previous: t.previous,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::{WallBox, WallSet};
    use crate::engine::wanderer::WanderParams;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn agent(start: Vec3) -> WanderingAgent {
        let walls: WallSet = Arc::from(Vec::<WallBox>::new());
        let params = WanderParams {
            speed: 0.01,
            margin: 0.1,
            wall_height: 1.0,
            blend: 0.2,
            first_period: 100,
            period_max: 150,
        };
        WanderingAgent::new(start, walls, params)
    }

    #[test]
    fn test_system_syncs_transforms() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);
        let a = spawn_wanderer(&mut world, agent(Vec3::new(0.0, 0.5, 0.0)));
        let b = spawn_wanderer(&mut world, agent(Vec3::new(2.0, 0.5, 2.0)));

        assert_eq!(wander_system(&mut world, &mut rng), 0);
        let poses = agent_poses(&mut world);
        assert_eq!(poses.len(), 2);
        for pose in poses {
            let expected = if pose.entity == a {
                Vec3::new(0.0, 0.5, -0.01)
            } else {
                assert_eq!(pose.entity, b);
                Vec3::new(2.0, 0.5, 1.99)
            };
            assert!((pose.position - expected).length() < 1e-6);
            assert!((pose.previous.z - (expected.z + 0.01)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bounces_are_counted() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(2);
        let low = agent(Vec3::new(0.0, 0.1, 0.0)).with_direction(Vec3::NEG_Y);
        let e = spawn_wanderer(&mut world, low);
        assert_eq!(wander_system(&mut world, &mut rng), 1);
        assert_eq!(world.get::<BounceCount>(e), Some(&BounceCount(1)));
    }
}
