// Autonomous wandering agent: constant-speed flight that reflects off walls,
// floor and ceiling, with an occasional random nudge to its heading.
//
// Per tick:
//   1. (every K ticks) blend a random unit vector into the heading, renormalize,
//      and draw a new K from 1..=period_max
//   2. probe position + direction * speed
//      - outside [margin, wall_height - margin] on Y  -> flip direction.y
//      - else inside an inflated wall footprint       -> flip x or z, whichever
//                                                        axis the wall is thin on
//   3. advance along the (possibly flipped) direction; the agent never stalls

use glam::Vec3;
use rand::Rng;

use super::geometry::{WallSet, first_hit, random_unit};

/// Motion constants for a wanderer, copied out of the session config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderParams {
    pub speed: f32,
    pub margin: f32,
    pub wall_height: f32,
    pub blend: f32,
    pub first_period: u32,
    pub period_max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    None,
    /// Reflected off the floor or the ceiling.
    Vertical,
    /// Reflected off a wall slab that is thin along X.
    WallX,
    /// Reflected off a wall slab that is thin along Z.
    WallZ,
}

#[derive(Debug, Clone)]
pub struct WanderingAgent {
    position: Vec3,
    previous: Vec3,
    direction: Vec3,
    walls: WallSet,
    params: WanderParams,
    /// Ticks since the last course change.
    count: u32,
    /// Ticks between course changes; re-drawn after each change.
    period: u32,
}

impl WanderingAgent {
    /// New agent heading toward -Z.
    pub fn new(start: Vec3, walls: WallSet, params: WanderParams) -> Self {
        Self {
            position: start,
            previous: start,
            direction: Vec3::NEG_Z,
            walls,
            params,
            count: 0,
            period: params.first_period.max(1),
        }
    }

    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        self
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position before the last tick, for orienting the rendered model.
    #[inline]
    pub fn previous(&self) -> Vec3 {
        self.previous
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Advance one tick. Returns which reflection, if any, happened.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Bounce {
        self.count += 1;
        if self.count >= self.period {
            self.change_course(random_unit(rng));
            self.count = 0;
            self.period = rng.gen_range(1..=self.params.period_max.max(1));
        }
        self.step()
    }

    /// Mix `nudge` into the heading at the configured blend ratio.
    pub fn change_course(&mut self, nudge: Vec3) {
        let blended = self.direction + nudge * self.params.blend;
        self.direction = blended.try_normalize().unwrap_or(self.direction);
    }

    /// Reflect as needed, then move one step along the heading.
    pub fn step(&mut self) -> Bounce {
        let WanderParams { speed, margin, wall_height, .. } = self.params;
        self.previous = self.position;
        let probe = self.position + self.direction * speed;

        let bounce = if probe.y - margin < 0.0 || probe.y + margin > wall_height {
            self.direction.y = -self.direction.y;
            Bounce::Vertical
        } else {
            match first_hit(&self.walls, probe, margin) {
                Some(wall) if wall.is_thin_x() => {
                    self.direction.x = -self.direction.x;
                    Bounce::WallX
                }
                Some(_) => {
                    self.direction.z = -self.direction.z;
                    Bounce::WallZ
                }
                None => Bounce::None,
            }
        };

        self.position += self.direction * speed;
        bounce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::WallBox;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn params() -> WanderParams {
        WanderParams {
            speed: 0.05,
            margin: 0.1,
            wall_height: 1.0,
            blend: 0.2,
            first_period: 100,
            period_max: 150,
        }
    }

    fn no_walls() -> WallSet {
        Arc::from(Vec::<WallBox>::new())
    }

    #[test]
    fn test_floor_flips_only_y() {
        let dir = Vec3::new(0.3, -0.8, 0.5).normalize();
        let mut agent = WanderingAgent::new(Vec3::new(1.0, 0.12, 1.0), no_walls(), params()).with_direction(dir);
        let dir = agent.direction();
        assert_eq!(agent.step(), Bounce::Vertical);
        let d = agent.direction();
        assert_eq!(d.x, dir.x);
        assert_eq!(d.z, dir.z);
        assert_eq!(d.y, -dir.y);
        assert!(agent.position().y > 0.12);
        assert_eq!(agent.previous(), Vec3::new(1.0, 0.12, 1.0));
    }

    #[test]
    fn test_ceiling_flips_y() {
        let mut agent =
            WanderingAgent::new(Vec3::new(0.0, 0.88, 0.0), no_walls(), params()).with_direction(Vec3::Y);
        assert_eq!(agent.step(), Bounce::Vertical);
        assert_eq!(agent.direction(), Vec3::NEG_Y);
    }

    #[test]
    fn test_reflects_off_thin_side() {
        // slab thin along X at x in [1.0, 1.2]
        let slab: WallSet = Arc::from(vec![WallBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.2, 1.0, 2.0))]);
        let mut agent =
            WanderingAgent::new(Vec3::new(0.86, 0.5, 1.0), slab, params()).with_direction(Vec3::X);
        assert_eq!(agent.step(), Bounce::WallX);
        assert_eq!(agent.direction(), Vec3::NEG_X);
        assert!(agent.position().x < 0.86);

        // slab thin along Z at z in [1.0, 1.2]
        let slab: WallSet = Arc::from(vec![WallBox::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(2.0, 1.0, 0.2))]);
        let mut agent =
            WanderingAgent::new(Vec3::new(1.0, 0.5, 0.86), slab, params()).with_direction(Vec3::Z);
        assert_eq!(agent.step(), Bounce::WallZ);
        assert_eq!(agent.direction(), Vec3::NEG_Z);
    }

    #[test]
    fn test_free_flight_moves_by_speed() {
        let mut agent = WanderingAgent::new(Vec3::new(0.0, 0.5, 0.0), no_walls(), params());
        assert_eq!(agent.step(), Bounce::None);
        assert!((agent.position() - Vec3::new(0.0, 0.5, -0.05)).length() < 1e-6);
    }

    #[test]
    fn test_course_change_keeps_unit_heading() {
        let mut rng = StdRng::seed_from_u64(17);
        let p = WanderParams { first_period: 3, period_max: 4, speed: 0.0, ..params() };
        let mut agent = WanderingAgent::new(Vec3::new(0.0, 0.5, 0.0), no_walls(), p);
        let start = agent.direction();
        agent.tick(&mut rng);
        agent.tick(&mut rng);
        assert_eq!(agent.direction(), start);
        agent.tick(&mut rng);
        assert_ne!(agent.direction(), start);
        for _ in 0..50 {
            agent.tick(&mut rng);
            assert!((agent.direction().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_change_course_blend() {
        let mut agent = WanderingAgent::new(Vec3::ZERO, no_walls(), params());
        agent.change_course(Vec3::X);
        let expected = Vec3::new(0.2, 0.0, -1.0).normalize();
        assert!((agent.direction() - expected).length() < 1e-6);
    }
}
