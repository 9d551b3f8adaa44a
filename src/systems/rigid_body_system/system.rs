use crate::error::EngineError;
use crate::rigid_body::RigidBody;

use super::collision::resolve_pairs;
use super::walls::reflect_off_walls;

/// Owns every body in the simulation, in insertion order
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
}

/// Per-frame counters reported by `RigidBodySystem::update`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub collisions: u32,
    pub wall_hits: u32,
}

/// Global parameters for one update
#[derive(Clone, Copy, Debug)]
pub struct StepParams {
    /// Elapsed seconds since the previous frame
    pub dt: f64,
    /// Right and top wall coordinate
    pub max_coord: f64,
    pub wall_restitution: f64,
    pub collision_restitution: f64,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Append a body. It takes part from the next update on.
    ///
    /// Returns the body's index.
    pub fn add_body(&mut self, body: RigidBody) -> Result<usize, EngineError> {
        body.validate()?;
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    /// Main update: pairwise collisions, then walls, then integration.
    pub fn update(&mut self, params: StepParams) -> StepCounts {
        let collisions = resolve_pairs(&mut self.bodies, params.collision_restitution);

        let mut wall_hits = 0u32;
        for body in self.bodies.iter_mut() {
            wall_hits += reflect_off_walls(body, params.max_coord, params.wall_restitution);
        }

        for body in self.bodies.iter_mut() {
            body.tick_position(params.dt);
        }

        StepCounts { collisions, wall_hits }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
