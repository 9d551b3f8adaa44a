//! RigidBodySystem - per-frame passes over the body collection
//!
//! Each update runs, in order:
//! - Pairwise circle collisions (first overlapping pair per body wins).
//! - Wall reflections against the world bounds.
//! - Explicit Euler integration of every body.
//!
//! There is no penetration correction and no broad phase.

mod collision;
mod system;
mod walls;

pub use collision::{circles_overlap, resolve_circle_collision, CircleImpulse};
pub use system::{RigidBodySystem, StepCounts, StepParams};
