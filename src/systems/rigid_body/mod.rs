//! RigidBody - A solid body that moves as a unit
//!
//! Bodies carry their kinematic state in world units and a shape tag.
//! Only circles answer geometry queries; rectangles are drawn but never
//! collide.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{RigidBody, Shape, ShapeKind};
