use crate::domain::config::BodyConfig;
use crate::error::EngineError;
use crate::rigid_body::{RigidBody, Vec2};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, body: RigidBody) -> Result<usize, EngineError> {
    world.bodies.add_body(body).map_err(|err| {
        engine_warn!("rejected body: {}", err);
        err
    })
}

pub(super) fn spawn_circle(
    world: &mut WorldCore,
    pos: Vec2,
    radius: f64,
    velocity: Vec2,
    acceleration: Vec2,
    mass: f64,
) -> Result<usize, EngineError> {
    let body = RigidBody::circle(pos, radius)
        .with_velocity(velocity)
        .with_acceleration(acceleration)
        .with_mass(mass);
    add_body(world, body)
}

pub(super) fn spawn_rectangle(
    world: &mut WorldCore,
    pos: Vec2,
    (width, height): (f64, f64),
    velocity: Vec2,
    acceleration: Vec2,
    mass: f64,
) -> Result<usize, EngineError> {
    let body = RigidBody::rectangle(pos, width, height)
        .with_velocity(velocity)
        .with_acceleration(acceleration)
        .with_mass(mass);
    add_body(world, body)
}

/// All-or-nothing: nothing is appended when any body is invalid.
pub(super) fn load_bodies_json(world: &mut WorldCore, json: &str) -> Result<usize, EngineError> {
    let bodies: Vec<RigidBody> = BodyConfig::list_from_json(json)?
        .iter()
        .map(BodyConfig::to_body)
        .collect();
    for body in bodies.iter() {
        body.validate()?;
    }

    let count = bodies.len();
    for body in bodies {
        add_body(world, body)?;
    }
    engine_log!("loaded {} bodies ({} total)", count, world.bodies.body_count());
    Ok(count)
}
