use serde::Serialize;

use crate::error::EngineError;
use crate::rigid_body::{ShapeKind, Vec2};

use super::WorldCore;

/// Values per body in the packed render buffer: `[tag, x, y, w, h]`
pub const RENDER_STRIDE: usize = 5;

/// What the host needs to draw one body, in world units
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub shape: ShapeKind,
    pub position: Vec2,
    /// `(radius, radius)` for circles, `(width, height)` for rectangles
    pub size: (f64, f64),
}

pub(super) fn render_bodies(world: &WorldCore) -> Vec<BodyView> {
    world
        .bodies
        .bodies()
        .iter()
        .map(|b| BodyView {
            shape: b.shape_kind(),
            position: b.pos,
            size: b.size(),
        })
        .collect()
}

/// Pack every body into the reusable transfer buffer.
pub(super) fn extract_render_buffer(world: &mut WorldCore) -> &[f64] {
    world.render_buffer.clear();
    world
        .render_buffer
        .reserve(world.bodies.body_count() * RENDER_STRIDE);

    for body in world.bodies.bodies() {
        let (w, h) = body.size();
        world.render_buffer.extend_from_slice(&[
            body.shape_kind() as u8 as f64,
            body.pos.x,
            body.pos.y,
            w,
            h,
        ]);
    }

    &world.render_buffer
}

pub(super) fn render_json(world: &WorldCore) -> Result<String, EngineError> {
    Ok(serde_json::to_string(&render_bodies(world))?)
}
