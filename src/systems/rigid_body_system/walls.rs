use crate::rigid_body::{RigidBody, Vec2};

/// Reflect `body` off any world wall it touches.
///
/// Walls sit at `y = 0`, `y = max_coord`, `x = 0` and `x = max_coord`. The
/// top wall shares the horizontal extent, so it moves with the aspect ratio.
/// A wall touches when `contains_point` holds for the body's projection
/// onto it; shapes without collision geometry never touch. Only a velocity
/// component heading into the wall is reflected, so a body leaving a wall
/// is not flipped back on the next frame.
///
/// Returns the number of reflections applied.
pub(super) fn reflect_off_walls(body: &mut RigidBody, max_coord: f64, restitution: f64) -> u32 {
    let Vec2 { x, y } = body.pos;
    let touches = |body: &RigidBody, p: Vec2| matches!(body.contains_point(p), Ok(true));
    let mut hits = 0;

    // Bottom
    if touches(&*body, Vec2::new(x, 0.0)) && body.velocity.y < 0.0 {
        body.velocity.y = -restitution * body.velocity.y;
        hits += 1;
    }

    // Top
    if touches(&*body, Vec2::new(x, max_coord)) && body.velocity.y > 0.0 {
        body.velocity.y = -restitution * body.velocity.y;
        hits += 1;
    }

    // Left
    if touches(&*body, Vec2::new(0.0, y)) && body.velocity.x < 0.0 {
        body.velocity.x = -restitution * body.velocity.x;
        hits += 1;
    }

    // Right
    if touches(&*body, Vec2::new(max_coord, y)) && body.velocity.x > 0.0 {
        body.velocity.x = -restitution * body.velocity.x;
        hits += 1;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_flips_vertical_velocity_only() {
        let mut body = RigidBody::circle(Vec2::new(2.0, 0.1), 0.1).with_velocity(Vec2::new(0.3, -5.0));
        assert_eq!(reflect_off_walls(&mut body, 8.0, 1.0), 1);
        assert_eq!(body.velocity, Vec2::new(0.3, 5.0));
    }

    #[test]
    fn body_leaving_a_wall_is_not_flipped_again() {
        let mut body = RigidBody::circle(Vec2::new(2.0, 0.1), 0.1).with_velocity(Vec2::new(0.0, 5.0));
        assert_eq!(reflect_off_walls(&mut body, 8.0, 1.0), 0);
        assert_eq!(body.velocity, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn restitution_scales_reflected_component() {
        let mut body = RigidBody::circle(Vec2::new(0.2, 3.0), 0.25).with_velocity(Vec2::new(-4.0, 1.0));
        reflect_off_walls(&mut body, 8.0, 0.5);
        assert_eq!(body.velocity, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn top_and_right_walls_share_max_coord() {
        let mut body = RigidBody::circle(Vec2::new(7.9, 7.9), 0.2).with_velocity(Vec2::new(1.0, 1.0));
        assert_eq!(reflect_off_walls(&mut body, 8.0, 1.0), 2);
        assert_eq!(body.velocity, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn clear_of_walls_is_untouched() {
        let mut body = RigidBody::circle(Vec2::new(3.0, 2.5), 0.2).with_velocity(Vec2::new(-1.0, -1.0));
        assert_eq!(reflect_off_walls(&mut body, 8.0, 1.0), 0);
        assert_eq!(body.velocity, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn rectangles_pass_through_walls() {
        let mut body = RigidBody::rectangle(Vec2::new(0.0, 0.0), 1.0, 1.0).with_velocity(Vec2::new(-1.0, -1.0));
        assert_eq!(reflect_off_walls(&mut body, 8.0, 1.0), 0);
        assert_eq!(body.velocity, Vec2::new(-1.0, -1.0));
    }
}
