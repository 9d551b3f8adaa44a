use crate::rigid_body::{RigidBody, Shape, Vec2};

/// Outcome of one circle-circle resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleImpulse {
    /// Unit vector from the first center towards the second
    pub line_of_centres: Vec2,
    pub first_velocity: Vec2,
    pub second_velocity: Vec2,
}

/// True when both bodies are circles and their center distance is below the
/// sum of the radii. Symmetric in `a` and `b`.
///
/// Touching circles (center distance exactly `ra + rb`) do not overlap.
/// Coincident centers overlap, so their resolution goes through the
/// zero-length `unit()` and comes back non-finite.
pub fn circles_overlap(a: &RigidBody, b: &RigidBody) -> bool {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            a.pos.distance(b.pos) < ra + rb
        }
        _ => false,
    }
}

/// Resolve a collision along the line of centres.
///
/// Only the normal component changes; the tangential component of each
/// velocity passes through untouched. Positions are not corrected.
pub fn resolve_circle_collision(b1: &RigidBody, b2: &RigidBody, restitution: f64) -> CircleImpulse {
    let e = restitution;
    let normal = (b2.pos - b1.pos).unit();
    let tangent = normal.perpendicular();

    let u1 = b1.velocity.dot(normal);
    let u2 = b2.velocity.dot(normal);
    let w1 = b1.velocity.dot(tangent);
    let w2 = b2.velocity.dot(tangent);

    // Both outputs carry body 1's momentum term.
    let carried = (b1.mass * u1) / (2.0 * b2.mass);
    let v1 = (u2 - e * u1) / 2.0 + carried;
    let v2 = (e * u1 + u2 * (1.0 - e)) / 2.0 + carried;

    CircleImpulse {
        line_of_centres: normal,
        first_velocity: normal * v1 + tangent * w1,
        second_velocity: normal * v2 + tangent * w2,
    }
}

/// Pairwise collision pass over all ordered pairs.
///
/// A body takes part in at most one resolution per frame: the first
/// overlapping pair in `(i, j)` enumeration order wins and later pairs that
/// share a body are skipped. Velocities are written after the scan.
///
/// Returns the number of pairs resolved.
pub(super) fn resolve_pairs(bodies: &mut [RigidBody], restitution: f64) -> u32 {
    let n = bodies.len();
    let mut handled = vec![false; n];
    let mut writes: Vec<(usize, Vec2)> = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if i == j || handled[i] || handled[j] {
                continue;
            }
            if !circles_overlap(&bodies[i], &bodies[j]) {
                continue;
            }

            let impulse = resolve_circle_collision(&bodies[i], &bodies[j], restitution);
            writes.push((i, impulse.first_velocity));
            writes.push((j, impulse.second_velocity));
            handled[i] = true;
            handled[j] = true;
        }
    }

    let resolved = (writes.len() / 2) as u32;
    for (idx, velocity) in writes {
        bodies[idx].velocity = velocity;
    }
    resolved
}
