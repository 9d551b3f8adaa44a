use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::vec2::Vec2;

/// Shape tag shared with the host renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ShapeKind {
    Circle = 0,
    Rectangle = 1,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

/// Shape geometry in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    /// Drawn only; it has no collision geometry.
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }
}

/// Rigid Body - moves as a single unit under constant acceleration
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// World position (circle center, rectangle anchor)
    pub pos: Vec2,
    /// Velocity (world units per second)
    pub velocity: Vec2,
    /// Constant acceleration, e.g. gravity
    pub acceleration: Vec2,
    /// Mass, used by pairwise collisions
    pub mass: f64,
    pub shape: Shape,
}

impl RigidBody {
    /// Create a circle at rest with unit mass
    pub fn circle(pos: Vec2, radius: f64) -> Self {
        Self {
            pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: 1.0,
            shape: Shape::Circle { radius },
        }
    }

    /// Create a rectangle at rest with unit mass
    pub fn rectangle(pos: Vec2, width: f64, height: f64) -> Self {
        Self {
            pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: 1.0,
            shape: Shape::Rectangle { width, height },
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Check construction-time invariants: positive mass and extents.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.mass > 0.0) {
            return Err(EngineError::InvalidBody(format!("mass must be > 0, got {}", self.mass)));
        }
        match self.shape {
            Shape::Circle { radius } if !(radius > 0.0) => Err(EngineError::InvalidBody(
                format!("radius must be > 0, got {}", radius),
            )),
            Shape::Rectangle { width, height } if !(width > 0.0 && height > 0.0) => {
                Err(EngineError::InvalidBody(format!(
                    "rectangle size must be > 0, got {}x{}",
                    width, height
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rectangle { .. } => None,
        }
    }

    /// Render extent: `(radius, radius)` for circles, `(width, height)` for rectangles
    pub fn size(&self) -> (f64, f64) {
        match self.shape {
            Shape::Circle { radius } => (radius, radius),
            Shape::Rectangle { width, height } => (width, height),
        }
    }

    /// Advance one explicit Euler step.
    ///
    /// Position moves with the velocity from before this call; velocity is
    /// updated afterwards.
    pub fn tick_position(&mut self, dt: f64) {
        self.pos = self.pos + self.velocity * dt;
        self.velocity = self.velocity + self.acceleration * dt;
    }

    /// Nearest boundary point to `p`.
    ///
    /// For a circle this lies on the ray from the center through `p`; when
    /// `p` is the center the result is NaN.
    pub fn closest_point(&self, p: Vec2) -> Result<Vec2, EngineError> {
        match self.shape {
            Shape::Circle { radius } => Ok(self.pos + (p - self.pos).unit() * radius),
            Shape::Rectangle { .. } => Err(self.unimplemented("closest_point")),
        }
    }

    /// Distance from `p` to `closest_point(p)`
    pub fn closest_distance(&self, p: Vec2) -> Result<f64, EngineError> {
        let closest = self.closest_point(p)?;
        Ok(p.distance(closest))
    }

    /// True when `p` is within one radius of the boundary.
    pub fn contains_point(&self, p: Vec2) -> Result<bool, EngineError> {
        match self.shape {
            Shape::Circle { radius } => Ok(self.closest_distance(p)? <= radius),
            Shape::Rectangle { .. } => Err(self.unimplemented("contains_point")),
        }
    }

    fn unimplemented(&self, capability: &'static str) -> EngineError {
        EngineError::UnimplementedCapability {
            shape: self.shape_kind(),
            capability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_without_acceleration_translates_by_velocity() {
        let mut body = RigidBody::circle(Vec2::new(1.0, 2.0), 0.5).with_velocity(Vec2::new(3.0, -1.0));
        body.tick_position(0.25);
        assert_eq!(body.pos, Vec2::new(1.75, 1.75));
        assert_eq!(body.velocity, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn tick_uses_velocity_from_before_the_update() {
        let mut body = RigidBody::circle(Vec2::zero(), 1.0)
            .with_velocity(Vec2::new(0.0, 2.0))
            .with_acceleration(Vec2::new(0.0, -10.0));
        body.tick_position(0.5);
        // Position sees the old velocity (2.0), not the updated one (-3.0).
        assert_eq!(body.pos, Vec2::new(0.0, 1.0));
        assert_eq!(body.velocity, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn circle_closest_point_lies_on_boundary() {
        let c = RigidBody::circle(Vec2::new(1.0, 1.0), 2.0);
        let p = c.closest_point(Vec2::new(4.0, 5.0)).unwrap();
        assert!((p.x - 2.2).abs() < 1e-12);
        assert!((p.y - 2.6).abs() < 1e-12);
        assert!((c.closest_distance(Vec2::new(4.0, 5.0)).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn circle_contains_point_at_boundary_distance() {
        let c = RigidBody::circle(Vec2::zero(), 1.0);
        assert!(c.contains_point(Vec2::new(2.0, 0.0)).unwrap());
        assert!(c.contains_point(Vec2::new(0.5, 0.0)).unwrap());
        assert!(!c.contains_point(Vec2::new(2.5, 0.0)).unwrap());
    }

    #[test]
    fn circle_center_query_is_nan() {
        let c = RigidBody::circle(Vec2::new(3.0, 3.0), 1.0);
        assert!(c.closest_point(Vec2::new(3.0, 3.0)).unwrap().x.is_nan());
        assert!(!c.contains_point(Vec2::new(3.0, 3.0)).unwrap());
    }

    #[test]
    fn rectangle_geometry_is_unimplemented() {
        let r = RigidBody::rectangle(Vec2::zero(), 1.0, 2.0);
        let err = r.contains_point(Vec2::new(0.5, 0.5)).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnimplementedCapability {
                shape: ShapeKind::Rectangle,
                capability: "contains_point",
            }
        );
        assert!(r.closest_point(Vec2::zero()).is_err());
        assert!(r.closest_distance(Vec2::zero()).is_err());
    }

    #[test]
    fn validate_rejects_non_positive_parameters() {
        assert!(RigidBody::circle(Vec2::zero(), 1.0).validate().is_ok());
        assert!(RigidBody::circle(Vec2::zero(), 0.0).validate().is_err());
        assert!(RigidBody::circle(Vec2::zero(), 1.0).with_mass(-1.0).validate().is_err());
        assert!(RigidBody::rectangle(Vec2::zero(), 1.0, 0.0).validate().is_err());
        assert!(RigidBody::circle(Vec2::zero(), f64::NAN).validate().is_err());
    }

    #[test]
    fn size_reports_render_extent() {
        assert_eq!(RigidBody::circle(Vec2::zero(), 0.3).size(), (0.3, 0.3));
        assert_eq!(RigidBody::rectangle(Vec2::zero(), 1.0, 2.0).size(), (1.0, 2.0));
    }
}
