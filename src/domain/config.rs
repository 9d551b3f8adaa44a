//! Engine configuration loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid config. Example:
//!
//! ```json
//! {
//!   "scale": 5.0,
//!   "wall_restitution": 1.0,
//!   "collision_restitution": 1.0,
//!   "aspect_ratio": 1.7777,
//!   "bodies": [
//!     { "shape": "circle", "position": [1.0, 4.0], "radius": 0.2,
//!       "velocity": [2.0, 0.0], "acceleration": [0.0, -9.81] },
//!     { "shape": "circle", "position": [3.0, 4.0], "radius": 0.3, "mass": 2.0 },
//!     { "shape": "rectangle", "position": [0.5, 0.5], "size": [0.4, 0.2] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rigid_body::{RigidBody, Vec2};

/// World height in world units; the width follows the aspect ratio.
pub const DEFAULT_SCALE: f64 = 5.0;
pub const DEFAULT_RESTITUTION: f64 = 1.0;
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_restitution() -> f64 {
    DEFAULT_RESTITUTION
}

fn default_aspect_ratio() -> f64 {
    DEFAULT_ASPECT_RATIO
}

fn default_mass() -> f64 {
    1.0
}

/// Global engine settings plus the initial bodies
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "default_scale")]
    pub scale: f64, // world height in world units
    #[serde(default = "default_restitution")]
    pub wall_restitution: f64, // E_WALL
    #[serde(default = "default_restitution")]
    pub collision_restitution: f64, // E_COLLISIONS
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64, // viewport width / height until the host reports one
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            wall_restitution: DEFAULT_RESTITUTION,
            collision_restitution: DEFAULT_RESTITUTION,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            bodies: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        if !(config.scale > 0.0) {
            return Err(EngineError::Config(format!("scale must be > 0, got {}", config.scale)));
        }
        Ok(config)
    }
}

/// Initial state of a single body, tagged by `shape`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum BodyConfig {
    Circle {
        #[serde(default)]
        position: [f64; 2],
        radius: f64,
        #[serde(default)]
        velocity: [f64; 2],
        #[serde(default)]
        acceleration: [f64; 2],
        #[serde(default = "default_mass")]
        mass: f64,
    },
    Rectangle {
        #[serde(default)]
        position: [f64; 2],
        size: [f64; 2], // width, height
        #[serde(default)]
        velocity: [f64; 2],
        #[serde(default)]
        acceleration: [f64; 2],
        #[serde(default = "default_mass")]
        mass: f64,
    },
}

impl BodyConfig {
    /// Parse a JSON array of bodies
    pub fn list_from_json(json: &str) -> Result<Vec<BodyConfig>, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_body(&self) -> RigidBody {
        match *self {
            BodyConfig::Circle { position, radius, velocity, acceleration, mass } => {
                RigidBody::circle(position.into(), radius)
                    .with_velocity(Vec2::from(velocity))
                    .with_acceleration(Vec2::from(acceleration))
                    .with_mass(mass)
            }
            BodyConfig::Rectangle { position, size, velocity, acceleration, mass } => {
                RigidBody::rectangle(position.into(), size[0], size[1])
                    .with_velocity(Vec2::from(velocity))
                    .with_acceleration(Vec2::from(acceleration))
                    .with_mass(mass)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Shape;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = EngineConfig::from_json("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn bodies_default_kinematics_and_mass() {
        let cfg = EngineConfig::from_json(
            r#"{ "wall_restitution": 0.8,
                 "bodies": [ { "shape": "circle", "radius": 0.5 },
                             { "shape": "rectangle", "position": [1, 2], "size": [3, 4], "mass": 2 } ] }"#,
        )
        .unwrap();
        assert_eq!(cfg.wall_restitution, 0.8);
        assert_eq!(cfg.collision_restitution, 1.0);

        let circle = cfg.bodies[0].to_body();
        assert_eq!(circle.pos, Vec2::zero());
        assert_eq!(circle.velocity, Vec2::zero());
        assert_eq!(circle.mass, 1.0);
        assert_eq!(circle.shape, Shape::Circle { radius: 0.5 });

        let rect = cfg.bodies[1].to_body();
        assert_eq!(rect.pos, Vec2::new(1.0, 2.0));
        assert_eq!(rect.mass, 2.0);
        assert_eq!(rect.shape, Shape::Rectangle { width: 3.0, height: 4.0 });
    }

    #[test]
    fn unknown_shape_is_a_config_error() {
        let err = EngineConfig::from_json(r#"{ "bodies": [ { "shape": "triangle" } ] }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        assert!(EngineConfig::from_json(r#"{ "scale": 0 }"#).is_err());
    }
}
