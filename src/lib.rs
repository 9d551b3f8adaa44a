//! Bounce Engine - 2D rigid-body simulation in WASM
//!
//! Circles and rectangles move under constant acceleration, bounce off the
//! world walls and exchange momentum in pairwise circle collisions.
//!
//! Architecture:
//! - core/          - Logging macros, matrix utility
//! - domain/        - Errors and configuration
//! - systems/       - Bodies, collision and integration passes
//! - simulation/    - World driver and the JS facade

// Logging macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use crate::core::matrix;
pub use domain::config;
pub use domain::error;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Bounce engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{BodyConfig, EngineConfig};
pub use domain::error::EngineError;
pub use rigid_body::{RigidBody, Shape, ShapeKind, Vec2};
pub use simulation::{BodyView, FrameStats, World, WorldCore};

/// Shape tag of circles in the packed render buffer
#[wasm_bindgen]
pub fn shape_circle() -> u8 { ShapeKind::Circle as u8 }
/// Shape tag of rectangles in the packed render buffer
#[wasm_bindgen]
pub fn shape_rectangle() -> u8 { ShapeKind::Rectangle as u8 }
