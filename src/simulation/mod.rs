//! World - the simulation driver
//!
//! WorldCore owns the bodies and the frame clock and only orchestrates:
//! - collision and integration passes live in rigid_body_system/
//! - geometry lives in rigid_body/
//! - the JS-facing wrapper lives in facade.rs
//!
//! The driver is idle until `start()`. While running, every `tick()` reads
//! the clock, resolves pairwise collisions, reflects off walls and then
//! integrates each body by the time elapsed since the previous tick.

use crate::domain::config::EngineConfig;
use crate::error::EngineError;
use crate::rigid_body::{RigidBody, Vec2};
use crate::rigid_body_system::{RigidBodySystem, StepCounts};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::FrameStats;
pub use perf_timer::{Clock, SystemClock};
pub use render_extract::{BodyView, RENDER_STRIDE};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: RigidBodySystem,
    clock: Box<dyn Clock>,

    // Settings
    scale: f64,
    aspect_ratio: f64,
    wall_restitution: f64,
    collision_restitution: f64,

    // State
    running: bool,
    start_ms: f64,
    elapsed_time: f64,
    delta_time: f64,
    frame: u64,
    last_counts: StepCounts,

    // Render hand-off: RENDER_STRIDE f64 values per body
    render_buffer: Vec<f64>,

    // Perf metrics
    perf_enabled: bool,
    frame_stats: FrameStats,
}

impl WorldCore {
    /// Create an empty world with default settings and the system clock
    pub fn new() -> Self {
        init::create_world_core(&EngineConfig::default(), Box::new(SystemClock::new()))
    }

    /// Create a world from a config, including its initial bodies
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::with_clock(config, Box::new(SystemClock::new()))
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        let config = EngineConfig::from_json(json)?;
        Self::from_config(&config)
    }

    /// Create a world that reads time from `clock`
    pub fn with_clock(config: &EngineConfig, clock: Box<dyn Clock>) -> Result<Self, EngineError> {
        let mut world = init::create_world_core(config, clock);
        for body in config.bodies.iter() {
            world.add_body(body.to_body())?;
        }
        Ok(world)
    }

    // === LIFECYCLE ===

    /// idle -> running. Resets elapsed time and takes the time origin from
    /// the clock. No-op while already running.
    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        step::start(self, now);
    }

    /// Like `start`, with an explicit time origin in milliseconds
    pub fn start_at(&mut self, now_ms: f64) {
        step::start(self, now_ms);
    }

    /// running -> idle. Further ticks do nothing until restarted.
    pub fn stop(&mut self) {
        step::stop(self);
    }

    pub fn is_running(&self) -> bool { self.running }

    /// Advance one frame using the clock. Returns false while idle.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        step::tick(self, now)
    }

    /// Advance one frame at an explicit timestamp in milliseconds
    pub fn tick_at(&mut self, now_ms: f64) -> bool {
        step::tick(self, now_ms)
    }

    // === BODIES ===

    /// Append a body; it moves from the next tick on. Returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> Result<usize, EngineError> {
        commands::add_body(self, body)
    }

    pub fn spawn_circle(
        &mut self,
        pos: Vec2,
        radius: f64,
        velocity: Vec2,
        acceleration: Vec2,
        mass: f64,
    ) -> Result<usize, EngineError> {
        commands::spawn_circle(self, pos, radius, velocity, acceleration, mass)
    }

    pub fn spawn_rectangle(
        &mut self,
        pos: Vec2,
        size: (f64, f64),
        velocity: Vec2,
        acceleration: Vec2,
        mass: f64,
    ) -> Result<usize, EngineError> {
        commands::spawn_rectangle(self, pos, size, velocity, acceleration, mass)
    }

    /// Append every body of a JSON array. Returns how many were added.
    pub fn load_bodies_json(&mut self, json: &str) -> Result<usize, EngineError> {
        commands::load_bodies_json(self, json)
    }

    pub fn body_count(&self) -> usize { self.bodies.body_count() }

    pub fn bodies(&self) -> &[RigidBody] { self.bodies.bodies() }

    pub fn body(&self, index: usize) -> Option<&RigidBody> { self.bodies.body(index) }

    // === FRAME ACCESSORS ===

    /// Seconds since `start()`
    pub fn elapsed_time(&self) -> f64 { self.elapsed_time }

    /// Seconds between the last two ticks
    pub fn delta_time(&self) -> f64 { self.delta_time }

    /// `1 / delta_time`; infinite when no time passed
    pub fn instantaneous_fps(&self) -> f64 { 1.0 / self.delta_time }

    /// Ticks since `start()`
    pub fn frame(&self) -> u64 { self.frame }

    /// Collision and wall counters of the last tick
    pub fn last_counts(&self) -> StepCounts { self.last_counts }

    // === SETTINGS ===

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        settings::set_aspect_ratio(self, aspect_ratio);
    }

    /// Set the aspect ratio from viewport pixels
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        settings::set_viewport(self, width, height);
    }

    pub fn aspect_ratio(&self) -> f64 { self.aspect_ratio }

    pub fn scale(&self) -> f64 { self.scale }

    /// World height in world units
    pub fn world_height(&self) -> f64 { self.scale }

    /// World width in world units: `aspect_ratio * scale`
    pub fn world_width(&self) -> f64 { self.aspect_ratio * self.scale }

    /// Coordinate of the right and the top walls.
    ///
    /// Both use the horizontal extent, so the top wall moves with the
    /// aspect ratio while the floor stays at zero.
    pub fn max_coord(&self) -> f64 { self.world_width() }

    pub fn set_wall_restitution(&mut self, e: f64) {
        settings::set_wall_restitution(self, e);
    }

    pub fn set_collision_restitution(&mut self, e: f64) {
        settings::set_collision_restitution(self, e);
    }

    pub fn wall_restitution(&self) -> f64 { self.wall_restitution }

    pub fn collision_restitution(&self) -> f64 { self.collision_restitution }

    /// Enable or disable step timing (adds clock reads when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick snapshot
    pub fn get_frame_stats(&self) -> FrameStats {
        settings::get_frame_stats(self)
    }

    // === RENDER HAND-OFF ===

    /// Shape, position and size of every body in world units
    pub fn render_bodies(&self) -> Vec<BodyView> {
        render_extract::render_bodies(self)
    }

    /// Refresh the packed render buffer and return it
    pub fn extract_render_buffer(&mut self) -> &[f64] {
        render_extract::extract_render_buffer(self)
    }

    /// Pointer to the packed render buffer (for JS typed-array views)
    pub fn render_buffer_ptr(&self) -> *const f64 {
        self.render_buffer.as_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.render_buffer.len()
    }

    pub fn render_json(&self) -> Result<String, EngineError> {
        render_extract::render_json(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
