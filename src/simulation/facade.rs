use wasm_bindgen::prelude::*;

use crate::rigid_body::Vec2;

use super::perf_stats::FrameStats;
use super::render_extract::RENDER_STRIDE;
use super::WorldCore;

fn to_js(err: crate::error::EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    /// Create a world from a JSON config (see `EngineConfig`)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    // === LIFECYCLE ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    /// Advance one frame using `Date.now()`. Call from requestAnimationFrame.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Advance one frame at an explicit timestamp (ms)
    pub fn tick_at(&mut self, now_ms: f64) -> bool {
        self.core.tick_at(now_ms)
    }

    // === BODIES ===

    /// Spawn a circle. Returns the body index.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        vx: f64,
        vy: f64,
        ax: f64,
        ay: f64,
        mass: f64,
    ) -> Result<u32, JsValue> {
        self.core
            .spawn_circle(Vec2::new(x, y), radius, Vec2::new(vx, vy), Vec2::new(ax, ay), mass)
            .map(|idx| idx as u32)
            .map_err(to_js)
    }

    /// Spawn a rectangle (drawn only, never collides). Returns the body index.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        vx: f64,
        vy: f64,
        ax: f64,
        ay: f64,
        mass: f64,
    ) -> Result<u32, JsValue> {
        self.core
            .spawn_rectangle(
                Vec2::new(x, y),
                (width, height),
                Vec2::new(vx, vy),
                Vec2::new(ax, ay),
                mass,
            )
            .map(|idx| idx as u32)
            .map_err(to_js)
    }

    /// Append bodies from a JSON array. Returns how many were added.
    pub fn load_bodies(&mut self, json: String) -> Result<u32, JsValue> {
        self.core
            .load_bodies_json(&json)
            .map(|n| n as u32)
            .map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    // === STATS ===

    #[wasm_bindgen(getter)]
    pub fn elapsed_time(&self) -> f64 { self.core.elapsed_time() }

    #[wasm_bindgen(getter)]
    pub fn delta_time(&self) -> f64 { self.core.delta_time() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn fps(&self) -> f64 {
        self.core.instantaneous_fps()
    }

    /// Enable or disable step timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.get_frame_stats()
    }

    // === VIEWPORT & SETTINGS ===

    /// Report the canvas size; only the ratio matters to the simulation
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.core.set_aspect_ratio(aspect_ratio);
    }

    #[wasm_bindgen(getter)]
    pub fn world_width(&self) -> f64 { self.core.world_width() }

    #[wasm_bindgen(getter)]
    pub fn world_height(&self) -> f64 { self.core.world_height() }

    #[wasm_bindgen(getter)]
    pub fn max_coord(&self) -> f64 { self.core.max_coord() }

    pub fn set_wall_restitution(&mut self, e: f64) {
        self.core.set_wall_restitution(e);
    }

    pub fn set_collision_restitution(&mut self, e: f64) {
        self.core.set_collision_restitution(e);
    }

    // === RENDER API ===

    /// Pack `[tag, x, y, w, h]` per body into the transfer buffer.
    /// Returns a pointer into wasm memory; valid until the next call.
    pub fn extract_render_buffer(&mut self) -> *const f64 {
        self.core.extract_render_buffer().as_ptr()
    }

    /// Number of f64 values in the render buffer
    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer_len()
    }

    /// Values per body in the render buffer
    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    pub fn render_json(&self) -> Result<String, JsValue> {
        self.core.render_json().map_err(to_js)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
