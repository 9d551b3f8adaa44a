use wasm_bindgen::prelude::*;

/// Snapshot of the last tick, for the host's stats panel
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) elapsed_time: f64,
    pub(super) delta_time: f64,
    pub(super) body_count: u32,
    pub(super) collisions: u32,
    pub(super) wall_hits: u32,
    // Only measured while perf metrics are enabled
    pub(super) step_ms: f64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn elapsed_time(&self) -> f64 { self.elapsed_time }
    #[wasm_bindgen(getter)]
    pub fn delta_time(&self) -> f64 { self.delta_time }
    /// `1 / delta_time`; infinite when no time has passed
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 { 1.0 / self.delta_time }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
}
