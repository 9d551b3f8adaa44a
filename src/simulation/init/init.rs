use crate::domain::config::EngineConfig;
use crate::rigid_body_system::{RigidBodySystem, StepCounts};

use super::perf_stats::FrameStats;
use super::{Clock, WorldCore};

/// Build an idle world from the config's settings. Bodies are added by the
/// caller so each one is validated.
pub(super) fn create_world_core(config: &EngineConfig, clock: Box<dyn Clock>) -> WorldCore {
    WorldCore {
        bodies: RigidBodySystem::new(),
        clock,
        scale: config.scale,
        aspect_ratio: config.aspect_ratio,
        wall_restitution: config.wall_restitution,
        collision_restitution: config.collision_restitution,
        running: false,
        start_ms: 0.0,
        elapsed_time: 0.0,
        delta_time: 0.0,
        frame: 0,
        last_counts: StepCounts::default(),
        render_buffer: Vec::with_capacity(config.bodies.len() * super::RENDER_STRIDE),
        perf_enabled: false,
        frame_stats: FrameStats::default(),
    }
}
