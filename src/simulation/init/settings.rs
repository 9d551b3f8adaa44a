use super::perf_stats::FrameStats;
use super::WorldCore;

pub(super) fn set_aspect_ratio(world: &mut WorldCore, aspect_ratio: f64) {
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        engine_warn!("aspect ratio {} makes the world bounds degenerate", aspect_ratio);
    }
    world.aspect_ratio = aspect_ratio;
}

pub(super) fn set_viewport(world: &mut WorldCore, width: f64, height: f64) {
    set_aspect_ratio(world, width / height);
}

pub(super) fn set_wall_restitution(world: &mut WorldCore, e: f64) {
    world.wall_restitution = e;
}

pub(super) fn set_collision_restitution(world: &mut WorldCore, e: f64) {
    world.collision_restitution = e;
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_frame_stats(world: &WorldCore) -> FrameStats {
    world.frame_stats.clone()
}
