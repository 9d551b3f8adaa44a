use crate::rigid_body_system::{StepCounts, StepParams};

use super::{PerfTimer, WorldCore};

pub(super) fn start(world: &mut WorldCore, now_ms: f64) {
    if world.running {
        return;
    }
    world.start_ms = now_ms;
    world.elapsed_time = 0.0;
    world.delta_time = 0.0;
    world.frame = 0;
    world.last_counts = StepCounts::default();
    world.frame_stats.reset();
    world.running = true;
    engine_log!("simulation started with {} bodies", world.bodies.body_count());
}

pub(super) fn stop(world: &mut WorldCore) {
    if !world.running {
        return;
    }
    world.running = false;
    engine_log!(
        "simulation stopped after {} frames ({:.2}s)",
        world.frame,
        world.elapsed_time
    );
}

/// One frame. The first tick after `start` integrates over the whole time
/// since the origin; there is no first-frame clamp.
pub(super) fn tick(world: &mut WorldCore, now_ms: f64) -> bool {
    if !world.running {
        return false;
    }
    let step_start = if world.perf_enabled { Some(PerfTimer::start()) } else { None };

    let previous = world.elapsed_time;
    world.elapsed_time = (now_ms - world.start_ms) / 1000.0;
    world.delta_time = world.elapsed_time - previous;

    let params = StepParams {
        dt: world.delta_time,
        max_coord: world.max_coord(),
        wall_restitution: world.wall_restitution,
        collision_restitution: world.collision_restitution,
    };
    world.last_counts = world.bodies.update(params);
    world.frame += 1;

    let stats = &mut world.frame_stats;
    stats.frame = world.frame;
    stats.elapsed_time = world.elapsed_time;
    stats.delta_time = world.delta_time;
    stats.body_count = world.bodies.body_count() as u32;
    stats.collisions = world.last_counts.collisions;
    stats.wall_hits = world.last_counts.wall_hits;
    stats.step_ms = match step_start {
        Some(start) => start.elapsed_ms(),
        None => 0.0,
    };

    true
}
