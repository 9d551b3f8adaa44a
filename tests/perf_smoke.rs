use bounce_engine::{RigidBody, Vec2, WorldCore};

#[test]
fn perf_smoke_tick() {
    let mut world = WorldCore::new();
    world.set_viewport(1920.0, 1080.0);
    world.enable_perf_metrics(true);
    for i in 0..200 {
        let x = 0.5 + (i % 20) as f64 * 0.4;
        let y = 0.5 + (i / 20) as f64 * 0.4;
        world
            .add_body(
                RigidBody::circle(Vec2::new(x, y), 0.15)
                    .with_velocity(Vec2::new(((i * 7) % 5) as f64 - 2.0, ((i * 3) % 5) as f64 - 2.0))
                    .with_acceleration(Vec2::new(0.0, -9.81)),
            )
            .unwrap();
    }
    world.start();
    assert!(world.tick());
    let stats = world.get_frame_stats();
    assert_eq!(stats.body_count(), 200);
    assert!(stats.step_ms() >= 0.0);
}
