//! Physics update system
//!
//! Advances the physics world and writes each body's pose back onto the
//! shape it drives. The step always happens before the sync, and the sync
//! before anything is drawn.

use crate::core::coordinates::CoordinateMapper;
use crate::core::entity::Scene;
use crate::physics::{PhysicsAccumulator, PhysicsWorld, StepPlan};
use tracing::{trace, warn};

/// Update the physics simulation for one rendered frame
///
/// `delta_time` is the wall-clock time since the previous frame. The
/// accumulator decides how many steps that buys; a zero delta runs none and
/// leaves every shape where it was.
pub fn physics_update_system(
    physics_world: &mut PhysicsWorld,
    scene: &mut Scene,
    mapper: &CoordinateMapper,
    accumulator: &mut PhysicsAccumulator,
    delta_time: f32,
) -> StepPlan {
    let plan = accumulator.accumulate(delta_time);
    trace!(delta_time, steps = plan.steps, step_dt = plan.step_dt, "Physics update");

    for _ in 0..plan.steps {
        physics_world.step(plan.step_dt);
    }

    sync_shapes(physics_world, scene, mapper);
    plan
}

/// Copy every body's position and angle onto its paired shape
pub fn sync_shapes(physics_world: &PhysicsWorld, scene: &mut Scene, mapper: &CoordinateMapper) {
    scene.for_each_pair_mut(|body, shape| match physics_world.body_pose(body.handle) {
        Some((position, angle)) => {
            shape.set_position(mapper.sim_to_display(position));
            shape.set_rotation(angle.to_degrees());
        }
        None => warn!(handle = ?body.handle, "Scene entity refers to a missing body"),
    });
}
