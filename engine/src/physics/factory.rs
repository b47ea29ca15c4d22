//! Box-shaped rigid body creation

use crate::core::coordinates::CoordinateMapper;
use crate::error::{EngineError, Result};
use crate::physics::world::{BodyKind, BodyMaterial, PhysicsWorld};
use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;
use tracing::debug;

/// Create a box body centered at `center` with full extents `size`, both in display units
///
/// The center is mapped into simulation space (Y up) so that syncing the body
/// back through [`CoordinateMapper::sim_to_display`] lands on `center` again.
pub fn create_box(
    world: &mut PhysicsWorld,
    mapper: &CoordinateMapper,
    kind: BodyKind,
    center: Vec2,
    size: Vec2,
) -> Result<RigidBodyHandle> {
    if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
        return Err(EngineError::InvalidBoxSize {
            width: size.x,
            height: size.y,
        });
    }

    let sim_center = mapper.display_to_sim(center);
    let half_extents = mapper.to_sim_units(size) * 0.5;

    let handle = world.create_body(kind, sim_center);
    world.attach_box(handle, half_extents, BodyMaterial::for_kind(kind));

    debug!(
        kind = ?kind,
        center = ?center,
        size = ?size,
        sim_center = ?sim_center,
        "Created box body"
    );
    Ok(handle)
}
