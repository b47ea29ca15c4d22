//! Physics world resource managing the Rapier simulation
//!
//! This module provides the PhysicsWorld struct that wraps all Rapier
//! structures needed for a 2D simulation. Positions and lengths are in
//! simulation units with Y pointing up.

use glam::Vec2;
use rapier2d::prelude::*;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Velocity resolution iterations per step
pub const VELOCITY_ITERATIONS: usize = 6;

/// Position resolution iterations per step
pub const POSITION_ITERATIONS: usize = 2;

/// Whether a body is immovable or driven by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Static,
    Dynamic,
}

impl BodyKind {
    pub fn is_dynamic(self) -> bool {
        matches!(self, BodyKind::Dynamic)
    }

    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        }
    }
}

/// Surface and mass parameters of a collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMaterial {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl BodyMaterial {
    /// Material used for walls and other immovable bodies
    pub const STATIC: BodyMaterial = BodyMaterial {
        density: 0.0,
        friction: 1.0,
        restitution: 1.0,
    };

    /// Material used for falling boxes
    pub const DYNAMIC: BodyMaterial = BodyMaterial {
        density: 10.0,
        friction: 0.8,
        restitution: 1.0,
    };

    pub fn for_kind(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Static => Self::STATIC,
            BodyKind::Dynamic => Self::DYNAMIC,
        }
    }
}

/// Physics world resource containing all Rapier structures
pub struct PhysicsWorld {
    /// Set of rigid bodies in the simulation
    pub rigid_body_set: RigidBodySet,

    /// Set of colliders in the simulation
    pub collider_set: ColliderSet,

    /// Integration parameters for the simulation
    pub integration_parameters: IntegrationParameters,

    /// Physics pipeline for stepping the simulation
    physics_pipeline: PhysicsPipeline,

    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Gravity vector for the simulation
    gravity: Vector<Real>,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity (simulation units, Y up)
    pub fn new(gravity: Vec2) -> Self {
        info!(gravity = ?gravity, "Initializing physics world");

        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(VELOCITY_ITERATIONS).unwrap_or(NonZeroUsize::MIN);
        integration_parameters.num_internal_stabilization_iterations = POSITION_ITERATIONS;

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: vector![gravity.x, gravity.y],
        }
    }

    /// Register a body of the given kind centered at `position`
    pub fn create_body(&mut self, kind: BodyKind, position: Vec2) -> RigidBodyHandle {
        let body = RigidBodyBuilder::new(kind.to_rapier())
            .translation(vector![position.x, position.y])
            .build();
        self.rigid_body_set.insert(body)
    }

    /// Attach a box collider to a body; `half_extents` are half the width and height
    pub fn attach_box(
        &mut self,
        body: RigidBodyHandle,
        half_extents: Vec2,
        material: BodyMaterial,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.collider_set
            .insert_with_parent(collider, body, &mut self.rigid_body_set)
    }

    /// Apply an instantaneous angular impulse, optionally waking the body
    pub fn apply_angular_impulse(&mut self, body: RigidBodyHandle, impulse: f32, wake_up: bool) {
        if let Some(rb) = self.rigid_body_set.get_mut(body) {
            // Mass properties of freshly attached colliders are folded in lazily
            rb.recompute_mass_properties_from_colliders(&self.collider_set);
            rb.apply_torque_impulse(impulse, wake_up);
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Current center position of a body in simulation units
    pub fn body_position(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set
            .get(body)
            .map(|rb| Vec2::new(rb.translation().x, rb.translation().y))
    }

    /// Current angle of a body in radians, counter-clockwise
    pub fn body_angle(&self, body: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(body).map(|rb| rb.rotation().angle())
    }

    /// Position and angle in one lookup
    pub fn body_pose(&self, body: RigidBodyHandle) -> Option<(Vec2, f32)> {
        self.rigid_body_set.get(body).map(|rb| {
            (
                Vec2::new(rb.translation().x, rb.translation().y),
                rb.rotation().angle(),
            )
        })
    }

    /// Kind of a registered body, read back from the rapier body type
    pub fn body_kind(&self, body: RigidBodyHandle) -> Option<BodyKind> {
        self.rigid_body_set.get(body).map(|rb| {
            if rb.is_dynamic() {
                BodyKind::Dynamic
            } else {
                BodyKind::Static
            }
        })
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, -10.0))
    }
}

impl Drop for PhysicsWorld {
    fn drop(&mut self) {
        debug!(
            bodies = self.rigid_body_set.len(),
            colliders = self.collider_set.len(),
            "Releasing physics world"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATERIAL: BodyMaterial = BodyMaterial {
        density: 1.0,
        friction: 0.5,
        restitution: 0.0,
    };

    #[test]
    fn test_material_table() {
        assert_eq!(BodyMaterial::for_kind(BodyKind::Static).density, 0.0);
        assert_eq!(BodyMaterial::for_kind(BodyKind::Static).friction, 1.0);
        assert_eq!(BodyMaterial::for_kind(BodyKind::Dynamic).density, 10.0);
        assert_eq!(BodyMaterial::for_kind(BodyKind::Dynamic).friction, 0.8);
        assert_eq!(BodyMaterial::STATIC.restitution, 1.0);
        assert_eq!(BodyMaterial::DYNAMIC.restitution, 1.0);
    }

    #[test]
    fn test_solver_iterations_applied() {
        let world = PhysicsWorld::default();
        assert_eq!(
            world.integration_parameters.num_solver_iterations.get(),
            VELOCITY_ITERATIONS
        );
        assert_eq!(
            world
                .integration_parameters
                .num_internal_stabilization_iterations,
            POSITION_ITERATIONS
        );
    }

    #[test]
    fn test_dynamic_body_falls() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, -10.0));
        let body = world.create_body(BodyKind::Dynamic, Vec2::new(0.0, 10.0));
        world.attach_box(body, Vec2::splat(0.5), MATERIAL);

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }

        let position = world.body_position(body).unwrap();
        assert!(position.y < 10.0, "body should fall, got {position:?}");
        assert!(position.x.abs() < 1e-4);
    }

    #[test]
    fn test_static_body_stays_put() {
        let mut world = PhysicsWorld::default();
        let body = world.create_body(BodyKind::Static, Vec2::new(3.0, 4.0));
        world.attach_box(body, Vec2::new(2.0, 0.5), MATERIAL);

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }

        assert_eq!(world.body_pose(body), Some((Vec2::new(3.0, 4.0), 0.0)));
    }

    #[test]
    fn test_angular_impulse_spins_dynamic_body() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(BodyKind::Dynamic, Vec2::ZERO);
        world.attach_box(body, Vec2::splat(0.5), MATERIAL);

        world.apply_angular_impulse(body, 1.0, true);
        world.step(1.0 / 60.0);

        let angle = world.body_angle(body).unwrap();
        assert!(angle > 0.0, "positive impulse should turn counter-clockwise");
    }

    #[test]
    fn test_unknown_handle_has_no_pose() {
        let mut world = PhysicsWorld::default();
        let body = world.create_body(BodyKind::Dynamic, Vec2::ZERO);
        let other = PhysicsWorld::default();
        assert!(other.body_pose(body).is_none());
        assert_eq!(world.body_count(), 1);
    }
}
