//! Components attached to scene entities

use crate::physics::BodyKind;
use rapier2d::prelude::RigidBodyHandle;

/// Link from a scene entity to the rigid body that drives it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsBody {
    /// Handle into the physics world's body set
    pub handle: RigidBodyHandle,
    pub kind: BodyKind,
}

impl PhysicsBody {
    pub fn new(handle: RigidBodyHandle, kind: BodyKind) -> Self {
        Self { handle, kind }
    }

    pub fn is_static(&self) -> bool {
        !self.kind.is_dynamic()
    }
}
