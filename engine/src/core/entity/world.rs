//! Scene wrapper around hecs providing ordered entity management

use super::components::PhysicsBody;
use crate::graphics::RectangleShape;
use hecs::Entity;
use tracing::debug;

/// Arena of `{shape, body}` entities kept in spawn order
///
/// Spawn order doubles as draw order, so entities spawned later are drawn on
/// top. Dropping the scene releases every shape.
pub struct Scene {
    inner: hecs::World,
    order: Vec<Entity>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
            order: Vec::new(),
        }
    }

    /// Spawn an entity pairing a shape with its body
    pub fn spawn(&mut self, shape: RectangleShape, body: PhysicsBody) -> Entity {
        let entity = self.inner.spawn((shape, body));
        self.order.push(entity);
        debug!(entity = ?entity, index = self.order.len() - 1, kind = ?body.kind, "Spawned scene entity");
        entity
    }

    /// Entity ids in spawn order
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.inner.contains(entity)
    }

    /// Copy of an entity's shape
    pub fn shape(&self, entity: Entity) -> Option<RectangleShape> {
        self.inner
            .get::<&RectangleShape>(entity)
            .ok()
            .map(|shape| *shape)
    }

    /// An entity's body link
    pub fn body(&self, entity: Entity) -> Option<PhysicsBody> {
        self.inner.get::<&PhysicsBody>(entity).ok().map(|body| *body)
    }

    /// Mutable access to an entity's shape
    pub fn shape_mut(&mut self, entity: Entity) -> Option<&mut RectangleShape> {
        self.inner.query_one_mut::<&mut RectangleShape>(entity).ok()
    }

    /// Shapes in spawn order
    pub fn shapes(&self) -> impl Iterator<Item = RectangleShape> + '_ {
        self.order.iter().filter_map(|&entity| self.shape(entity))
    }

    /// Body links in spawn order
    pub fn bodies(&self) -> impl Iterator<Item = PhysicsBody> + '_ {
        self.order.iter().filter_map(|&entity| self.body(entity))
    }

    /// Visit every `{body, shape}` pair, in no particular order
    pub fn for_each_pair_mut(&mut self, mut f: impl FnMut(&PhysicsBody, &mut RectangleShape)) {
        for (_, (body, shape)) in self.inner.query_mut::<(&PhysicsBody, &mut RectangleShape)>() {
            f(body, shape);
        }
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        debug!(entities = self.order.len(), "Releasing scene");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{BodyKind, PhysicsWorld};
    use glam::Vec2;

    fn body(world: &mut PhysicsWorld, kind: BodyKind) -> PhysicsBody {
        PhysicsBody::new(world.create_body(kind, Vec2::ZERO), kind)
    }

    #[test]
    fn test_spawn_order_is_preserved() {
        let mut physics = PhysicsWorld::default();
        let mut scene = Scene::new();

        let sizes = [10.0, 20.0, 30.0];
        let entities: Vec<_> = sizes
            .iter()
            .map(|&s| {
                let b = body(&mut physics, BodyKind::Dynamic);
                scene.spawn(RectangleShape::new(Vec2::splat(s)), b)
            })
            .collect();

        assert_eq!(scene.entities(), entities.as_slice());
        let drawn: Vec<f32> = scene.shapes().map(|s| s.size().x).collect();
        assert_eq!(drawn, sizes);
    }

    #[test]
    fn test_pairs_stay_together() {
        let mut physics = PhysicsWorld::default();
        let mut scene = Scene::new();

        let wall = body(&mut physics, BodyKind::Static);
        let crate_body = body(&mut physics, BodyKind::Dynamic);
        let a = scene.spawn(RectangleShape::new(Vec2::splat(1.0)), wall);
        let b = scene.spawn(RectangleShape::new(Vec2::splat(2.0)), crate_body);

        assert_eq!(scene.body(a), Some(wall));
        assert_eq!(scene.body(b), Some(crate_body));

        scene.for_each_pair_mut(|body, shape| {
            if body.is_static() {
                shape.set_rotation(45.0);
            }
        });
        assert_eq!(scene.shape(a).unwrap().rotation(), 45.0);
        assert_eq!(scene.shape(b).unwrap().rotation(), 0.0);
    }

    #[test]
    fn test_shape_mut_writes_through() {
        let mut physics = PhysicsWorld::default();
        let mut scene = Scene::new();
        let e = scene.spawn(
            RectangleShape::default(),
            body(&mut physics, BodyKind::Dynamic),
        );

        scene.shape_mut(e).unwrap().set_position(Vec2::new(3.0, 4.0));
        assert_eq!(scene.shape(e).unwrap().position(), Vec2::new(3.0, 4.0));
        assert!(scene.contains(e));
        assert_eq!(scene.len(), 1);
        assert!(!scene.is_empty());
    }
}
