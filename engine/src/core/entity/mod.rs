//! Entity storage for the scene
//!
//! Every visible object is one entity carrying both its [`RectangleShape`]
//! and the [`PhysicsBody`] that moves it, so a shape can never drift away
//! from its body.
//!
//! [`RectangleShape`]: crate::graphics::RectangleShape

pub mod components;
pub mod world;

pub use components::PhysicsBody;
pub use world::Scene;

// Re-export hecs types that users will need
pub use hecs::Entity;
