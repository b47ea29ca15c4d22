//! Core scene types: coordinate spaces and entity storage

pub mod coordinates;
pub mod entity;

pub use coordinates::CoordinateMapper;
pub use entity::{PhysicsBody, Scene};
