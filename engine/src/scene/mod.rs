//! Initial scene assembly

pub mod builder;

pub use builder::{box_centers, build_scene, wall_layout, Wall, WallSide};
