//! Renderable rectangle shapes
//!
//! A [`RectangleShape`] lives in display units (pixels, Y down). Its
//! `origin` is the pivot, measured from the top-left corner of the
//! rectangle; `position` places that pivot on screen and `rotation` turns
//! the rectangle around it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for wgpu::Color {
    fn from(color: Color) -> Self {
        wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: color.a as f64,
        }
    }
}

/// An axis-aligned rectangle that can be moved and rotated around its origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    position: Vec2,
    size: Vec2,
    origin: Vec2,
    /// Degrees, counter-clockwise as seen on screen
    rotation: f32,
    fill_color: Color,
}

impl Default for RectangleShape {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            fill_color: Color::WHITE,
        }
    }
}

impl RectangleShape {
    /// Create a rectangle of the given size with its origin in the top-left corner
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Create a rectangle pivoting around its center, placed at `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            position: center,
            size,
            origin: size * 0.5,
            ..Default::default()
        }
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Screen-space corners, clockwise from the top-left before rotation
    pub fn corners(&self) -> [Vec2; 4] {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let local = [
            Vec2::ZERO,
            Vec2::new(self.size.x, 0.0),
            self.size,
            Vec2::new(0.0, self.size.y),
        ];
        local.map(|corner| {
            let p = corner - self.origin;
            // Counter-clockwise on screen is clockwise in a Y-down frame
            self.position + Vec2::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_shape_pivots_on_center() {
        let shape = RectangleShape::centered(Vec2::new(400.0, 5.0), Vec2::new(800.0, 10.0));
        assert_eq!(shape.origin(), Vec2::new(400.0, 5.0));
        assert_eq!(shape.corners()[0], Vec2::new(0.0, 0.0));
        assert_eq!(shape.corners()[2], Vec2::new(800.0, 10.0));
    }

    #[test]
    fn test_rotation_is_counter_clockwise_on_screen() {
        let mut shape = RectangleShape::centered(Vec2::new(100.0, 100.0), Vec2::new(20.0, 0.0));
        shape.set_rotation(90.0);

        // The right edge midpoint swings up, which is -Y in display space
        let right = shape.corners()[1];
        assert!((right.x - 100.0).abs() < 1e-4);
        assert!((right.y - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_default_fill_is_white() {
        assert_eq!(RectangleShape::default().fill_color(), Color::WHITE);
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}
