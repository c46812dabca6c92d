//! Shape definitions for the drawing canvas.

mod ellipse;

pub use ellipse::Ellipse;

use crate::surface::DrawingSurface;
use kurbo::{Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Opaque RGBA8 color assigned to shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Fill colors handed out to new shapes, in order.
pub const PALETTE: [ShapeColor; 6] = [
    ShapeColor::rgb(0xFF, 0xFF, 0x00), // yellow
    ShapeColor::rgb(0xFA, 0x80, 0x72), // salmon
    ShapeColor::rgb(0x32, 0xCD, 0x32), // lime green
    ShapeColor::rgb(0x00, 0xFF, 0xFF), // aqua
    ShapeColor::rgb(0xF5, 0xF5, 0xDC), // beige
    ShapeColor::rgb(0xEE, 0x82, 0xEE), // violet
];

/// Outline drawn around every shape.
pub const OUTLINE_COLOR: ShapeColor = ShapeColor::black();

/// Outline width in device-independent units.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// Capabilities every shape kind provides to the collection and controller.
pub trait ShapeTrait {
    /// Create a fresh shape anchored at `center` with zero extent.
    fn new_at(center: Point, color: ShapeColor) -> Self
    where
        Self: Sized;

    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Fill color assigned at creation.
    fn color(&self) -> ShapeColor;

    fn center(&self) -> Point;

    fn set_center(&mut self, center: Point);

    /// Move the shape by `delta`.
    fn translate(&mut self, delta: Vec2) {
        let center = self.center();
        self.set_center(center + delta);
    }

    /// Add `degrees` to the rotation about the center.
    fn rotate_by(&mut self, degrees: f64);

    /// Reshape to fill the axis-aligned rectangle spanned by two corners.
    fn fit_to_corners(&mut self, a: Point, b: Point);

    /// Check if a point hits the filled region.
    fn hit_test(&self, point: Point) -> bool;

    /// Emit drawing commands onto `surface`.
    fn draw(&self, surface: &mut dyn DrawingSurface);
}

/// Enum wrapper for all shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Ellipse(Ellipse),
}

impl Shape {
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Shape::Ellipse(s) => Some(s),
        }
    }
}

impl ShapeTrait for Shape {
    fn new_at(center: Point, color: ShapeColor) -> Self {
        Shape::Ellipse(Ellipse::new_at(center, color))
    }

    fn id(&self) -> ShapeId {
        match self {
            Shape::Ellipse(s) => s.id(),
        }
    }

    fn color(&self) -> ShapeColor {
        match self {
            Shape::Ellipse(s) => s.color(),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Ellipse(s) => s.center(),
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            Shape::Ellipse(s) => s.set_center(center),
        }
    }

    fn rotate_by(&mut self, degrees: f64) {
        match self {
            Shape::Ellipse(s) => s.rotate_by(degrees),
        }
    }

    fn fit_to_corners(&mut self, a: Point, b: Point) {
        match self {
            Shape::Ellipse(s) => s.fit_to_corners(a, b),
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Ellipse(s) => s.hit_test(point),
        }
    }

    fn draw(&self, surface: &mut dyn DrawingSurface) {
        match self {
            Shape::Ellipse(s) => s.draw(surface),
        }
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}
