//! Ellipse shape.

use super::{ShapeColor, ShapeId, ShapeTrait};
use crate::surface::{DrawingSurface, EllipseGeometry};
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled, outlined ellipse that can rotate about its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius before rotation.
    pub radius_x: f64,
    /// Vertical radius before rotation.
    pub radius_y: f64,
    /// Rotation angle in degrees, clockwise on screen (y grows downward).
    pub rotation_degrees: f64,
    /// Fill color.
    pub color: ShapeColor,
}

impl Ellipse {
    /// Create a new unrotated ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x,
            radius_y,
            rotation_degrees: 0.0,
            color,
        }
    }

    /// Geometry as handed to a drawing surface.
    pub fn geometry(&self) -> EllipseGeometry {
        EllipseGeometry {
            center: self.center,
            radius_x: self.radius_x,
            radius_y: self.radius_y,
            rotation_degrees: self.rotation_degrees,
        }
    }

    /// Either radius is zero, as while a new ellipse is still being dragged out.
    pub fn is_degenerate(&self) -> bool {
        self.radius_x <= 0.0 || self.radius_y <= 0.0
    }

    /// Map a world point into the ellipse's unrotated frame.
    ///
    /// Inverse of [`EllipseGeometry::transform`], so hit-testing agrees with
    /// what the renderer draws.
    pub fn to_local(&self, point: Point) -> Point {
        Affine::rotate_about(-self.rotation_degrees.to_radians(), self.center) * point
    }
}

impl ShapeTrait for Ellipse {
    fn new_at(center: Point, color: ShapeColor) -> Self {
        Self::new(center, 0.0, 0.0, color)
    }

    fn id(&self) -> ShapeId {
        self.id
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn rotate_by(&mut self, degrees: f64) {
        self.rotation_degrees += degrees;
    }

    fn fit_to_corners(&mut self, a: Point, b: Point) {
        self.center = a.midpoint(b);
        self.radius_x = (b.x - a.x).abs() / 2.0;
        self.radius_y = (b.y - a.y).abs() / 2.0;
    }

    fn hit_test(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let local = self.to_local(point);
        let dx = (local.x - self.center.x) / self.radius_x;
        let dy = (local.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }

    fn draw(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_ellipse(&self.geometry(), self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::PALETTE;
    use crate::surface::RecordingSurface;

    fn sample() -> Ellipse {
        Ellipse::new(Point::new(0.0, 0.0), 10.0, 5.0, PALETTE[0])
    }

    #[test]
    fn test_ellipse_creation() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0, PALETTE[3]);
        assert!((ellipse.center.x - 50.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_x - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 20.0).abs() < f64::EPSILON);
        assert!(ellipse.rotation_degrees.abs() < f64::EPSILON);
        assert_eq!(ellipse.color, PALETTE[3]);
    }

    #[test]
    fn test_new_at_is_degenerate() {
        let ellipse = Ellipse::new_at(Point::new(5.0, 5.0), PALETTE[0]);
        assert!(ellipse.is_degenerate());
        assert!(!ellipse.hit_test(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_hit_test_axis_aligned() {
        let ellipse = sample();
        assert!(ellipse.hit_test(Point::new(10.0, 0.0)));
        assert!(!ellipse.hit_test(Point::new(11.0, 0.0)));
        assert!(ellipse.hit_test(Point::new(0.0, 5.0)));
        assert!(!ellipse.hit_test(Point::new(0.0, 6.0)));
        assert!(ellipse.hit_test(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_hit_test_rotated() {
        let mut ellipse = sample();
        ellipse.rotate_by(90.0);
        assert!(!ellipse.hit_test(Point::new(10.0, 0.0)));
        assert!(ellipse.hit_test(Point::new(0.0, 10.0)));
        assert!(ellipse.hit_test(Point::new(4.0, 0.0)));
    }

    #[test]
    fn test_hit_test_rotated_off_origin() {
        let mut ellipse = Ellipse::new(Point::new(100.0, 50.0), 20.0, 2.0, PALETTE[0]);
        assert!(ellipse.hit_test(Point::new(115.0, 50.0)));
        ellipse.rotate_by(90.0);
        assert!(!ellipse.hit_test(Point::new(115.0, 50.0)));
        assert!(ellipse.hit_test(Point::new(100.0, 65.0)));
    }

    #[test]
    fn test_fit_to_corners() {
        let mut ellipse = Ellipse::new_at(Point::ZERO, PALETTE[0]);
        ellipse.fit_to_corners(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
        assert_eq!(ellipse.center, Point::new(10.0, 5.0));
        assert!((ellipse.radius_x - 10.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 5.0).abs() < f64::EPSILON);

        // Dragging up and to the left keeps radii positive.
        ellipse.fit_to_corners(Point::new(20.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(ellipse.center, Point::new(10.0, 5.0));
        assert!((ellipse.radius_x - 10.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_emits_geometry() {
        let mut ellipse = sample();
        ellipse.rotate_by(30.0);
        let mut surface = RecordingSurface::default();
        ellipse.draw(&mut surface);
        assert_eq!(surface.calls.len(), 1);
        let (geometry, color) = &surface.calls[0];
        assert!((geometry.rotation_degrees - 30.0).abs() < f64::EPSILON);
        assert_eq!(*color, PALETTE[0]);
    }
}
