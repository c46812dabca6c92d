//! Drawing surface contract between the core and renderers.

use crate::shapes::ShapeColor;
use kurbo::{Affine, Point};

/// Placement of an ellipse on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseGeometry {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Degrees, clockwise on a y-down surface.
    pub rotation_degrees: f64,
}

impl EllipseGeometry {
    /// Rotation about the center that places the unrotated ellipse.
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(self.rotation_degrees.to_radians(), self.center)
    }
}

/// Something shapes can be drawn onto, one call per shape per pass.
///
/// Implementations fill the ellipse with `fill` and outline it with
/// [`OUTLINE_COLOR`](crate::shapes::OUTLINE_COLOR) at
/// [`OUTLINE_WIDTH`](crate::shapes::OUTLINE_WIDTH).
pub trait DrawingSurface {
    fn draw_ellipse(&mut self, ellipse: &EllipseGeometry, fill: ShapeColor);
}

/// Surface that records every call, in order.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<(EllipseGeometry, ShapeColor)>,
}

#[cfg(test)]
impl DrawingSurface for RecordingSurface {
    fn draw_ellipse(&mut self, ellipse: &EllipseGeometry, fill: ShapeColor) {
        self.calls.push((*ellipse, fill));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_rotates_clockwise_on_screen() {
        let geometry = EllipseGeometry {
            center: Point::new(10.0, 10.0),
            radius_x: 5.0,
            radius_y: 1.0,
            rotation_degrees: 90.0,
        };
        // The +x extremity of the unrotated ellipse lands below the center.
        let p = geometry.transform() * Point::new(15.0, 10.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 15.0).abs() < 1e-9);
    }
}
