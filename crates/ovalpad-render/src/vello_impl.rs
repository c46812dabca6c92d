//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, Ellipse as KurboEllipse, Stroke};
use ovalpad_core::shapes::{OUTLINE_COLOR, OUTLINE_WIDTH, ShapeColor};
use ovalpad_core::surface::{DrawingSurface, EllipseGeometry};
use peniko::{Color, Fill};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Device-independent units to physical pixels.
    view_transform: Affine,
    outline_color: Color,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            view_transform: Affine::IDENTITY,
            outline_color: OUTLINE_COLOR.into(),
        }
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl DrawingSurface for VelloRenderer {
    fn draw_ellipse(&mut self, ellipse: &EllipseGeometry, fill: ShapeColor) {
        let shape = KurboEllipse::new(ellipse.center, (ellipse.radius_x, ellipse.radius_y), 0.0);
        let transform = self.view_transform * ellipse.transform();

        self.scene
            .fill(Fill::NonZero, transform, Color::from(fill), None, &shape);
        self.scene.stroke(
            &Stroke::new(OUTLINE_WIDTH),
            transform,
            self.outline_color,
            None,
            &shape,
        );
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.view_transform = Affine::scale(ctx.scale_factor);
        self.outline_color = ctx.outline_color;

        ctx.shapes.draw(self);
    }
}
