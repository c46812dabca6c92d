//! Renderer trait abstraction.

use ovalpad_core::collection::ShapeCollection;
use ovalpad_core::shapes::{OUTLINE_COLOR, Shape, ShapeColor};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Default window background (sky blue).
pub const DEFAULT_BACKGROUND: ShapeColor = ShapeColor::rgb(0x87, 0xCE, 0xEB);

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The shapes to render.
    pub shapes: &'a ShapeCollection<Shape>,
    /// Physical pixels per device-independent unit.
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Outline color for every shape.
    pub outline_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(shapes: &'a ShapeCollection<Shape>) -> Self {
        Self {
            shapes,
            scale_factor: 1.0,
            background_color: DEFAULT_BACKGROUND.into(),
            outline_color: OUTLINE_COLOR.into(),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
