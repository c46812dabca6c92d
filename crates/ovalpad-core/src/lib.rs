//! Ovalpad Core Library
//!
//! Platform-agnostic shapes, shape storage and the input-mode state machine
//! for the Ovalpad ellipse editor.

pub mod collection;
pub mod controller;
pub mod input;
pub mod mode;
pub mod shapes;
pub mod surface;

pub use collection::{CollectionError, ShapeCollection};
pub use controller::{Capture, EventResponse, InputModeController, KeyCommand};
pub use input::{DragDetector, MouseButton, PointerEvent, RawPointerEvent};
pub use mode::{CursorHint, Mode, ModeCommand};
pub use shapes::{Ellipse, Shape, ShapeColor, ShapeId, ShapeTrait};
pub use surface::{DrawingSurface, EllipseGeometry};
