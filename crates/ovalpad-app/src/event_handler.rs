//! Translates window input into mode-controller calls.

use kurbo::Point;
use ovalpad_core::collection::ShapeCollection;
use ovalpad_core::controller::{Capture, EventResponse, InputModeController, KeyCommand};
use ovalpad_core::input::{DragDetector, MouseButton, RawPointerEvent};
use ovalpad_core::mode::{CursorHint, Mode, ModeCommand};
use ovalpad_core::shapes::Shape;
use winit::dpi::{LogicalPosition, PhysicalPosition};
use winit::event::{MouseButton as WinitMouseButton, MouseScrollDelta};

/// Wheel units reported by one line of `MouseScrollDelta::LineDelta`.
const WHEEL_UNITS_PER_LINE: f64 = 120.0;

/// Convert a physical window position to device-independent units.
pub fn to_dip(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical: LogicalPosition<f64> = position.to_logical(scale_factor);
    Point::new(logical.x, logical.y)
}

/// Normalize a winit scroll delta to notional wheel units (120 per notch).
pub fn wheel_units(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64 * WHEEL_UNITS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    }
}

pub fn map_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Owns the gesture state between the window and the shape collection.
#[derive(Debug, Default)]
pub struct EventHandler {
    detector: DragDetector,
    controller: InputModeController,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.controller.cursor_hint()
    }

    /// Last pointer position seen, in device-independent units.
    pub fn pointer_position(&self) -> Point {
        self.detector.pointer_position()
    }

    /// A press, drag or capture is in progress.
    pub fn is_busy(&self) -> bool {
        self.controller.is_capturing()
            || self.detector.is_pending()
            || self.detector.is_button_pressed(MouseButton::Left)
    }

    /// Feed one raw pointer event through drag detection into the controller.
    pub fn handle_pointer(
        &mut self,
        shapes: &mut ShapeCollection<Shape>,
        event: RawPointerEvent,
    ) -> EventResponse {
        let events = self
            .detector
            .handle(event, self.controller.wants_drag_detection());

        let mut response = EventResponse::NONE;
        for event in events {
            let next = self.controller.handle_event(shapes, event);
            response.redraw |= next.redraw;
            if next.capture != Capture::Keep {
                response.capture = next.capture;
            }
        }
        match response.capture {
            Capture::Begin => log::trace!("Pointer capture started"),
            Capture::Release => log::trace!("Pointer capture released"),
            Capture::Keep => {}
        }
        response
    }

    /// Apply a mode switch unless a gesture is in progress.
    pub fn apply_command(&mut self, command: ModeCommand) -> bool {
        if self.is_busy() {
            log::debug!("Ignoring {:?} during a gesture", command);
            return false;
        }
        self.controller.apply_command(command)
    }

    pub fn key(&mut self, key: KeyCommand) -> EventResponse {
        self.controller.key(key)
    }
}
