//! Interprets pointer, wheel and mode input against a shape collection.

use crate::collection::ShapeCollection;
use crate::input::PointerEvent;
use crate::mode::{CursorHint, Mode, ModeCommand, Trigger};
use crate::shapes::ShapeTrait;
use kurbo::{Point, Vec2};

/// Wheel units reported for one notch.
pub const WHEEL_DELTA: f64 = 120.0;

/// Rotation applied to the selected shape per wheel notch.
pub const ROTATION_DEGREES_PER_NOTCH: f64 = 4.0;

/// What the platform should do with pointer capture after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    /// Leave capture as it is.
    #[default]
    Keep,
    /// Route all pointer input here until release.
    Begin,
    Release,
}

/// Side effects the platform should carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub redraw: bool,
    pub capture: Capture,
}

impl EventResponse {
    /// Nothing to do.
    pub const NONE: Self = Self {
        redraw: false,
        capture: Capture::Keep,
    };

    /// Repaint without touching capture.
    pub const REDRAW: Self = Self {
        redraw: true,
        capture: Capture::Keep,
    };

    fn with_capture(self, capture: Capture) -> Self {
        Self { capture, ..self }
    }
}

/// Keys with a reserved handler that currently does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    Delete,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// The Draw / Select / Drag state machine.
#[derive(Debug, Clone, Default)]
pub struct InputModeController {
    mode: Mode,
    /// Press point of the gesture that created the shape being drawn.
    drag_anchor: Point,
    /// Shape center minus grab point, for the shape being dragged.
    drag_offset: Vec2,
    capturing: bool,
}

impl InputModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.mode.cursor_hint()
    }

    /// Whether a gesture currently holds pointer capture.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Whether primary presses must be classified as click or drag before
    /// being delivered.
    pub fn wants_drag_detection(&self) -> bool {
        self.mode == Mode::Draw
    }

    /// Dispatch a translated pointer event.
    pub fn handle_event<S: ShapeTrait>(
        &mut self,
        shapes: &mut ShapeCollection<S>,
        event: PointerEvent,
    ) -> EventResponse {
        match event {
            PointerEvent::Down {
                position,
                drag_detected,
            } => self.pointer_down(shapes, position, drag_detected),
            PointerEvent::Move {
                position,
                primary_held,
            } => self.pointer_move(shapes, position, primary_held),
            PointerEvent::Up => self.pointer_up(shapes),
            PointerEvent::Wheel { delta } => self.wheel(shapes, delta),
        }
    }

    pub fn pointer_down<S: ShapeTrait>(
        &mut self,
        shapes: &mut ShapeCollection<S>,
        point: Point,
        drag_detected: bool,
    ) -> EventResponse {
        if self.mode == Mode::Draw {
            if !drag_detected {
                return EventResponse::REDRAW;
            }
            return match shapes.insert_shape(point) {
                Ok(_) => {
                    self.drag_anchor = point;
                    self.capturing = true;
                    EventResponse::REDRAW.with_capture(Capture::Begin)
                }
                Err(e) => {
                    log::warn!("Abandoning new shape: {}", e);
                    EventResponse::NONE
                }
            };
        }

        shapes.clear_selection();
        if !shapes.select_shape(point) {
            return EventResponse::REDRAW;
        }
        let Some(shape) = shapes.selected() else {
            return EventResponse::REDRAW;
        };
        self.drag_offset = shape.center() - point;
        self.capturing = true;
        self.apply(Trigger::GrabShape);
        EventResponse::REDRAW.with_capture(Capture::Begin)
    }

    pub fn pointer_move<S: ShapeTrait>(
        &mut self,
        shapes: &mut ShapeCollection<S>,
        point: Point,
        primary_held: bool,
    ) -> EventResponse {
        if !primary_held {
            return EventResponse::NONE;
        }
        let Some(shape) = shapes.selected_mut() else {
            return EventResponse::NONE;
        };
        match self.mode {
            Mode::Draw => shape.fit_to_corners(self.drag_anchor, point),
            Mode::Drag => shape.set_center(point + self.drag_offset),
            Mode::Select => return EventResponse::NONE,
        }
        EventResponse::REDRAW
    }

    pub fn pointer_up<S: ShapeTrait>(&mut self, shapes: &mut ShapeCollection<S>) -> EventResponse {
        self.capturing = false;
        let response = match self.mode {
            Mode::Draw => {
                if shapes.selected().is_some() {
                    shapes.clear_selection();
                }
                EventResponse::REDRAW
            }
            Mode::Drag => {
                self.apply(Trigger::PointerUp);
                EventResponse::NONE
            }
            Mode::Select => EventResponse::NONE,
        };
        response.with_capture(Capture::Release)
    }

    /// Rotate the selected shape by `delta` wheel units.
    pub fn wheel<S: ShapeTrait>(&mut self, shapes: &mut ShapeCollection<S>, delta: f64) -> EventResponse {
        match shapes.selected_mut() {
            Some(shape) => {
                shape.rotate_by(delta / WHEEL_DELTA * ROTATION_DEGREES_PER_NOTCH);
                EventResponse::REDRAW
            }
            None => EventResponse::NONE,
        }
    }

    /// Switch modes on explicit request. Returns false when the command is
    /// ignored in the current mode.
    pub fn apply_command(&mut self, command: ModeCommand) -> bool {
        self.apply(Trigger::Command(command))
    }

    /// Handle a reserved key. These keys are accepted but have no effect.
    pub fn key(&mut self, key: KeyCommand) -> EventResponse {
        log::debug!("Key {:?} has no action in {} mode", key, self.mode.name());
        EventResponse::NONE
    }

    fn apply(&mut self, trigger: Trigger) -> bool {
        match self.mode.transition(trigger) {
            Some(next) => {
                if next != self.mode {
                    log::debug!("Mode {} -> {}", self.mode.name(), next.name());
                }
                self.mode = next;
                true
            }
            None => false,
        }
    }
}
