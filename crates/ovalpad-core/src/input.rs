//! Raw pointer input and drag detection.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Half-size, in device-independent units, of the square a press must leave
/// before it counts as a drag.
pub const DRAG_THRESHOLD: f64 = 4.0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer input as delivered by the platform, already in device-independent
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
    /// Wheel rotation in notional units, 120 per notch.
    Scroll { delta: f64 },
}

/// Pointer input in the terms the mode controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, drag_detected: bool },
    Move { position: Point, primary_held: bool },
    Up,
    Wheel { delta: f64 },
}

/// Tracks button state and decides whether a primary press is a drag.
///
/// When drag detection is requested the press is held back until the pointer
/// leaves the threshold square (a drag, reported at the original press point)
/// or the button is released (a click).
#[derive(Debug, Clone, Default)]
pub struct DragDetector {
    /// Last known pointer position.
    pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Primary press waiting to be classified.
    pending_press: Option<Point>,
}

impl DragDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one raw event. `detect_drags` says whether a primary press
    /// must be classified before it is reported.
    pub fn handle(&mut self, event: RawPointerEvent, detect_drags: bool) -> Vec<PointerEvent> {
        match event {
            RawPointerEvent::Down { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.insert(button);
                if button != MouseButton::Left {
                    return Vec::new();
                }
                if detect_drags {
                    self.pending_press = Some(position);
                    Vec::new()
                } else {
                    vec![PointerEvent::Down {
                        position,
                        drag_detected: false,
                    }]
                }
            }
            RawPointerEvent::Move { position } => {
                self.pointer_position = position;
                match self.pending_press {
                    Some(press) if exceeds_threshold(press, position) => {
                        self.pending_press = None;
                        vec![
                            PointerEvent::Down {
                                position: press,
                                drag_detected: true,
                            },
                            PointerEvent::Move {
                                position,
                                primary_held: true,
                            },
                        ]
                    }
                    Some(_) => Vec::new(),
                    None => vec![PointerEvent::Move {
                        position,
                        primary_held: self.is_button_pressed(MouseButton::Left),
                    }],
                }
            }
            RawPointerEvent::Up { position, button } => {
                self.pointer_position = position;
                // Drop releases whose press was never seen.
                let was_pressed = self.pressed_buttons.remove(&button);
                if button != MouseButton::Left || !was_pressed {
                    return Vec::new();
                }
                match self.pending_press.take() {
                    Some(press) => vec![
                        PointerEvent::Down {
                            position: press,
                            drag_detected: false,
                        },
                        PointerEvent::Up,
                    ],
                    None => vec![PointerEvent::Up],
                }
            }
            RawPointerEvent::Scroll { delta } => vec![PointerEvent::Wheel { delta }],
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Whether a primary press is still waiting to be classified.
    pub fn is_pending(&self) -> bool {
        self.pending_press.is_some()
    }

    pub fn pointer_position(&self) -> Point {
        self.pointer_position
    }
}

fn exceeds_threshold(press: Point, current: Point) -> bool {
    (current.x - press.x).abs() > DRAG_THRESHOLD || (current.y - press.y).abs() > DRAG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64, y: f64) -> RawPointerEvent {
        RawPointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn up(x: f64, y: f64) -> RawPointerEvent {
        RawPointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn mv(x: f64, y: f64) -> RawPointerEvent {
        RawPointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_immediate_press_without_detection() {
        let mut detector = DragDetector::new();
        let events = detector.handle(down(10.0, 10.0), false);
        assert_eq!(
            events,
            vec![PointerEvent::Down {
                position: Point::new(10.0, 10.0),
                drag_detected: false
            }]
        );
        assert!(detector.is_button_pressed(MouseButton::Left));
        assert!(!detector.is_pending());
    }

    #[test]
    fn test_drag_detected_after_threshold() {
        let mut detector = DragDetector::new();
        assert!(detector.handle(down(0.0, 0.0), true).is_empty());
        assert!(detector.is_pending());

        // Still inside the threshold square.
        assert!(detector.handle(mv(3.0, -2.0), true).is_empty());

        let events = detector.handle(mv(20.0, 10.0), true);
        assert_eq!(
            events,
            vec![
                PointerEvent::Down {
                    position: Point::new(0.0, 0.0),
                    drag_detected: true
                },
                PointerEvent::Move {
                    position: Point::new(20.0, 10.0),
                    primary_held: true
                },
            ]
        );
        assert!(!detector.is_pending());
    }

    #[test]
    fn test_click_reported_on_release() {
        let mut detector = DragDetector::new();
        detector.handle(down(5.0, 5.0), true);
        let events = detector.handle(up(6.0, 5.0), true);
        assert_eq!(
            events,
            vec![
                PointerEvent::Down {
                    position: Point::new(5.0, 5.0),
                    drag_detected: false
                },
                PointerEvent::Up,
            ]
        );
        assert!(!detector.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_hover_moves_report_button_state() {
        let mut detector = DragDetector::new();
        let events = detector.handle(mv(1.0, 1.0), true);
        assert_eq!(
            events,
            vec![PointerEvent::Move {
                position: Point::new(1.0, 1.0),
                primary_held: false
            }]
        );
        assert_eq!(detector.pointer_position(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_secondary_buttons_ignored() {
        let mut detector = DragDetector::new();
        let events = detector.handle(
            RawPointerEvent::Down {
                position: Point::ZERO,
                button: MouseButton::Right,
            },
            true,
        );
        assert!(events.is_empty());
        assert!(detector.is_button_pressed(MouseButton::Right));
        assert!(!detector.is_pending());
    }

    #[test]
    fn test_release_without_press_is_dropped() {
        let mut detector = DragDetector::new();
        assert!(detector.handle(up(3.0, 4.0), true).is_empty());
        assert!(detector.handle(up(3.0, 4.0), false).is_empty());
        assert_eq!(detector.pointer_position(), Point::new(3.0, 4.0));

        // A full press/release pair still reports the release.
        detector.handle(down(3.0, 4.0), false);
        assert_eq!(detector.handle(up(3.0, 4.0), false), vec![PointerEvent::Up]);
    }

    #[test]
    fn test_scroll_forwarded() {
        let mut detector = DragDetector::new();
        let events = detector.handle(RawPointerEvent::Scroll { delta: -240.0 }, false);
        assert_eq!(events, vec![PointerEvent::Wheel { delta: -240.0 }]);
    }
}
