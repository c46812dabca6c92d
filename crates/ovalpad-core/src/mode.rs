//! Input modes and the transitions between them.

use serde::{Deserialize, Serialize};

/// What pointer input currently does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Press-and-drag creates a new ellipse.
    #[default]
    Draw,
    /// Press picks the topmost ellipse under the pointer.
    Select,
    /// A picked ellipse follows the pointer until release.
    Drag,
}

/// Explicit mode switch requested from a menu, toolbar or shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeCommand {
    Draw,
    Select,
    /// Flip between Draw and Select.
    Toggle,
}

/// Cursor the platform should show for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    Crosshair,
    Hand,
    MoveAll,
}

/// Events that may move the mode machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Command(ModeCommand),
    /// A press in a selection mode landed on a shape.
    GrabShape,
    PointerUp,
}

impl Mode {
    /// Next mode for `trigger`, or `None` when the trigger is ignored here.
    ///
    /// Drag is entered only by grabbing a shape outside Draw mode and left
    /// only by releasing the pointer.
    pub fn transition(self, trigger: Trigger) -> Option<Mode> {
        use Mode::*;
        match (self, trigger) {
            (Drag, Trigger::Command(_)) => None,
            (_, Trigger::Command(ModeCommand::Draw)) => Some(Draw),
            (_, Trigger::Command(ModeCommand::Select)) => Some(Select),
            (Draw, Trigger::Command(ModeCommand::Toggle)) => Some(Select),
            (Select, Trigger::Command(ModeCommand::Toggle)) => Some(Draw),
            (Select | Drag, Trigger::GrabShape) => Some(Drag),
            (Draw, Trigger::GrabShape) => None,
            (Drag, Trigger::PointerUp) => Some(Select),
            (Draw | Select, Trigger::PointerUp) => None,
        }
    }

    pub fn cursor_hint(self) -> CursorHint {
        match self {
            Mode::Draw => CursorHint::Crosshair,
            Mode::Select => CursorHint::Hand,
            Mode::Drag => CursorHint::MoveAll,
        }
    }

    /// Get display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Select => "Select",
            Mode::Drag => "Drag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let toggle = Trigger::Command(ModeCommand::Toggle);
        assert_eq!(Mode::Draw.transition(toggle), Some(Mode::Select));
        assert_eq!(Mode::Select.transition(toggle), Some(Mode::Draw));
        assert_eq!(Mode::Drag.transition(toggle), None);
    }

    #[test]
    fn test_commands_ignored_while_dragging() {
        for command in [ModeCommand::Draw, ModeCommand::Select, ModeCommand::Toggle] {
            assert_eq!(Mode::Drag.transition(Trigger::Command(command)), None);
        }
    }

    #[test]
    fn test_drag_only_via_grab_and_release() {
        assert_eq!(Mode::Draw.transition(Trigger::GrabShape), None);
        assert_eq!(Mode::Select.transition(Trigger::GrabShape), Some(Mode::Drag));
        assert_eq!(Mode::Drag.transition(Trigger::PointerUp), Some(Mode::Select));
        assert_eq!(Mode::Select.transition(Trigger::PointerUp), None);
    }

    #[test]
    fn test_cursor_hints() {
        assert_eq!(Mode::Draw.cursor_hint(), CursorHint::Crosshair);
        assert_eq!(Mode::Select.cursor_hint(), CursorHint::Hand);
        assert_eq!(Mode::Drag.cursor_hint(), CursorHint::MoveAll);
    }

    #[test]
    fn test_default_is_draw() {
        assert_eq!(Mode::default(), Mode::Draw);
    }
}
