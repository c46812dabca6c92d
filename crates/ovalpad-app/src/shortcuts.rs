//! Keyboard shortcut registry and documentation.

use ovalpad_core::controller::KeyCommand;
use ovalpad_core::mode::ModeCommand;
use winit::keyboard::{Key, NamedKey};

/// What a shortcut does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Mode(ModeCommand),
    Key(KeyCommand),
    ShowHelp,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: ShortcutAction, description: &'static str) -> Self {
        Self {
            key,
            action,
            description,
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        use ShortcutAction::{Key, Mode, ShowHelp};
        vec![
            Shortcut::new("D", Mode(ModeCommand::Draw), "Draw mode"),
            Shortcut::new("S", Mode(ModeCommand::Select), "Select mode"),
            Shortcut::new("Space", Mode(ModeCommand::Toggle), "Toggle Draw / Select"),
            Shortcut::new("Delete", Key(KeyCommand::Delete), "Reserved"),
            Shortcut::new("Backspace", Key(KeyCommand::Backspace), "Reserved"),
            Shortcut::new("Left", Key(KeyCommand::ArrowLeft), "Reserved"),
            Shortcut::new("Right", Key(KeyCommand::ArrowRight), "Reserved"),
            Shortcut::new("Up", Key(KeyCommand::ArrowUp), "Reserved"),
            Shortcut::new("Down", Key(KeyCommand::ArrowDown), "Reserved"),
            Shortcut::new("F1", ShowHelp, "Show keyboard shortcuts"),
        ]
    }

    /// Find the action bound to a logical key.
    pub fn lookup(key: &Key) -> Option<ShortcutAction> {
        let name = key_name(key)?;
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.key.eq_ignore_ascii_case(&name))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:12} {}", shortcut.key, shortcut.description);
        }
        println!();
    }
}

fn key_name(key: &Key) -> Option<String> {
    let name = match key {
        Key::Character(c) => return Some(c.to_string()),
        Key::Named(NamedKey::Space) => "Space",
        Key::Named(NamedKey::Delete) => "Delete",
        Key::Named(NamedKey::Backspace) => "Backspace",
        Key::Named(NamedKey::ArrowLeft) => "Left",
        Key::Named(NamedKey::ArrowRight) => "Right",
        Key::Named(NamedKey::ArrowUp) => "Up",
        Key::Named(NamedKey::ArrowDown) => "Down",
        Key::Named(NamedKey::F1) => "F1",
        _ => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_letters_ignore_case() {
        assert_eq!(
            ShortcutRegistry::lookup(&Key::Character("d".into())),
            Some(ShortcutAction::Mode(ModeCommand::Draw))
        );
        assert_eq!(
            ShortcutRegistry::lookup(&Key::Character("S".into())),
            Some(ShortcutAction::Mode(ModeCommand::Select))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            ShortcutRegistry::lookup(&Key::Named(NamedKey::Space)),
            Some(ShortcutAction::Mode(ModeCommand::Toggle))
        );
        assert_eq!(
            ShortcutRegistry::lookup(&Key::Named(NamedKey::ArrowUp)),
            Some(ShortcutAction::Key(KeyCommand::ArrowUp))
        );
        assert_eq!(
            ShortcutRegistry::lookup(&Key::Named(NamedKey::F1)),
            Some(ShortcutAction::ShowHelp)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(ShortcutRegistry::lookup(&Key::Character("q".into())), None);
        assert_eq!(ShortcutRegistry::lookup(&Key::Named(NamedKey::Escape)), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let all = ShortcutRegistry::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.key.eq_ignore_ascii_case(b.key), "{} bound twice", a.key);
            }
        }
    }
}
