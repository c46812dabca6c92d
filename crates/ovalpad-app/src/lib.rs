//! Ovalpad Application
//!
//! The application shell providing windowing, input handling,
//! and integration of the shape core with the renderer.

mod app;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use event_handler::EventHandler;
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
