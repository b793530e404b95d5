//! Panel trait for focusable UI components

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// A focusable panel that interprets keys the global bindings leave over
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;
}
