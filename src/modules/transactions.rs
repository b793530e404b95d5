//! Transaction table panel - row selection and expand/copy intents

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};

/// Highlighted row of the transaction table
///
/// Expansion state is owned by the store so it survives list replacement;
/// the panel only tracks which row the cursor is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxPanel {
    selected: usize,
}

impl TxPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the cursor inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Module for TxPanel {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_down(ctx.tx_count);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_up();
                Action::None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select_last(ctx.tx_count);
                Action::None
            }
            KeyCode::Home => {
                self.select_first();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match ctx.selected_hash.clone() {
                Some(hash) => Action::ToggleRow(hash),
                None => Action::None,
            },
            KeyCode::Char('y') => match ctx.selected_hash.clone() {
                Some(hash) => Action::Copy(hash),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }
}
