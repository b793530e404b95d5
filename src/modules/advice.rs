//! Advice panel - tab switching and the start-analysis call to action

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, AdviceTab, Context, Module, RefreshTarget};

#[derive(Debug, Clone, Copy, Default)]
pub struct AdvicePanel {
    tab: AdviceTab,
}

impl AdvicePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AdviceTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AdviceTab) {
        self.tab = tab;
    }
}

impl Module for AdvicePanel {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Tab => Action::SelectTab(self.tab.next()),
            KeyCode::BackTab => Action::SelectTab(self.tab.prev()),
            // The call to action only exists while there is no result
            KeyCode::Enter | KeyCode::Char(' ') if !ctx.has_analysis => {
                if ctx.analysis_refreshing {
                    Action::None
                } else {
                    Action::Refresh(RefreshTarget::Analysis)
                }
            }
            _ => Action::None,
        }
    }
}
