use ratatui::layout::{Constraint, Direction, Layout, Rect};

const CHART_HEIGHT: u16 = 14;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    /// Zero-height when no banner is shown
    pub banner: Rect,
    pub transactions: Rect,
    pub advice: Rect,
    pub charts: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Screen region under a mouse position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Transactions,
    /// First inner row of the advice panel, where the tab bar sits
    AdviceTabs,
    Advice,
    Other,
}

impl UiAreas {
    pub fn region_at(&self, col: u16, row: u16) -> Region {
        if contains(self.transactions, col, row) {
            Region::Transactions
        } else if contains(self.advice, col, row) {
            if row == self.advice.y + 1 {
                Region::AdviceTabs
            } else {
                Region::Advice
            }
        } else {
            Region::Other
        }
    }
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

pub fn areas(size: Rect, banner: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if banner { 3 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(CHART_HEIGHT)])
        .split(vertical[2]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_chunks[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[3]);

    UiAreas {
        size,
        header: vertical[0],
        banner: vertical[1],
        transactions: top_chunks[0],
        advice: top_chunks[1],
        charts: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}
