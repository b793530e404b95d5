//! Horizontal share bars, one category per row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Share;

const LABEL_WIDTH: u16 = 15;
const PERCENT_WIDTH: u16 = 5;
const FILLED: char = '█';
const EMPTY: char = '░';

const PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightRed,
];

/// Distribution rendered as `Name  ████░░░░  NN%`
pub struct ShareBars<'a> {
    shares: &'a [Share],
    label_style: Style,
}

impl<'a> ShareBars<'a> {
    pub fn new(shares: &'a [Share]) -> Self {
        Self {
            shares,
            label_style: Style::default().fg(Color::White),
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

impl<'a> Widget for ShareBars<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= LABEL_WIDTH + PERCENT_WIDTH || area.height == 0 || self.shares.is_empty()
        {
            return;
        }

        let total: u32 = self.shares.iter().map(|share| share.value).sum();
        let bar_width = (area.width - LABEL_WIDTH - PERCENT_WIDTH) as usize;

        for (row, share) in self.shares.iter().enumerate().take(area.height as usize) {
            let y = area.y + row as u16;
            let color = PALETTE[row % PALETTE.len()];
            buf.set_stringn(
                area.x,
                y,
                share.name,
                LABEL_WIDTH as usize - 1,
                self.label_style,
            );

            let filled = filled_cells(share, total, bar_width);
            for i in 0..bar_width {
                let x = area.x + LABEL_WIDTH + i as u16;
                let (ch, style) = if i < filled {
                    (FILLED, Style::default().fg(color))
                } else {
                    (EMPTY, Style::default().fg(Color::DarkGray))
                };
                buf.get_mut(x, y).set_char(ch).set_style(style);
            }

            let percent = format!("{:>4}%", share.percent_of(total));
            buf.set_string(
                area.x + LABEL_WIDTH + bar_width as u16,
                y,
                percent,
                Style::default().fg(color),
            );
        }
    }
}

fn filled_cells(share: &Share, total: u32, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    ((f64::from(share.value) / f64::from(total)) * width as f64).round() as usize
}

/// Plain-text rendering of one bar (for logs and tests)
pub fn share_bar_text(share: &Share, total: u32, width: usize) -> String {
    let filled = filled_cells(share, total, width).min(width);
    format!(
        "{:<label$}{}{}{:>4}%",
        share.name,
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(width - filled),
        share.percent_of(total),
        label = LABEL_WIDTH as usize,
    )
}
