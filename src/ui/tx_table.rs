//! Transaction table: one row per transaction, detail block when expanded

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::domain::format::{self, format_percent, format_timestamp, or_na, truncate_address};
use crate::domain::{Badge, ParsedTransaction, RiskLevel, TimeDisplay, Transaction, TxAction};

use super::status_style;

pub const EMPTY_TITLE: &str = "No transactions yet";
pub const EMPTY_HINT: &str = "Fetch transaction data through the backend API first";

const HASH_WIDTH: usize = 13;
const BADGE_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 22;
const TIME_WIDTH: usize = 19;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Transactions;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = if app.transactions_refreshing {
        format!("Transactions ({}) refreshing...", app.transactions.len())
    } else {
        format!("Transactions ({})", app.transactions.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if app.transactions.is_empty() {
        let text = if app.initial_loading {
            Text::from(Line::styled("Loading...", Style::default().fg(Color::DarkGray)))
        } else {
            Text::from(empty_lines())
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .transactions
        .iter()
        .map(|tx| row_item(tx, app.is_expanded(&tx.hash), app.time_display))
        .collect();

    let highlight_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(app.tx_panel.selected()));
    f.render_stateful_widget(list, area, &mut state);
}

pub fn empty_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled(EMPTY_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(EMPTY_HINT, Style::default().fg(Color::DarkGray)),
    ]
}

/// Amount column: parsed `"{amount} {token}"` when both are present,
/// otherwise the wei value in ether
pub fn display_amount(tx: &Transaction, parsed: Option<&ParsedTransaction>) -> String {
    parsed
        .and_then(ParsedTransaction::amount_with_token)
        .unwrap_or_else(|| format!("{} ETH", format::format_value(&tx.value)))
}

pub fn row_item(tx: &Transaction, expanded: bool, zone: TimeDisplay) -> ListItem<'static> {
    let parsed = tx.parsed();
    let mut lines = vec![row_line(tx, parsed.as_ref(), expanded, zone)];
    if expanded {
        lines.extend(detail_lines(tx, parsed.as_ref()));
    }
    ListItem::new(Text::from(lines))
}

pub fn row_line(
    tx: &Transaction,
    parsed: Option<&ParsedTransaction>,
    expanded: bool,
    zone: TimeDisplay,
) -> Line<'static> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let action = parsed.and_then(|p| p.action.clone());
    let risk = parsed.and_then(|p| p.risk_level.clone());

    let action_span = match action {
        Some(action) => {
            let color = TxAction::parse(Some(&action)).color();
            Span::styled(format!("{:<BADGE_WIDTH$}", action), status_style(color))
        }
        None => Span::raw(" ".repeat(BADGE_WIDTH)),
    };
    let risk_span = match risk {
        Some(risk) => {
            let color = RiskLevel::parse(Some(&risk)).color();
            Span::styled(risk, status_style(color))
        }
        None => Span::raw(""),
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<HASH_WIDTH$} ", truncate_address(&tx.hash)),
            Style::default().fg(Color::LightBlue),
        ),
        action_span,
        Span::raw(format!(" {:>AMOUNT_WIDTH$} ", display_amount(tx, parsed))),
        Span::styled(
            format!("{:<TIME_WIDTH$} ", format_timestamp(tx.time, zone)),
            Style::default().fg(Color::DarkGray),
        ),
        risk_span,
    ])
}

pub fn detail_lines(tx: &Transaction, parsed: Option<&ParsedTransaction>) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("    Hash  ", label),
            Span::raw(tx.hash.clone()),
        ]),
        Line::from(vec![
            Span::styled("    From  ", label),
            Span::styled(tx.from_addr.clone(), Style::default().fg(Color::LightBlue)),
        ]),
        Line::from(vec![
            Span::styled("    To    ", label),
            Span::styled(tx.to_addr.clone(), Style::default().fg(Color::LightBlue)),
        ]),
    ];

    if let Some(parsed) = parsed {
        lines.push(Line::from(vec![
            Span::styled("    Description  ", label),
            Span::raw(or_na(parsed.description.as_deref()).to_string()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Confidence  ", label),
            Span::raw(format_percent(parsed.confidence)),
            Span::styled("  Gas used  ", label),
            Span::raw(or_na(parsed.gas_used.as_deref()).to_string()),
            Span::styled("  Gas price  ", label),
            Span::raw(or_na(parsed.gas_price.as_deref()).to_string()),
        ]));
    }
    lines
}
