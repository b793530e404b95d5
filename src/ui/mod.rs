use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod advice;
pub mod charts;
pub mod layout;
pub mod tx_table;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::domain::StatusColor;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size(), app.error.is_some());

    draw_header(f, areas.header, app);
    if let Some(error) = app.error.as_deref() {
        draw_banner(f, areas.banner, error);
    }
    tx_table::draw(f, areas.transactions, app);
    advice::draw(f, areas.advice, app);
    charts::draw(f, areas.charts, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

/// Terminal colour for a badge palette slot
pub fn status_style(color: StatusColor) -> Style {
    let fg = match color {
        StatusColor::Positive => Color::LightGreen,
        StatusColor::Caution => Color::LightYellow,
        StatusColor::Negative => Color::LightRed,
        StatusColor::Neutral => Color::LightBlue,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "CryptoDash",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("API", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {} ", app.endpoint)),
        Span::styled("Focus", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.focus.title())),
    ]);

    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right = Paragraph::new(activity_line(app))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

/// Loading and refresh indicators for the header
pub fn activity_line(app: &App) -> Line<'static> {
    let busy = Style::default().fg(Color::LightYellow);
    let idle = Style::default().fg(Color::DarkGray);
    if app.initial_loading {
        return Line::styled("Loading...", busy);
    }
    let tx = if app.transactions_refreshing {
        Span::styled("Txs refreshing  ", busy)
    } else {
        Span::styled(format!("Txs {}  ", app.transactions.len()), idle)
    };
    let analysis = match (app.analysis_refreshing, app.analysis.is_some()) {
        (true, _) => Span::styled("Analysis refreshing", busy),
        (false, true) => Span::styled("Analysis ready", idle),
        (false, false) => Span::styled("No analysis", idle),
    };
    Line::from(vec![tx, analysis])
}

fn draw_banner(f: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(message.to_string(), Style::default().fg(Color::LightRed)),
        Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed))
            .title("Error"),
    );
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab().title())),
        Span::styled("Expanded ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.expanded.len())),
        Span::styled("Time ", Style::default().fg(Color::DarkGray)),
        Span::raw(match app.time_display {
            crate::domain::TimeDisplay::Local => "local",
            crate::domain::TimeDisplay::Utc => "utc",
        }),
    ];
    if let Some(last) = app.command.last.as_ref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Last ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(":{last}")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("refresh", "refresh [tx|analysis|all]"),
        ("tab", "tab <advisor|position|signal|industry>"),
        ("expand", "Expand all rows"),
        ("collapse", "Collapse all rows"),
        ("clear", "Dismiss the error banner"),
        ("help", "Show key bindings"),
        ("quit", "Exit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) || input.starts_with(cmd) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("refresh | tab | expand | collapse | clear | help | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let key = Style::default().fg(Color::LightCyan);
    let text = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    for (k, desc) in [
        ("t", "refresh txs"),
        ("r", "analyse"),
        ("1-4", "tabs"),
        ("Enter", "expand"),
        ("y", "copy"),
        (":", "command"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {desc}  "), text));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  h / l / ←→   Switch panel"),
        Line::from("  Tab          Next panel, or next view in Advice"),
        Line::from("  j / k        Move selection"),
        Line::from("  gg / G       Top / bottom"),
        Line::from("  1-4          Advisor / Position / Signal / Industry"),
        Line::from("  Mouse        Click a panel or tab; wheel moves rows"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  Enter/Space  Expand row, or start analysis"),
        Line::from("  t            Refresh transactions"),
        Line::from("  r            Refresh analysis"),
        Line::from("  x            Dismiss error banner"),
        Line::from("  y            Copy transaction hash"),
        Line::from("  :            Command line"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :refresh [tx|analysis|all]"),
        Line::from("  :tab <advisor|position|signal|industry>"),
        Line::from("  :expand  :collapse  :clear  :help  :quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
