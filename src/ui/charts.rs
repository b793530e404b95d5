//! Industry and volume charts

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::{ChartData, SummaryTiles, VolumePoint};

use super::widgets::ShareBars;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let data = app.chart_data();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Industry & Volume");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::styled(data.note(), Style::default().fg(Color::DarkGray))),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(27),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(18),
        ])
        .split(rows[1]);

    draw_distribution(f, columns[0], "Sectors", &data.sectors);
    draw_distribution(f, columns[1], "Ecosystems", &data.ecosystems);
    draw_volume(f, columns[2], &data);
    f.render_widget(
        Paragraph::new(tile_lines(&data.tiles))
            .block(Block::default().borders(Borders::LEFT).title("Summary")),
        columns[3],
    );
}

fn draw_distribution(f: &mut Frame, area: Rect, title: &str, shares: &[crate::domain::Share]) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .title(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(ShareBars::new(shares), inner);
}

fn draw_volume(f: &mut Frame, area: Rect, data: &ChartData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let bars = volume_bars(&data.volume);
    let chart = BarChart::default()
        .block(Block::default().title(Span::styled(
            "Volume (ETH)",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, rows[0]);
    f.render_widget(
        Paragraph::new(Line::styled(
            transactions_caption(&data.volume),
            Style::default().fg(Color::DarkGray),
        )),
        rows[1],
    );
}

/// One bar per week; heights in tenths of an ether, labels in ether
pub fn volume_bars(points: &[VolumePoint]) -> Vec<Bar<'static>> {
    points
        .iter()
        .map(|point| {
            Bar::default()
                .value((point.volume.max(0.0) * 10.0).round() as u64)
                .label(Line::from(point.label))
                .text_value(format!("{:.1}", point.volume))
        })
        .collect()
}

pub fn transactions_caption(points: &[VolumePoint]) -> String {
    let counts: Vec<String> = points.iter().map(|p| p.transactions.to_string()).collect();
    format!("Txs {}", counts.join(" / "))
}

pub fn tile_lines(tiles: &SummaryTiles) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::styled("Total volume", label),
        Line::styled(format!("{} ETH", tiles.total_volume), value),
        Line::from(""),
        Line::styled("Avg tx size", label),
        Line::styled(format!("{} ETH", tiles.avg_transaction_size), value),
        Line::from(""),
        Line::styled("Diversification", label),
        Line::styled(tiles.diversification.clone(), value),
    ]
}
