//! Advice panel: call to action, tab bar and the four analysis views

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::core::AdviceTab;
use crate::domain::format::{format_percent, format_rating, or_na, NA};
use crate::domain::{
    AdvisorAnalysis, AnalysisMetadata, AnalysisResult, Badge, IndustryAnalysis, PositionAnalysis,
    Recommendation, RiskLevel, Sentiment, SignalAnalysis, StatusColor,
};

use super::status_style;

pub const NO_RESULT: &str = "No analysis result yet";
pub const START_ANALYSIS: &str = "[ Start analysis ]";
pub const ANALYZING: &str = "Analyzing...";
pub const EMPTY_VIEW: &str = "No data for this view";

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Advice {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title("AI Advice")
        .border_style(border_style);

    let Some(analysis) = app.analysis.as_ref() else {
        let paragraph = Paragraph::new(Text::from(call_to_action_lines(app.analysis_refreshing)))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    };

    let hint = if app.analysis_refreshing {
        Span::styled(" Refreshing... ", Style::default().fg(Color::LightYellow))
    } else {
        Span::styled(" r refresh ", Style::default().fg(Color::DarkGray))
    };
    block = block.title(Title::from(hint).alignment(Alignment::Right));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = AdviceTab::ALL
        .iter()
        .map(|tab| Line::from(tab_label(*tab)))
        .collect();
    let selected = AdviceTab::ALL
        .iter()
        .position(|tab| *tab == app.active_tab())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    let body = Paragraph::new(Text::from(tab_lines(analysis, app.active_tab())))
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[1]);
}

/// Shown while there is no analysis result
pub fn tab_label(tab: AdviceTab) -> String {
    format!("{} {}", tab.shortcut(), tab.title())
}

/// Tab under a column offset into the tab bar. Mirrors the `Tabs` widget
/// layout: one space of padding each side and a one-cell divider.
pub fn tab_at(offset: u16) -> Option<AdviceTab> {
    let mut start = 0usize;
    for tab in AdviceTab::ALL {
        let end = start + tab_label(tab).chars().count() + 2;
        if usize::from(offset) < end {
            return Some(tab);
        }
        start = end + 1;
        if usize::from(offset) < start {
            return None;
        }
    }
    None
}

pub fn call_to_action_lines(refreshing: bool) -> Vec<Line<'static>> {
    let button = if refreshing {
        Line::styled(ANALYZING, Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(
            START_ANALYSIS,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let mut lines = vec![
        Line::from(""),
        Line::styled(NO_RESULT, Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        button,
    ];
    if !refreshing {
        lines.push(Line::styled(
            "Enter or r to run",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}

/// Body of the active tab followed by the metadata footer
pub fn tab_lines(analysis: &AnalysisResult, tab: AdviceTab) -> Vec<Line<'static>> {
    let body = match tab {
        AdviceTab::Advisor => analysis.advisor_analysis.as_ref().map(advisor_lines),
        AdviceTab::Position => analysis.position_analysis.as_ref().map(position_lines),
        AdviceTab::Signal => analysis.signal_analysis.as_ref().map(signal_lines),
        AdviceTab::Industry => analysis.industry_analysis.as_ref().map(industry_lines),
    };
    let mut lines = body.unwrap_or_else(|| {
        vec![Line::styled(EMPTY_VIEW, Style::default().fg(Color::DarkGray))]
    });
    lines.extend(footer_lines(analysis));
    lines
}

pub fn advisor_lines(advisor: &AdvisorAnalysis) -> Vec<Line<'static>> {
    let recommendation = advisor.recommendation.as_deref();
    let risk = advisor.risk_assessment.as_deref();
    let mut lines = vec![
        field("Overall rating", format_rating(advisor.overall_rating)),
        badge_field(
            "Recommendation",
            recommendation,
            Recommendation::parse(recommendation).color(),
        ),
        badge_field("Risk assessment", risk, RiskLevel::parse(risk).color()),
        field("Confidence", format_percent(advisor.confidence_level)),
        field("Time horizon", or_na(advisor.time_horizon.as_deref()).to_string()),
        field(
            "Allocation",
            or_na(advisor.portfolio_allocation.as_deref()).to_string(),
        ),
        field("Market outlook", or_na(advisor.market_outlook.as_deref()).to_string()),
    ];
    lines.extend(bullet_list("Key strengths", &advisor.key_strengths, Color::LightGreen));
    lines.extend(bullet_list("Key risks", &advisor.key_risks, Color::LightRed));
    lines.extend(bullet_list(
        "Suggested actions",
        &advisor.suggested_actions,
        Color::LightCyan,
    ));
    lines.extend(summary(advisor.summary.as_deref()));
    lines
}

pub fn position_lines(position: &PositionAnalysis) -> Vec<Line<'static>> {
    let tolerance = position.risk_tolerance.as_deref();
    let mut lines = vec![
        field("Position type", or_na(position.position_type.as_deref()).to_string()),
        badge_field("Risk tolerance", tolerance, RiskLevel::parse(tolerance).color()),
        field("Strategy", or_na(position.strategy_type.as_deref()).to_string()),
        field(
            "Holding period",
            or_na(position.holding_period.as_deref()).to_string(),
        ),
        field("Confidence", format_percent(position.confidence)),
    ];
    lines.extend(summary(position.summary.as_deref()));
    lines
}

pub fn signal_lines(signal: &SignalAnalysis) -> Vec<Line<'static>> {
    let sentiment = signal.market_sentiment.as_deref();
    let mut lines = vec![
        badge_field("Market sentiment", sentiment, Sentiment::parse(sentiment).color()),
        field(
            "Trading frequency",
            or_na(signal.trading_frequency.as_deref()).to_string(),
        ),
        field("Timing quality", format_percent(signal.timing_quality)),
        field("Signal strength", format_percent(signal.signal_strength)),
        field("Volume trend", or_na(signal.volume_trend.as_deref()).to_string()),
        field("Confidence", format_percent(signal.confidence)),
    ];
    lines.extend(summary(signal.summary.as_deref()));
    lines
}

pub fn industry_lines(industry: &IndustryAnalysis) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Primary sector", or_na(industry.primary_sector.as_deref()).to_string()),
        field("Ecosystem", or_na(industry.ecosystem.as_deref()).to_string()),
        field(
            "Protocols",
            or_na(industry.protocol_interaction.as_deref()).to_string(),
        ),
        field("Adoption level", format_percent(industry.adoption_level)),
        field("Confidence", format_percent(industry.confidence)),
    ];
    lines.extend(summary(industry.summary.as_deref()));
    lines
}

fn footer_lines(analysis: &AnalysisResult) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(error) = analysis.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Workflow error: {error}"),
            status_style(StatusColor::Caution),
        ));
    }
    if let Some(metadata) = analysis.metadata.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            metadata_text(metadata),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}

pub fn metadata_text(metadata: &AnalysisMetadata) -> String {
    let count = metadata
        .transaction_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| NA.to_string());
    format!(
        "{} transactions analysed | status {} | {}",
        count,
        or_na(metadata.status.as_deref()),
        or_na(metadata.analysis_timestamp.as_deref()),
    )
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn badge_field(label: &str, value: Option<&str>, color: StatusColor) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(Color::DarkGray)),
        Span::styled(or_na(value).to_string(), status_style(color)),
    ])
}

/// Titled bullet list; nothing at all when `items` is empty
fn bullet_list(title: &str, items: &[String], bullet: Color) -> Vec<Line<'static>> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        Line::from(""),
        Line::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    lines.extend(items.iter().map(|item| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(bullet)),
            Span::raw(item.clone()),
        ])
    }));
    lines
}

fn summary(text: Option<&str>) -> Vec<Line<'static>> {
    match text.filter(|t| !t.trim().is_empty()) {
        Some(text) => vec![
            Line::from(""),
            Line::styled("Summary", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(text.to_string()),
        ],
        None => Vec::new(),
    }
}
