use std::collections::HashSet;
use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::core::{Action, AdviceTab, Command, Context, Module, NotifyLevel, RefreshTarget};
use crate::domain::{AnalysisResult, ChartData, ChartSource, TimeDisplay, Transaction};
use crate::infrastructure::api::ApiError;
use crate::modules::{AdvicePanel, TxPanel};
use crate::ui::advice::tab_at;
use crate::ui::layout::{self, Region};

/// Banner shown when `/transactions` answers without `success: true`
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load transaction data";

/// Banner shown when `/transactions` cannot be reached or decoded
pub const CONNECT_FAILED_MESSAGE: &str =
    "Failed to connect to the backend service; make sure it is running";

const STATUS_TTL: Duration = Duration::from_secs(3);
const CHORD_TTL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Transactions,
    Advice,
}

impl Focus {
    pub fn title(&self) -> &'static str {
        match self {
            Focus::Transactions => "Transactions",
            Focus::Advice => "Advice",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Focus::Transactions => Focus::Advice,
            Focus::Advice => Focus::Transactions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Clone)]
pub struct PendingChord {
    pub key: char,
    pub since: Instant,
}

/// Fetches queued by the store, drained by the event loop into the runtime
#[derive(Debug, Default, Clone, Copy)]
struct PendingRequests {
    initial: Option<(u64, u64)>,
    transactions: Option<u64>,
    analysis: Option<u64>,
}

/// Single owner of dashboard state
pub struct App {
    /// Snapshot handed to panels on each key
    pub ctx: Context,
    pub transactions: Vec<Transaction>,
    pub analysis: Option<AnalysisResult>,
    /// True until both initial fetches have settled
    pub initial_loading: bool,
    pub transactions_refreshing: bool,
    pub analysis_refreshing: bool,
    /// Persistent banner; cleared by a successful transactions fetch or `x`
    pub error: Option<String>,
    /// Hashes of expanded rows
    pub expanded: HashSet<String>,
    pub tx_panel: TxPanel,
    pub advice_panel: AdvicePanel,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub pending_chord: Option<PendingChord>,
    pub help_open: bool,
    pub should_quit: bool,
    pub time_display: TimeDisplay,
    /// Backend shown in the header
    pub endpoint: String,
    /// Jitter seed for the volume chart; changes with every new analysis
    pub chart_seed: u64,
    tx_generation: u64,
    analysis_generation: u64,
    pending: PendingRequests,
    pending_copy: Option<String>,
}

impl App {
    pub fn new(endpoint: impl Into<String>, time_display: TimeDisplay) -> Self {
        Self {
            ctx: Context::default(),
            transactions: Vec::new(),
            analysis: None,
            initial_loading: false,
            transactions_refreshing: false,
            analysis_refreshing: false,
            error: None,
            expanded: HashSet::new(),
            tx_panel: TxPanel::new(),
            advice_panel: AdvicePanel::new(),
            focus: Focus::Transactions,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            pending_chord: None,
            help_open: false,
            should_quit: false,
            time_display,
            endpoint: endpoint.into(),
            chart_seed: 0,
            tx_generation: 0,
            analysis_generation: 0,
            pending: PendingRequests::default(),
            pending_copy: None,
        }
    }

    pub fn sync_context(&mut self) {
        self.tx_panel.clamp(self.transactions.len());
        self.ctx.tx_count = self.transactions.len();
        self.ctx.selected_hash = self.selected_transaction().map(|tx| tx.hash.clone());
        self.ctx.has_analysis = self.analysis.is_some();
        self.ctx.analysis_refreshing = self.analysis_refreshing;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.clear_expired_chord();
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn active_tab(&self) -> AdviceTab {
        self.advice_panel.tab()
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.tx_panel.selected())
    }

    pub fn is_expanded(&self, hash: &str) -> bool {
        self.expanded.contains(hash)
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::build(ChartSource::from(self.analysis.as_ref()), self.chart_seed)
    }

    // --- fetch lifecycle ---------------------------------------------------

    /// Queue the concurrent startup fetch of both resources
    pub fn request_initial_load(&mut self) {
        self.initial_loading = true;
        self.tx_generation += 1;
        self.analysis_generation += 1;
        self.pending.initial = Some((self.tx_generation, self.analysis_generation));
    }

    /// Queue a transactions refresh unless one is already in flight
    pub fn request_transactions_refresh(&mut self) -> bool {
        if self.transactions_refreshing {
            return false;
        }
        self.transactions_refreshing = true;
        self.tx_generation += 1;
        self.pending.transactions = Some(self.tx_generation);
        true
    }

    /// Queue an analysis refresh unless one is already in flight
    pub fn request_analysis_refresh(&mut self) -> bool {
        if self.analysis_refreshing {
            return false;
        }
        self.analysis_refreshing = true;
        self.analysis_generation += 1;
        self.pending.analysis = Some(self.analysis_generation);
        true
    }

    pub fn take_initial_load_request(&mut self) -> Option<(u64, u64)> {
        self.pending.initial.take()
    }

    pub fn take_transactions_request(&mut self) -> Option<u64> {
        self.pending.transactions.take()
    }

    pub fn take_analysis_request(&mut self) -> Option<u64> {
        self.pending.analysis.take()
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    /// Apply a `/transactions` outcome. Results from superseded requests
    /// are dropped.
    pub fn apply_transactions(&mut self, generation: u64, result: Result<Vec<Transaction>, ApiError>) {
        if generation != self.tx_generation {
            debug!(generation, current = self.tx_generation, "dropping stale transactions result");
            return;
        }
        self.transactions_refreshing = false;

        match result {
            Ok(transactions) => {
                self.expanded
                    .retain(|hash| transactions.iter().any(|tx| &tx.hash == hash));
                self.transactions = transactions;
                self.error = None;
                self.tx_panel.clamp(self.transactions.len());
                self.set_status(
                    format!("Loaded {} transactions", self.transactions.len()),
                    StatusLevel::Info,
                );
            }
            Err(err) if err.is_unsuccessful() => {
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
            Err(_) => {
                self.error = Some(CONNECT_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Apply an `/analysis` outcome. Failures keep the previous result and
    /// stay off screen.
    pub fn apply_analysis(&mut self, generation: u64, result: Result<AnalysisResult, ApiError>) {
        if generation != self.analysis_generation {
            debug!(generation, current = self.analysis_generation, "dropping stale analysis result");
            return;
        }
        self.analysis_refreshing = false;

        if let Ok(analysis) = result {
            self.analysis = Some(analysis);
            self.chart_seed = rand::random();
        }
    }

    pub fn finish_initial_load(&mut self) {
        self.initial_loading = false;
    }

    pub fn apply_runtime_error(&mut self, message: String) {
        self.set_status(message, StatusLevel::Error);
    }

    // --- input -------------------------------------------------------------

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    /// Hand a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) {
        self.sync_context();
        let action = match self.focus {
            Focus::Transactions => self.tx_panel.handle_key(key, &self.ctx),
            Focus::Advice => self.advice_panel.handle_key(key, &self.ctx),
        };
        self.apply_action(action);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Route a mouse event against the layout of a frame of `size`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if self.help_open || self.input_mode == InputMode::Command {
            return;
        }
        let areas = layout::areas(size, self.error.is_some());
        let region = areas.region_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match region {
                Region::Transactions => self.focus = Focus::Transactions,
                Region::Advice => self.focus = Focus::Advice,
                Region::AdviceTabs => {
                    self.focus = Focus::Advice;
                    // The tab bar only exists once there is a result
                    if self.analysis.is_some() {
                        let offset = mouse.column.saturating_sub(areas.advice.x + 1);
                        if let Some(tab) = tab_at(offset) {
                            self.apply_action(Action::SelectTab(tab));
                        }
                    }
                }
                Region::Other => {}
            },
            MouseEventKind::ScrollUp if region == Region::Transactions => {
                self.tx_panel.move_up();
            }
            MouseEventKind::ScrollDown if region == Region::Transactions => {
                self.tx_panel.move_down(self.transactions.len());
            }
            _ => {}
        }
    }

    pub fn go_to_top(&mut self) {
        if self.focus == Focus::Transactions {
            self.tx_panel.select_first();
        }
    }

    pub fn set_chord(&mut self, key: char) {
        self.pending_chord = Some(PendingChord {
            key,
            since: Instant::now(),
        });
    }

    pub fn consume_chord(&mut self, key: char) -> bool {
        let Some(chord) = self.pending_chord.as_ref() else {
            return false;
        };
        if chord.key != key {
            return false;
        }
        if chord.since.elapsed() > CHORD_TTL {
            self.pending_chord = None;
            return false;
        }
        self.pending_chord = None;
        true
    }

    pub fn clear_chord(&mut self) {
        self.pending_chord = None;
    }

    fn clear_expired_chord(&mut self) {
        let Some(chord) = self.pending_chord.as_ref() else {
            return;
        };
        if chord.since.elapsed() > CHORD_TTL {
            self.pending_chord = None;
        }
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Refresh(target) => Action::Refresh(*target),
            Command::Tab(tab) => Action::SelectTab(*tab),
            Command::Expand => Action::ExpandAll,
            Command::Collapse => Action::CollapseAll,
            Command::Clear => Action::DismissError,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or panel
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Refresh(target) => self.refresh(target),
            Action::SelectTab(tab) => self.advice_panel.set_tab(tab),
            Action::ToggleRow(hash) => {
                if !self.expanded.remove(&hash) {
                    self.expanded.insert(hash);
                }
            }
            Action::ExpandAll => {
                self.expanded = self.transactions.iter().map(|tx| tx.hash.clone()).collect();
            }
            Action::CollapseAll => self.expanded.clear(),
            Action::DismissError => self.error = None,
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }

    fn refresh(&mut self, target: RefreshTarget) {
        let (tx, analysis) = match target {
            RefreshTarget::Transactions => (true, false),
            RefreshTarget::Analysis => (false, true),
            RefreshTarget::All => (true, true),
        };
        if tx {
            if self.request_transactions_refresh() {
                self.set_status("Refreshing transactions...", StatusLevel::Info);
            } else {
                self.set_status("Transactions are already refreshing", StatusLevel::Warn);
            }
        }
        if analysis {
            if self.request_analysis_refresh() {
                self.set_status("Refreshing analysis...", StatusLevel::Info);
            } else {
                self.set_status("Analysis is already refreshing", StatusLevel::Warn);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdvisorAnalysis;

    fn tx(hash: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            from_addr: "0xfrom".into(),
            to_addr: "0xto".into(),
            value: "1000000000000000000".into(),
            time: Some(1_704_067_200),
            raw_json: String::new(),
            parsed_json: String::new(),
        }
    }

    fn unsuccessful() -> ApiError {
        ApiError::Unsuccessful {
            status: 200,
            message: None,
        }
    }

    fn decode_error() -> ApiError {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        ApiError::Decode { status: 502, source }
    }

    fn loaded_app() -> App {
        let mut app = App::new("http://localhost:8000", TimeDisplay::Utc);
        app.request_initial_load();
        let (tx_gen, analysis_gen) = app.take_initial_load_request().unwrap();
        app.apply_transactions(tx_gen, Ok(vec![tx("0xa"), tx("0xb")]));
        app.apply_analysis(analysis_gen, Ok(AnalysisResult::default()));
        app.finish_initial_load();
        app
    }

    #[test]
    fn test_initial_load_issues_both_fetches() {
        let mut app = App::new("x", TimeDisplay::Local);
        app.request_initial_load();
        assert!(app.initial_loading);
        assert_eq!(app.take_initial_load_request(), Some((1, 1)));
        assert_eq!(app.take_initial_load_request(), None);
        app.finish_initial_load();
        assert!(!app.initial_loading);
    }

    #[test]
    fn test_unsuccessful_transactions_keep_list() {
        let mut app = loaded_app();
        let before = app.transactions.clone();
        app.request_transactions_refresh();
        let generation = app.take_transactions_request().unwrap();
        app.apply_transactions(generation, Err(unsuccessful()));
        assert_eq!(app.transactions, before);
        assert_eq!(app.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert!(!app.transactions_refreshing);
    }

    #[test]
    fn test_transport_failure_sets_connect_banner() {
        let mut app = App::new("x", TimeDisplay::Local);
        app.request_initial_load();
        let (tx_gen, _) = app.take_initial_load_request().unwrap();
        app.apply_transactions(tx_gen, Err(decode_error()));
        assert!(app.transactions.is_empty());
        assert_eq!(app.error.as_deref(), Some(CONNECT_FAILED_MESSAGE));
    }

    #[test]
    fn test_successful_fetch_clears_banner() {
        let mut app = loaded_app();
        app.error = Some(LOAD_FAILED_MESSAGE.to_string());
        app.request_transactions_refresh();
        let generation = app.take_transactions_request().unwrap();
        app.apply_transactions(generation, Ok(vec![tx("0xc")]));
        assert!(app.error.is_none());
        assert_eq!(app.transactions.len(), 1);
    }

    #[test]
    fn test_failed_analysis_keeps_result_without_banner() {
        let mut app = loaded_app();
        let advisor = AdvisorAnalysis {
            recommendation: Some("buy".into()),
            ..Default::default()
        };
        app.analysis = Some(AnalysisResult {
            advisor_analysis: Some(advisor),
            ..Default::default()
        });
        let before = app.analysis.clone();

        app.request_analysis_refresh();
        let generation = app.take_analysis_request().unwrap();
        app.apply_analysis(generation, Err(unsuccessful()));
        assert_eq!(app.analysis, before);
        assert!(app.error.is_none());
        assert!(!app.analysis_refreshing);
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut app = App::new("x", TimeDisplay::Local);
        app.request_initial_load();
        let (initial_tx, initial_analysis) = app.take_initial_load_request().unwrap();

        // A manual refresh supersedes the startup fetch
        app.request_transactions_refresh();
        app.request_analysis_refresh();
        let tx_gen = app.take_transactions_request().unwrap();
        let analysis_gen = app.take_analysis_request().unwrap();

        app.apply_transactions(tx_gen, Ok(vec![tx("0xnew")]));
        app.apply_transactions(initial_tx, Ok(vec![tx("0xold")]));
        assert_eq!(app.transactions[0].hash, "0xnew");

        app.apply_analysis(initial_analysis, Ok(AnalysisResult::default()));
        assert!(app.analysis.is_none());
        assert!(app.analysis_refreshing);
        app.apply_analysis(analysis_gen, Ok(AnalysisResult::default()));
        assert!(app.analysis.is_some());
    }

    #[test]
    fn test_refresh_in_flight_is_not_duplicated() {
        let mut app = loaded_app();
        app.apply_action(Action::Refresh(RefreshTarget::Analysis));
        assert!(app.take_analysis_request().is_some());
        app.apply_action(Action::Refresh(RefreshTarget::Analysis));
        assert!(app.take_analysis_request().is_none());
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));
    }

    #[test]
    fn test_refresh_all_queues_both() {
        let mut app = loaded_app();
        app.apply_action(Action::Refresh(RefreshTarget::All));
        assert!(app.take_transactions_request().is_some());
        assert!(app.take_analysis_request().is_some());
    }

    #[test]
    fn test_toggle_row_is_per_hash() {
        let mut app = loaded_app();
        app.apply_action(Action::ToggleRow("0xa".into()));
        assert!(app.is_expanded("0xa"));
        assert!(!app.is_expanded("0xb"));
        app.apply_action(Action::ToggleRow("0xb".into()));
        app.apply_action(Action::ToggleRow("0xa".into()));
        assert!(!app.is_expanded("0xa"));
        assert!(app.is_expanded("0xb"));
    }

    #[test]
    fn test_expansion_survives_replacement_for_present_hashes() {
        let mut app = loaded_app();
        app.apply_action(Action::ExpandAll);
        app.request_transactions_refresh();
        let generation = app.take_transactions_request().unwrap();
        app.apply_transactions(generation, Ok(vec![tx("0xb"), tx("0xc")]));
        assert!(app.is_expanded("0xb"));
        assert!(!app.is_expanded("0xa"));
        assert!(!app.is_expanded("0xc"));
    }

    #[test]
    fn test_commands_drive_state() {
        let mut app = loaded_app();
        app.error = Some(LOAD_FAILED_MESSAGE.to_string());

        app.command.input = "tab industry".into();
        app.apply_command();
        assert_eq!(app.active_tab(), AdviceTab::Industry);
        assert_eq!(app.input_mode, InputMode::Normal);

        app.command.input = "clear".into();
        app.apply_command();
        assert!(app.error.is_none());

        app.command.input = "expand".into();
        app.apply_command();
        assert_eq!(app.expanded.len(), 2);

        app.command.input = "bogus".into();
        app.apply_command();
        assert_eq!(
            app.status_text(),
            Some(("Unknown command: bogus", StatusLevel::Warn))
        );
        assert_eq!(app.command.last.as_deref(), Some("bogus"));
    }

    #[test]
    fn test_new_analysis_reseeds_charts() {
        let mut app = loaded_app();
        app.chart_seed = 0;
        let first = app.chart_data();
        assert_eq!(first, app.chart_data());

        let mut reseeded = false;
        for _ in 0..4 {
            app.request_analysis_refresh();
            let generation = app.take_analysis_request().unwrap();
            app.apply_analysis(generation, Ok(AnalysisResult::default()));
            reseeded |= app.chart_seed != 0;
        }
        assert!(reseeded);
    }

    #[test]
    fn test_context_tracks_selection() {
        let mut app = loaded_app();
        app.tx_panel.select_last(app.transactions.len());
        app.sync_context();
        assert_eq!(app.ctx.tx_count, 2);
        assert_eq!(app.ctx.selected_hash.as_deref(), Some("0xb"));
        assert!(app.ctx.has_analysis);
    }

    #[test]
    fn test_chord() {
        let mut app = App::new("x", TimeDisplay::Local);
        assert!(!app.consume_chord('g'));
        app.set_chord('g');
        assert!(!app.consume_chord('h'));
        assert!(app.consume_chord('g'));
        assert!(!app.consume_chord('g'));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_focuses_panel_and_selects_tab() {
        let mut app = loaded_app();
        let size = Rect::new(0, 0, 160, 48);
        let areas = layout::areas(size, false);
        let click = MouseEventKind::Down(MouseButton::Left);

        app.handle_mouse(mouse(click, areas.advice.x + 5, areas.advice.y + 6), size);
        assert_eq!(app.focus, Focus::Advice);
        assert_eq!(app.active_tab(), AdviceTab::Advisor);

        // " 1 Advisor │ 2 Position │ 3 Signal ..." -> column 27 is "3 Signal"
        let tab_row = areas.advice.y + 1;
        app.handle_mouse(mouse(click, areas.advice.x + 1 + 27, tab_row), size);
        assert_eq!(app.active_tab(), AdviceTab::Signal);

        app.handle_mouse(mouse(click, areas.transactions.x + 3, areas.transactions.y + 2), size);
        assert_eq!(app.focus, Focus::Transactions);
    }

    #[test]
    fn test_tab_row_click_without_result_only_focuses() {
        let mut app = App::new("x", TimeDisplay::Utc);
        let size = Rect::new(0, 0, 160, 48);
        let areas = layout::areas(size, false);
        let click = MouseEventKind::Down(MouseButton::Left);
        app.handle_mouse(mouse(click, areas.advice.x + 1 + 27, areas.advice.y + 1), size);
        assert_eq!(app.focus, Focus::Advice);
        assert_eq!(app.active_tab(), AdviceTab::Advisor);
    }

    #[test]
    fn test_wheel_over_table_moves_selection() {
        let mut app = loaded_app();
        let size = Rect::new(0, 0, 160, 48);
        let areas = layout::areas(size, false);
        let (col, row) = (areas.transactions.x + 3, areas.transactions.y + 2);

        app.handle_mouse(mouse(MouseEventKind::ScrollDown, col, row), size);
        assert_eq!(app.tx_panel.selected(), 1);
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, col, row), size);
        assert_eq!(app.tx_panel.selected(), 1);
        app.handle_mouse(mouse(MouseEventKind::ScrollUp, col, row), size);
        assert_eq!(app.tx_panel.selected(), 0);

        // Wheel elsewhere leaves the table alone
        app.handle_mouse(
            mouse(MouseEventKind::ScrollDown, areas.charts.x + 2, areas.charts.y + 2),
            size,
        );
        assert_eq!(app.tx_panel.selected(), 0);
    }

    #[test]
    fn test_mouse_ignored_in_command_mode() {
        let mut app = loaded_app();
        let size = Rect::new(0, 0, 160, 48);
        let areas = layout::areas(size, false);
        app.enter_command();
        app.handle_mouse(
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                areas.advice.x + 5,
                areas.advice.y + 6,
            ),
            size,
        );
        assert_eq!(app.focus, Focus::Transactions);
    }
}
