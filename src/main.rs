use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cryptodash::app::{App, Focus, InputMode, StatusLevel};
use cryptodash::config;
use cryptodash::core::{Action, AdviceTab, RefreshTarget};
use cryptodash::domain::TimeDisplay;
use cryptodash::infrastructure::api::{normalize_base_url, BackendConfig, HttpBackend};
use cryptodash::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use cryptodash::ui;

#[derive(Debug, Parser)]
#[command(
    name = "cryptodash",
    version,
    about = "CryptoDash: transaction history and AI investment advice in the terminal"
)]
struct Args {
    /// Backend base URL (e.g. http://localhost:8000)
    #[arg(long)]
    api: Option<String>,

    /// Number of transactions to request
    #[arg(long)]
    limit: Option<usize>,

    /// Show timestamps in UTC instead of local time
    #[arg(long)]
    utc: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log.file.clone())
        .or_else(config::default_log_path);
    init_tracing(log_path.as_deref(), config.log.level.as_deref());
    if let Err(err) = &loaded {
        warn!("ignoring config file: {err:#}");
    }

    let base_url = normalize_base_url(args.api.as_deref().unwrap_or(&config.api.base_url));
    let backend_config = BackendConfig {
        base_url: base_url.clone(),
        transactions_limit: args.limit.unwrap_or(config.api.transactions_limit),
        timeout: config.api.request_timeout(),
    };
    let time_display = if args.utc {
        TimeDisplay::Utc
    } else {
        config.ui.time_zone
    };
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(16));
    info!(
        base_url = %backend_config.base_url,
        limit = backend_config.transactions_limit,
        "starting cryptodash"
    );

    let backend = HttpBackend::new(backend_config).context("failed to build HTTP client")?;
    let runtime = RuntimeBridge::new(Arc::new(backend))?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(base_url, time_display);
    app.request_initial_load();
    app.set_status("Connecting...", StatusLevel::Info);

    let res = run_app(&mut terminal, app, runtime, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Log to a file; stdout belongs to the terminal UI. Logging stays off
/// when the file cannot be opened.
fn init_tracing(path: Option<&Path>, level: Option<&str>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, terminal.size()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        pump_background(&mut app, &runtime);
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::TransactionsFetched { generation, result } => {
                app.apply_transactions(generation, result)
            }
            RuntimeEvent::AnalysisFetched { generation, result } => {
                app.apply_analysis(generation, result)
            }
            RuntimeEvent::InitialLoadComplete => app.finish_initial_load(),
            RuntimeEvent::Error { message } => {
                warn!(%message, "runtime error");
                app.apply_runtime_error(message);
            }
        }
    }

    if let Some((tx_generation, analysis_generation)) = app.take_initial_load_request() {
        send_or_report(
            app,
            runtime,
            RuntimeCommand::LoadInitial {
                tx_generation,
                analysis_generation,
            },
        );
    }
    if let Some(generation) = app.take_transactions_request() {
        send_or_report(app, runtime, RuntimeCommand::RefreshTransactions { generation });
    }
    if let Some(generation) = app.take_analysis_request() {
        send_or_report(app, runtime, RuntimeCommand::RefreshAnalysis { generation });
    }
    if let Some(text) = app.take_copy_request() {
        copy_to_clipboard(app, text);
    }
}

fn send_or_report(app: &mut App, runtime: &RuntimeBridge, cmd: RuntimeCommand) {
    if let Err(err) = runtime.send(cmd) {
        app.set_status(format!("{err:#}"), StatusLevel::Error);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Char('g') {
        app.clear_chord();
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.apply_action(Action::Quit)
        }
        (KeyCode::Char('q'), _) => app.apply_action(Action::Quit),
        (KeyCode::Char('?'), _) => app.apply_action(Action::ToggleHelp),
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char('t'), _) => app.apply_action(Action::Refresh(RefreshTarget::Transactions)),
        (KeyCode::Char('r'), _) => app.apply_action(Action::Refresh(RefreshTarget::Analysis)),
        (KeyCode::Char('x'), _) => app.apply_action(Action::DismissError),
        (KeyCode::Char('h'), _) | (KeyCode::Char('l'), _) => app.cycle_focus(),
        (KeyCode::Char(ch @ '1'..='4'), _) => {
            if let Some(tab) = AdviceTab::from_shortcut(ch) {
                app.apply_action(Action::SelectTab(tab));
            }
        }
        (KeyCode::Char('g'), _) => {
            if app.consume_chord('g') {
                app.go_to_top();
            } else {
                app.set_chord('g');
            }
        }
        (KeyCode::Tab, _) if app.focus == Focus::Transactions => app.cycle_focus(),
        (KeyCode::Left, _) | (KeyCode::Right, _) => app.cycle_focus(),
        (KeyCode::Esc, _) => app.clear_chord(),
        _ => app.dispatch_to_focused(key),
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text.as_str()).is_ok() {
                let shown = if text.chars().count() > 20 {
                    format!("{}...", text.chars().take(20).collect::<String>())
                } else {
                    text
                };
                app.set_status(format!("Copied: {shown}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
