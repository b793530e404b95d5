//! Command parser for the : command system

use super::action::{AdviceTab, RefreshTarget};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh(RefreshTarget),
    Tab(AdviceTab),
    /// Expand every transaction row
    Expand,
    /// Collapse every transaction row
    Collapse,
    /// Dismiss the error banner
    Clear,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "refresh" | "reload" | "r" => match args.as_deref() {
            None | Some("all") => Command::Refresh(RefreshTarget::All),
            Some("tx" | "txs" | "transactions") => Command::Refresh(RefreshTarget::Transactions),
            Some("analysis" | "advice") => Command::Refresh(RefreshTarget::Analysis),
            Some(_) => Command::Unknown(input.to_string()),
        },
        "tab" => match args.as_deref().and_then(AdviceTab::from_name) {
            Some(tab) => Command::Tab(tab),
            None => Command::Unknown(input.to_string()),
        },
        "expand" => Command::Expand,
        "collapse" => Command::Collapse,
        "clear" | "dismiss" => Command::Clear,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
