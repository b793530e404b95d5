//! Actions that panels and commands return to the app store

/// Actions returned by panels to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Re-run one or both backend fetches
    Refresh(RefreshTarget),

    /// Switch the advice panel to a view
    SelectTab(AdviceTab),

    /// Flip the expanded state of the row with this hash
    ToggleRow(String),

    ExpandAll,
    CollapseAll,

    /// Hide the error banner
    DismissError,

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    ToggleHelp,

    /// Request quit
    Quit,
}

/// Which backend resource to fetch again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    Transactions,
    Analysis,
    All,
}

/// The four views of the advice panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdviceTab {
    #[default]
    Advisor,
    Position,
    Signal,
    Industry,
}

impl AdviceTab {
    pub const ALL: [AdviceTab; 4] = [
        AdviceTab::Advisor,
        AdviceTab::Position,
        AdviceTab::Signal,
        AdviceTab::Industry,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AdviceTab::Advisor => "Advisor",
            AdviceTab::Position => "Position",
            AdviceTab::Signal => "Signal",
            AdviceTab::Industry => "Industry",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            AdviceTab::Advisor => '1',
            AdviceTab::Position => '2',
            AdviceTab::Signal => '3',
            AdviceTab::Industry => '4',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.shortcut() == key)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "advisor" | "advice" => Some(AdviceTab::Advisor),
            "position" | "pos" => Some(AdviceTab::Position),
            "signal" | "sig" => Some(AdviceTab::Signal),
            "industry" | "ind" => Some(AdviceTab::Industry),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            AdviceTab::Advisor => AdviceTab::Position,
            AdviceTab::Position => AdviceTab::Signal,
            AdviceTab::Signal => AdviceTab::Industry,
            AdviceTab::Industry => AdviceTab::Advisor,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AdviceTab::Advisor => AdviceTab::Industry,
            AdviceTab::Position => AdviceTab::Advisor,
            AdviceTab::Signal => AdviceTab::Position,
            AdviceTab::Industry => AdviceTab::Signal,
        }
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
