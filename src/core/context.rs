//! Shared context passed to panels

/// Read-only snapshot of the store a panel needs to interpret a key
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Rows currently in the transaction table
    pub tx_count: usize,

    /// Hash of the highlighted row, if any
    pub selected_hash: Option<String>,

    /// Whether an analysis result is on screen
    pub has_analysis: bool,

    pub analysis_refreshing: bool,
}
