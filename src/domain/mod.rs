//! Dashboard domain models and pure derivations
//!
//! Nothing in this layer performs I/O. It defines the backend payloads,
//! the display formatters, the categorical status palette and the chart
//! derivations.

pub mod charts;
pub mod format;
mod lenient;
pub mod model;
pub mod status;

pub use charts::{ChartData, ChartSource, Share, SummaryTiles, VolumePoint};
pub use format::TimeDisplay;
pub use model::{
    AdvisorAnalysis, AnalysisMetadata, AnalysisResponse, AnalysisResult, IndustryAnalysis,
    ParsedTransaction, PositionAnalysis, SignalAnalysis, Transaction, TransactionsResponse,
};
pub use status::{Badge, Recommendation, RiskLevel, Sentiment, StatusColor, TxAction};
