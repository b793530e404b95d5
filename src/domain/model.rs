//! Wire records for the dashboard backend
//!
//! Every optional field is explicit. Decoding is lenient at the field level
//! (see [`super::lenient`]): a malformed field turns into `None` rather than
//! rejecting the whole payload.

use serde::Deserialize;

use super::lenient;

/// A transaction row as returned by `GET /transactions`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub hash: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub from_addr: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub to_addr: String,
    /// Decimal integer string in wei
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub value: String,
    /// Unix seconds; `None` when the backend sent something unusable
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub raw_json: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub parsed_json: String,
}

impl Transaction {
    /// Decode the embedded AI-parsed record. Malformed JSON is absence.
    pub fn parsed(&self) -> Option<ParsedTransaction> {
        ParsedTransaction::from_json(&self.parsed_json)
    }
}

/// The per-transaction record the backend's parser stores in `parsed_json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedTransaction {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gas_used: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gas_price: Option<String>,
}

impl ParsedTransaction {
    /// Parse from the embedded JSON string. Anything that is not a JSON
    /// object yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// `"{amount} {token}"` when both halves are present
    pub fn amount_with_token(&self) -> Option<String> {
        match (self.amount.as_deref(), self.token.as_deref()) {
            (Some(amount), Some(token)) => Some(format!("{amount} {token}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PositionAnalysis {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub position_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub risk_tolerance: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub strategy_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub holding_period: Option<String>,
    /// Aggregate volume in ether, as a decimal string
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub total_volume: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub avg_transaction_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub diversification_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignalAnalysis {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub market_sentiment: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub trading_frequency: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub timing_quality: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub signal_strength: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub volume_trend: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub market_phase: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub signals: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndustryAnalysis {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub primary_sector: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ecosystem: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub protocol_interaction: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub token_categories: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub industry_trend: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub adoption_level: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub innovation_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdvisorAnalysis {
    /// 0-10
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub overall_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub risk_assessment: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence_level: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub key_strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub key_risks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub suggested_actions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub time_horizon: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub portfolio_allocation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub market_outlook: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub workflow_version: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub transaction_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub analysis_timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

/// Output of the multi-agent analysis workflow (`GET /analysis`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub position_analysis: Option<PositionAnalysis>,
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub signal_analysis: Option<SignalAnalysis>,
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub industry_analysis: Option<IndustryAnalysis>,
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub advisor_analysis: Option<AdvisorAnalysis>,
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub error: Option<String>,
}

/// Envelope of `GET /transactions`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: Option<u64>,
    /// Rows that fail to decode are dropped, the rest are kept
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub transactions: Vec<Transaction>,
}

/// Envelope of `GET /analysis`
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<AnalysisResult>,
    #[serde(default)]
    pub message: Option<String>,
}
