//! Categorical fields and their status palette
//!
//! Every categorical value the backend emits is parsed into a closed enum
//! with an `Unknown` arm, then mapped onto one of four palette slots. The
//! mapping is total: unrecognised or missing input lands on
//! [`StatusColor::Neutral`].

/// Semantic palette shared by every badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Positive,
    Caution,
    Negative,
    Neutral,
}

/// Anything that can be shown as a coloured badge
pub trait Badge {
    fn color(&self) -> StatusColor;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
    Wait,
    Unknown,
}

impl Recommendation {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("buy") => Self::Buy,
            Some("hold") => Self::Hold,
            Some("sell") => Self::Sell,
            Some("wait") => Self::Wait,
            _ => Self::Unknown,
        }
    }
}

impl Badge for Recommendation {
    fn color(&self) -> StatusColor {
        match self {
            Self::Buy => StatusColor::Positive,
            Self::Hold => StatusColor::Caution,
            Self::Sell => StatusColor::Negative,
            Self::Wait | Self::Unknown => StatusColor::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Volatile,
    Neutral,
    Unknown,
}

impl Sentiment {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("bullish") => Self::Bullish,
            Some("bearish") => Self::Bearish,
            Some("volatile") => Self::Volatile,
            Some("neutral") => Self::Neutral,
            _ => Self::Unknown,
        }
    }
}

impl Badge for Sentiment {
    fn color(&self) -> StatusColor {
        match self {
            Self::Bullish => StatusColor::Positive,
            Self::Bearish => StatusColor::Negative,
            Self::Volatile => StatusColor::Caution,
            Self::Neutral | Self::Unknown => StatusColor::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("low") => Self::Low,
            Some("medium") => Self::Medium,
            Some("high") => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl Badge for RiskLevel {
    fn color(&self) -> StatusColor {
        match self {
            Self::Low => StatusColor::Positive,
            Self::Medium => StatusColor::Caution,
            Self::High => StatusColor::Negative,
            Self::Unknown => StatusColor::Neutral,
        }
    }
}

/// Transaction kind as classified by the backend parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxAction {
    Transfer,
    Swap,
    Mint,
    Burn,
    Unknown,
}

impl TxAction {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("transfer") => Self::Transfer,
            Some("swap") => Self::Swap,
            Some("mint") => Self::Mint,
            Some("burn") => Self::Burn,
            _ => Self::Unknown,
        }
    }
}

impl Badge for TxAction {
    fn color(&self) -> StatusColor {
        match self {
            Self::Mint => StatusColor::Positive,
            Self::Swap => StatusColor::Caution,
            Self::Burn => StatusColor::Negative,
            Self::Transfer | Self::Unknown => StatusColor::Neutral,
        }
    }
}
