//! Chart data for the industry / volume panel
//!
//! Everything here is derived. Without an analysis result the panel shows a
//! fixed sample; with one, the sample is reshaped around what the analysis
//! reports. The volume series in particular is illustrative only: the
//! backend has no per-period history, so real aggregates are spread over the
//! sample weeks with seeded jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::format::format_percent_rounded;
use super::lenient::leading_f64;
use super::model::{AnalysisResult, IndustryAnalysis, PositionAnalysis};

pub const SECTOR_BASELINE: [(&str, u32); 5] = [
    ("DeFi", 45),
    ("NFT", 20),
    ("Gaming", 15),
    ("Infrastructure", 12),
    ("Payment", 8),
];

pub const ECOSYSTEM_BASELINE: [(&str, u32); 4] = [
    ("Ethereum", 60),
    ("BSC", 20),
    ("Polygon", 12),
    ("Arbitrum", 8),
];

const SECTOR_DOMINANT: u32 = 60;
const ECOSYSTEM_DOMINANT: u32 = 70;

const SAMPLE_VOLUME: [(&str, f64, u64); 4] = [
    ("Week 1", 12.5, 45),
    ("Week 2", 18.2, 62),
    ("Week 3", 15.8, 58),
    ("Week 4", 22.1, 78),
];

const FALLBACK_TOTAL_VOLUME: &str = "12.5";
const FALLBACK_AVG_SIZE: &str = "1.25";
const FALLBACK_DIVERSIFICATION: &str = "75%";

/// One slice of a distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub name: &'static str,
    pub value: u32,
}

impl Share {
    /// Whole-number share of `total`, as shown on the slice label
    pub fn percent_of(&self, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        (f64::from(self.value) * 100.0 / f64::from(total)).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumePoint {
    pub label: &'static str,
    /// ETH
    pub volume: f64,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTiles {
    pub total_volume: String,
    pub avg_transaction_size: String,
    pub diversification: String,
}

/// Which branch the panel renders
#[derive(Debug, Clone, Copy)]
pub enum ChartSource<'a> {
    Sample,
    Analysis(&'a AnalysisResult),
}

impl<'a> From<Option<&'a AnalysisResult>> for ChartSource<'a> {
    fn from(result: Option<&'a AnalysisResult>) -> Self {
        match result {
            Some(result) => ChartSource::Analysis(result),
            None => ChartSource::Sample,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub from_analysis: bool,
    pub sectors: Vec<Share>,
    pub ecosystems: Vec<Share>,
    pub volume: Vec<VolumePoint>,
    pub tiles: SummaryTiles,
}

impl ChartData {
    pub fn build(source: ChartSource<'_>, seed: u64) -> Self {
        match source {
            ChartSource::Sample => Self {
                from_analysis: false,
                sectors: baseline(&SECTOR_BASELINE),
                ecosystems: baseline(&ECOSYSTEM_BASELINE),
                volume: sample_volume(),
                tiles: summary_tiles(None),
            },
            ChartSource::Analysis(result) => {
                let industry = result.industry_analysis.as_ref();
                let position = result.position_analysis.as_ref();
                Self {
                    from_analysis: true,
                    sectors: sector_distribution(industry),
                    ecosystems: ecosystem_distribution(industry),
                    volume: volume_series(position, seed),
                    tiles: summary_tiles(position),
                }
            }
        }
    }

    pub fn note(&self) -> &'static str {
        if self.from_analysis {
            "Charts are derived from the analysis of your transactions and show how the portfolio spreads across sectors and ecosystems."
        } else {
            "Charts show sample data; real figures appear once an analysis result is available."
        }
    }
}

pub fn sector_distribution(industry: Option<&IndustryAnalysis>) -> Vec<Share> {
    let primary = industry.and_then(|i| i.primary_sector.as_deref());
    boost(&SECTOR_BASELINE, primary, SECTOR_DOMINANT)
}

pub fn ecosystem_distribution(industry: Option<&IndustryAnalysis>) -> Vec<Share> {
    let ecosystem = industry.and_then(|i| i.ecosystem.as_deref());
    boost(&ECOSYSTEM_BASELINE, ecosystem, ECOSYSTEM_DOMINANT)
}

/// Give the matching category `dominant` and split the rest evenly.
/// No match leaves the baseline untouched.
fn boost(base: &[(&'static str, u32)], name: Option<&str>, dominant: u32) -> Vec<Share> {
    let mut shares = baseline(base);
    let Some(name) = name else {
        return shares;
    };
    let Some(hit) = shares
        .iter()
        .position(|share| share.name.to_lowercase() == name.to_lowercase())
    else {
        return shares;
    };

    let others = (shares.len() - 1) as f64;
    let each = (f64::from(100 - dominant) / others).round() as u32;
    for (idx, share) in shares.iter_mut().enumerate() {
        share.value = if idx == hit { dominant } else { each };
    }
    shares
}

fn baseline(base: &[(&'static str, u32)]) -> Vec<Share> {
    base.iter()
        .map(|(name, value)| Share {
            name: *name,
            value: *value,
        })
        .collect()
}

fn sample_volume() -> Vec<VolumePoint> {
    SAMPLE_VOLUME
        .iter()
        .map(|(label, volume, transactions)| VolumePoint {
            label: *label,
            volume: *volume,
            transactions: *transactions,
        })
        .collect()
}

/// Sample weeks rescaled by the reported aggregates, jittered by +-20%.
pub fn volume_series(position: Option<&PositionAnalysis>, seed: u64) -> Vec<VolumePoint> {
    let Some((total, avg)) = position.and_then(aggregates) else {
        return sample_volume();
    };

    let mut rng = StdRng::seed_from_u64(seed);
    SAMPLE_VOLUME
        .iter()
        .map(|(label, _, _)| {
            let volume = total * rng.gen_range(0.8..1.2);
            let transactions = if avg > 0.0 {
                (total / avg * rng.gen_range(0.8..1.2)).round() as u64
            } else {
                0
            };
            VolumePoint {
                label: *label,
                volume,
                transactions,
            }
        })
        .collect()
}

fn aggregates(position: &PositionAnalysis) -> Option<(f64, f64)> {
    let total = leading_f64(position.total_volume.as_deref()?)?;
    let avg = leading_f64(position.avg_transaction_size.as_deref()?)?;
    Some((total, avg))
}

pub fn summary_tiles(position: Option<&PositionAnalysis>) -> SummaryTiles {
    SummaryTiles {
        total_volume: position
            .and_then(|p| p.total_volume.clone())
            .unwrap_or_else(|| FALLBACK_TOTAL_VOLUME.to_string()),
        avg_transaction_size: position
            .and_then(|p| p.avg_transaction_size.clone())
            .unwrap_or_else(|| FALLBACK_AVG_SIZE.to_string()),
        diversification: position
            .and_then(|p| p.diversification_score)
            .map(format_percent_rounded)
            .unwrap_or_else(|| FALLBACK_DIVERSIFICATION.to_string()),
    }
}
