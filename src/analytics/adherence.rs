use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::analytics::buckets::{bucket_weekly, tail};
use crate::analytics::performance::{percent, safe_div};
use crate::models::{AdherenceMap, ChecklistCategory, ChecklistItemDefinition, TradeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdherenceLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

/// Lower bound of each band, highest first. Anything below the last is Very Poor.
const LEVEL_THRESHOLDS: [(f64, AdherenceLevel); 4] = [
    (90.0, AdherenceLevel::Excellent),
    (75.0, AdherenceLevel::Good),
    (50.0, AdherenceLevel::Fair),
    (25.0, AdherenceLevel::Poor),
];

impl AdherenceLevel {
    pub fn from_score(score: f64) -> AdherenceLevel {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(AdherenceLevel::VeryPoor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdherenceLevel::Excellent => "Excellent",
            AdherenceLevel::Good => "Good",
            AdherenceLevel::Fair => "Fair",
            AdherenceLevel::Poor => "Poor",
            AdherenceLevel::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for AdherenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percentage of checklist items followed. An empty map scores 0.
pub fn score(map: &AdherenceMap) -> f64 {
    let followed = map.values().filter(|f| **f).count();
    percent(followed, map.len())
}

/// Score of a trade's checklist; trades without one score 0.
pub fn trade_score(trade: &TradeRecord) -> f64 {
    trade.checklist().map(score).unwrap_or(0.0)
}

pub fn trade_level(trade: &TradeRecord) -> AdherenceLevel {
    AdherenceLevel::from_score(trade_score(trade))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceSummary {
    pub total_trades: usize,
    pub trades_with_checklist: usize,
    /// Share of trades that carry checklist data, in percent.
    pub usage_rate: f64,
    /// Mean score over trades that carry checklist data.
    pub average_score: f64,
    pub level: AdherenceLevel,
}

impl AdherenceSummary {
    pub fn from_trades<T: Borrow<TradeRecord>>(trades: &[T]) -> Self {
        let scores: Vec<f64> = trades
            .iter()
            .map(|t| t.borrow())
            .filter(|t| t.has_checklist_data())
            .map(trade_score)
            .collect();
        let average_score = safe_div(scores.iter().sum(), scores.len() as f64);
        Self {
            total_trades: trades.len(),
            trades_with_checklist: scores.len(),
            usage_rate: percent(scores.len(), trades.len()),
            average_score,
            level: AdherenceLevel::from_score(average_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceTrendPoint {
    pub week_start: NaiveDate,
    pub trades: usize,
    pub average_score: f64,
}

/// Average adherence per week over trades with checklist data, latest `window` weeks.
pub fn weekly_adherence_trend<T: Borrow<TradeRecord>>(
    trades: &[T],
    window: usize,
) -> Vec<AdherenceTrendPoint> {
    let with_data: Vec<&TradeRecord> = trades
        .iter()
        .map(|t| t.borrow())
        .filter(|t| t.has_checklist_data())
        .collect();

    let points = bucket_weekly(&with_data)
        .into_iter()
        .map(|bucket| {
            let total: f64 = bucket.trades.iter().map(|t| trade_score(t)).sum();
            AdherenceTrendPoint {
                week_start: bucket.week_start,
                trades: bucket.trades.len(),
                average_score: safe_div(total, bucket.trades.len() as f64),
            }
        })
        .collect();
    tail(points, window)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCompliance {
    pub item_id: String,
    pub item: String,
    pub category: ChecklistCategory,
    pub followed: usize,
    pub not_followed: usize,
    pub compliance_rate: f64,
}

/// How often each defined checklist item was followed when it was recorded.
///
/// Items never recorded on any trade are left out, as are ids with no definition.
pub fn item_compliance<T: Borrow<TradeRecord>>(
    definitions: &[ChecklistItemDefinition],
    trades: &[T],
) -> Vec<ItemCompliance> {
    definitions
        .iter()
        .filter_map(|def| {
            let (followed, not_followed) = trades
                .iter()
                .filter_map(|t| t.borrow().checklist().and_then(|m| m.get(&def.id)))
                .fold((0, 0), |(f, n), v| if *v { (f + 1, n) } else { (f, n + 1) });
            if followed + not_followed == 0 {
                return None;
            }
            Some(ItemCompliance {
                item_id: def.id.clone(),
                item: def.name.clone(),
                category: def.category,
                followed,
                not_followed,
                compliance_rate: percent(followed, followed + not_followed),
            })
        })
        .collect()
}
