use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::analytics::performance::safe_div;
use crate::models::TradeRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReward {
    pub trade_id: String,
    pub date: NaiveDate,
    pub risk: f64,
    pub reward: f64,
    pub ratio: f64,
}

/// Risk, reward and their ratio for one trade.
///
/// Returns `None` unless entry, exit and stop all hold a finite price. A zero
/// risk (stop at entry) yields a ratio of 0.
pub fn calculate(trade: &TradeRecord) -> Option<RiskReward> {
    let entry = trade.entry_price.parse()?;
    let exit = trade.exit_price.as_ref()?.parse()?;
    let stop = trade.stop_loss.as_ref()?.parse()?;

    let risk = (entry - stop).abs();
    let reward = (exit - entry).abs();
    let ratio = if risk > 0.0 { safe_div(reward, risk) } else { 0.0 };

    Some(RiskReward {
        trade_id: trade.id.clone(),
        date: trade.date,
        risk,
        reward,
        ratio,
    })
}

pub fn analyze<T: Borrow<TradeRecord>>(trades: &[T]) -> Vec<RiskReward> {
    trades.iter().filter_map(|t| calculate(t.borrow())).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardSummary {
    pub trades: usize,
    pub avg_ratio: f64,
    pub avg_risk: f64,
    pub avg_reward: f64,
    /// Trades whose reward at least matched their risk.
    pub favorable: usize,
}

impl RiskRewardSummary {
    pub fn from_results(results: &[RiskReward]) -> Self {
        let n = results.len() as f64;
        Self {
            trades: results.len(),
            avg_ratio: safe_div(results.iter().map(|r| r.ratio).sum(), n),
            avg_risk: safe_div(results.iter().map(|r| r.risk).sum(), n),
            avg_reward: safe_div(results.iter().map(|r| r.reward).sum(), n),
            favorable: results.iter().filter(|r| r.ratio >= 1.0).count(),
        }
    }
}
