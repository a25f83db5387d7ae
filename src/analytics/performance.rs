use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::models::{StrategyRecord, TradeRecord};

const UNASSIGNED: &str = "Unassigned";

/// Division that never leaks NaN or infinity to the caller.
pub fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let r = num / den;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// `part / whole * 100`, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    safe_div(part as f64 * 100.0, whole as f64)
}

pub fn total_pnl<T: Borrow<TradeRecord>>(trades: &[T]) -> f64 {
    trades.iter().map(|t| t.borrow().pnl()).sum()
}

pub fn win_rate<T: Borrow<TradeRecord>>(trades: &[T]) -> f64 {
    let wins = trades
        .iter()
        .map(|t| t.borrow())
        .filter(|t| t.is_win())
        .count();
    percent(wins, trades.len())
}

pub fn avg_pnl<T: Borrow<TradeRecord>>(trades: &[T]) -> f64 {
    safe_div(total_pnl(trades), trades.len() as f64)
}

/// Sum of whole-unit quantities, saturating at `u64::MAX`.
pub fn total_volume<T: Borrow<TradeRecord>>(trades: &[T]) -> u64 {
    trades
        .iter()
        .map(|t| t.borrow().volume())
        .fold(0u64, |acc, v| acc.saturating_add(v))
}

/// Groups trades under a derived key in a single pass.
///
/// Keys come back in ascending order; members keep input order.
pub fn group_by<'a, T, K, F>(trades: &'a [T], key: F) -> BTreeMap<K, Vec<&'a TradeRecord>>
where
    T: Borrow<TradeRecord>,
    K: Ord,
    F: Fn(&TradeRecord) -> K,
{
    trades.iter().fold(BTreeMap::new(), |mut acc, t| {
        let t = t.borrow();
        acc.entry(key(t)).or_insert_with(Vec::new).push(t);
        acc
    })
}

/// Aggregate for one labelled subset of trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortStats {
    pub label: String,
    pub trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    pub win_rate: f64,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
}

impl CohortStats {
    pub fn from_trades<T: Borrow<TradeRecord>>(label: &str, trades: &[T]) -> Self {
        Self {
            label: label.to_string(),
            trades: trades.len(),
            total_pnl: total_pnl(trades),
            win_rate: win_rate(trades),
            avg_pnl: avg_pnl(trades),
        }
    }
}

/// Headline numbers for a whole trade set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub profit_factor: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub total_volume: u64,
}

impl PerformanceStats {
    pub fn from_trades<T: Borrow<TradeRecord>>(trades: &[T]) -> Self {
        let pnls: Vec<f64> = trades.iter().map(|t| t.borrow().pnl()).collect();
        let wins: Vec<f64> = pnls.iter().copied().filter(|p| *p > 0.0).collect();
        let losses: Vec<f64> = pnls.iter().copied().filter(|p| *p <= 0.0).collect();

        let gross_profit: f64 = wins.iter().sum();
        let gross_loss: f64 = losses.iter().sum();

        let best_trade = pnls.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst_trade = pnls.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            total_trades: trades.len(),
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            total_pnl: total_pnl(trades),
            avg_pnl: avg_pnl(trades),
            win_rate: win_rate(trades),
            avg_win: safe_div(gross_profit, wins.len() as f64),
            avg_loss: safe_div(gross_loss, losses.len() as f64),
            profit_factor: safe_div(gross_profit, gross_loss.abs()),
            best_trade: if pnls.is_empty() { 0.0 } else { best_trade },
            worst_trade: if pnls.is_empty() { 0.0 } else { worst_trade },
            total_volume: total_volume(trades),
        }
    }
}

/// Label a trade's strategy: its name when known, else its id, else "Unassigned".
pub fn strategy_key(trade: &TradeRecord, strategies: &[StrategyRecord]) -> String {
    match trade.strategy_id.as_deref() {
        Some(id) => strategies
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| id.to_string()),
        None => UNASSIGNED.to_string(),
    }
}

/// Per-strategy stats, best total P&L first.
pub fn by_strategy<T: Borrow<TradeRecord>>(
    trades: &[T],
    strategies: &[StrategyRecord],
) -> Vec<CohortStats> {
    let groups = group_by(trades, |t| strategy_key(t, strategies));
    rank_by_pnl(groups)
}

/// Per-instrument stats, best total P&L first.
pub fn by_instrument<T: Borrow<TradeRecord>>(trades: &[T]) -> Vec<CohortStats> {
    let groups = group_by(trades, |t| t.instrument.trim().to_string());
    rank_by_pnl(groups)
}

fn rank_by_pnl(groups: BTreeMap<String, Vec<&TradeRecord>>) -> Vec<CohortStats> {
    let mut out: Vec<CohortStats> = groups
        .iter()
        .map(|(label, members)| CohortStats::from_trades(label, members))
        .collect();
    out.sort_by(|a, b| b.total_pnl.total_cmp(&a.total_pnl));
    out
}
