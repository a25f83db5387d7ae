use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::analytics::adherence::{trade_level, AdherenceLevel};
use crate::analytics::performance::{avg_pnl, group_by, win_rate, CohortStats};
use crate::models::{ChecklistCategory, ChecklistItemDefinition, TradeRecord};

/// Presentation order of adherence bands, best first.
const LEVEL_RANK: [(AdherenceLevel, u8); 5] = [
    (AdherenceLevel::Excellent, 0),
    (AdherenceLevel::Good, 1),
    (AdherenceLevel::Fair, 2),
    (AdherenceLevel::Poor, 3),
    (AdherenceLevel::VeryPoor, 4),
];

fn level_rank(level: AdherenceLevel) -> u8 {
    LEVEL_RANK
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, r)| *r)
        .unwrap_or(u8::MAX)
}

fn level_for_rank(rank: u8) -> Option<AdherenceLevel> {
    LEVEL_RANK.iter().find(|(_, r)| *r == rank).map(|(l, _)| *l)
}

/// Performance per adherence band, ordered Excellent through Very Poor.
///
/// Trades without a checklist land in Very Poor. Empty bands are omitted.
pub fn by_adherence_level<T: Borrow<TradeRecord>>(trades: &[T]) -> Vec<CohortStats> {
    group_by(trades, |t| level_rank(trade_level(t)))
        .into_iter()
        .filter_map(|(rank, members)| {
            let level = level_for_rank(rank)?;
            Some(CohortStats::from_trades(level.as_str(), &members))
        })
        .collect()
}

/// Followed vs not-followed comparison for one checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemImpact {
    pub item_id: String,
    pub item: String,
    pub category: ChecklistCategory,
    pub followed_trades: usize,
    pub not_followed_trades: usize,
    /// Average P&L of trades that followed the item.
    #[serde(rename = "followedPnL")]
    pub followed_pnl: f64,
    #[serde(rename = "notFollowedPnL")]
    pub not_followed_pnl: f64,
    pub followed_win_rate: f64,
    pub not_followed_win_rate: f64,
    pub impact: f64,
    pub win_rate_impact: f64,
}

/// Per-item impact over trades with checklist data, largest |impact| first.
///
/// A trade whose map lacks the item counts towards neither side. Items seen
/// on no trade are dropped; ties keep definition order.
pub fn by_checklist_item<T: Borrow<TradeRecord>>(
    definitions: &[ChecklistItemDefinition],
    trades: &[T],
) -> Vec<ChecklistItemImpact> {
    let with_data: Vec<&TradeRecord> = trades
        .iter()
        .map(|t| t.borrow())
        .filter(|t| t.has_checklist_data())
        .collect();

    let mut out: Vec<ChecklistItemImpact> = definitions
        .iter()
        .filter_map(|def| item_impact(def, &with_data))
        .collect();
    out.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    out
}

fn item_impact(def: &ChecklistItemDefinition, trades: &[&TradeRecord]) -> Option<ChecklistItemImpact> {
    let mut followed: Vec<&TradeRecord> = Vec::new();
    let mut not_followed: Vec<&TradeRecord> = Vec::new();
    for &t in trades {
        match t.checklist().and_then(|m| m.get(&def.id)) {
            Some(true) => followed.push(t),
            Some(false) => not_followed.push(t),
            None => {}
        }
    }
    if followed.is_empty() && not_followed.is_empty() {
        return None;
    }

    let followed_pnl = avg_pnl(&followed);
    let not_followed_pnl = avg_pnl(&not_followed);
    let followed_win_rate = win_rate(&followed);
    let not_followed_win_rate = win_rate(&not_followed);

    Some(ChecklistItemImpact {
        item_id: def.id.clone(),
        item: def.name.clone(),
        category: def.category,
        followed_trades: followed.len(),
        not_followed_trades: not_followed.len(),
        followed_pnl,
        not_followed_pnl,
        followed_win_rate,
        not_followed_win_rate,
        impact: followed_pnl - not_followed_pnl,
        win_rate_impact: followed_win_rate - not_followed_win_rate,
    })
}

/// First `n` entries of an impact ranking.
pub fn top_impact(mut ranked: Vec<ChecklistItemImpact>, n: usize) -> Vec<ChecklistItemImpact> {
    ranked.truncate(n);
    ranked
}
