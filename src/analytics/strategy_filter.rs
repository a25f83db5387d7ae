use std::borrow::Borrow;
use tracing::debug;

use crate::models::{StrategyRecord, TradeRecord};

/// True when the trade's strategy resolves to an active strategy.
pub fn is_active_trade(trade: &TradeRecord, strategies: &[StrategyRecord]) -> bool {
    trade
        .strategy_id
        .as_deref()
        .and_then(|id| strategies.iter().find(|s| s.id == id))
        .is_some_and(StrategyRecord::is_active)
}

/// Restrict trades to those on active strategies, preserving order.
///
/// With no strategies configured the filter is off and every trade passes.
pub fn filter_active<'a, T: Borrow<TradeRecord>>(
    trades: &'a [T],
    strategies: &[StrategyRecord],
) -> Vec<&'a TradeRecord> {
    let all = trades.iter().map(|t| t.borrow());
    if strategies.is_empty() {
        return all.collect();
    }
    let kept: Vec<&TradeRecord> = all.filter(|t| is_active_trade(t, strategies)).collect();
    debug!(
        "Strategy filter kept {} of {} trades ({} strategies)",
        kept.len(),
        trades.len(),
        strategies.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn no_strategies_means_no_filtering() {
        let trades = vec![
            make_trade("a", "2024-03-04", 1.0),
            with_strategy(make_trade("b", "2024-03-04", 1.0), "s1"),
        ];
        assert_eq!(filter_active(&trades, &[]).len(), 2);
    }

    #[test]
    fn only_active_strategies_pass() {
        let strategies = vec![
            make_strategy("live", "active"),
            make_strategy("paper", "testing"),
            make_strategy("old", "archived"),
        ];
        let trades = vec![
            with_strategy(make_trade("a", "2024-03-04", 1.0), "live"),
            with_strategy(make_trade("b", "2024-03-04", 1.0), "paper"),
            with_strategy(make_trade("c", "2024-03-04", 1.0), "old"),
            with_strategy(make_trade("d", "2024-03-04", 1.0), "missing"),
            make_trade("e", "2024-03-04", 1.0),
            with_strategy(make_trade("f", "2024-03-05", 1.0), "live"),
        ];
        let ids: Vec<&str> = filter_active(&trades, &strategies)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "f"]);
    }
}
