use chrono::NaiveDate;

use crate::models::{
    AdherenceMap, ChecklistCategory, ChecklistItemDefinition, Numeric, StrategyRecord,
    TradeNotes, TradeRecord,
};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Bare trade on `day` with the given P&L and one unit of quantity.
pub fn make_trade(id: &str, day: &str, pnl: f64) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        strategy_id: None,
        instrument: "ES".to_string(),
        date: date(day),
        entry_price: Numeric::Number(0.0),
        exit_price: None,
        stop_loss: None,
        quantity: Numeric::Number(1.0),
        profit_loss: Numeric::Number(pnl),
        emotion: None,
        notes: TradeNotes::default(),
    }
}

pub fn with_checklist(mut trade: TradeRecord, items: &[(&str, bool)]) -> TradeRecord {
    let checklist: AdherenceMap = items
        .iter()
        .map(|&(id, followed)| (id.to_string(), followed))
        .collect();
    trade.notes = TradeNotes::Envelope {
        checklist,
        user_notes: String::new(),
    };
    trade
}

pub fn with_prices(
    mut trade: TradeRecord,
    entry: f64,
    exit: Option<f64>,
    stop: Option<f64>,
) -> TradeRecord {
    trade.entry_price = Numeric::Number(entry);
    trade.exit_price = exit.map(Numeric::Number);
    trade.stop_loss = stop.map(Numeric::Number);
    trade
}

pub fn with_emotion(mut trade: TradeRecord, emotion: &str) -> TradeRecord {
    trade.emotion = Some(emotion.to_string());
    trade
}

pub fn with_strategy(mut trade: TradeRecord, strategy_id: &str) -> TradeRecord {
    trade.strategy_id = Some(strategy_id.to_string());
    trade
}

pub fn make_strategy(id: &str, status: &str) -> StrategyRecord {
    StrategyRecord {
        id: id.to_string(),
        name: Some(format!("{} strategy", id)),
        status: status.to_string(),
    }
}

pub fn make_item(id: &str, name: &str) -> ChecklistItemDefinition {
    ChecklistItemDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category: ChecklistCategory::PreTrade,
        description: None,
    }
}
