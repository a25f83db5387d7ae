use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AdherenceMap, Emotion, Numeric, TradeNotes};

/// One executed trade as recorded in the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    #[serde(default)]
    pub strategy_id: Option<String>,
    #[serde(default)]
    pub instrument: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_price: Numeric,
    #[serde(default)]
    pub exit_price: Option<Numeric>,
    #[serde(default)]
    pub stop_loss: Option<Numeric>,
    #[serde(default)]
    pub quantity: Numeric,
    #[serde(default)]
    pub profit_loss: Numeric,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub notes: TradeNotes,
}

impl TradeRecord {
    /// Realized P&L, 0 when missing or unparseable.
    pub fn pnl(&self) -> f64 {
        self.profit_loss.value()
    }

    pub fn is_win(&self) -> bool {
        self.pnl() > 0.0
    }

    /// Quantity as a whole non-negative number of units.
    pub fn volume(&self) -> u64 {
        let q = self.quantity.value();
        if q > 0.0 {
            q.trunc() as u64
        } else {
            0
        }
    }

    pub fn checklist(&self) -> Option<&AdherenceMap> {
        self.notes.checklist()
    }

    /// True when the trade carries a non-empty adherence map.
    pub fn has_checklist_data(&self) -> bool {
        self.checklist().is_some_and(|m| !m.is_empty())
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion.as_deref().and_then(Emotion::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_journal_shape() {
        let raw = r#"{
            "id": "t1",
            "strategyId": "s1",
            "instrument": "ES",
            "date": "2024-03-04",
            "entryPrice": 100,
            "exitPrice": "110",
            "stopLoss": null,
            "quantity": 2,
            "profitLoss": "20.5",
            "emotion": "Confident",
            "notes": "{\"checklist\":{\"c1\":true},\"userNotes\":\"clean\"}"
        }"#;
        let t: TradeRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(t.pnl(), 20.5);
        assert_eq!(t.volume(), 2);
        assert!(t.stop_loss.is_none());
        assert!(t.has_checklist_data());
        assert_eq!(t.notes.user_notes(), "clean");
        assert_eq!(t.emotion(), Some(Emotion::Confident));
    }

    #[test]
    fn missing_optional_fields_default() {
        let t: TradeRecord = serde_json::from_str(r#"{"id":"t2","date":"2024-03-05"}"#).unwrap();
        assert_eq!(t.pnl(), 0.0);
        assert_eq!(t.volume(), 0);
        assert!(!t.has_checklist_data());
        assert_eq!(t.notes.user_notes(), "");
    }

    #[test]
    fn negative_or_garbage_quantity_has_no_volume() {
        let mut t: TradeRecord = serde_json::from_str(r#"{"id":"t3","date":"2024-03-05"}"#).unwrap();
        t.quantity = Numeric::Number(-3.0);
        assert_eq!(t.volume(), 0);
        t.quantity = Numeric::from("lots");
        assert_eq!(t.volume(), 0);
        t.quantity = Numeric::Number(3.9);
        assert_eq!(t.volume(), 3);
    }
}
