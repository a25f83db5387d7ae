use serde_json::json;
use trade_journal::journal::JournalSnapshot;
use trade_journal::models::TradeRecord;

/// Build a trade the way storage hands it over: JSON with P&L as text and
/// the checklist embedded in the notes.
pub fn trade_json(
    id: &str,
    date: &str,
    pnl: &str,
    strategy: Option<&str>,
    checklist: &[(&str, bool)],
) -> serde_json::Value {
    let notes = if checklist.is_empty() {
        format!("notes for {}", id)
    } else {
        let map: serde_json::Map<String, serde_json::Value> = checklist
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        json!({ "checklist": map, "userNotes": format!("notes for {}", id) }).to_string()
    };
    json!({
        "id": id,
        "strategyId": strategy,
        "instrument": "ES",
        "date": date,
        "entryPrice": 100,
        "quantity": 1,
        "profitLoss": pnl,
        "notes": notes,
    })
}

pub fn make_trade(id: &str, date: &str, pnl: f64) -> TradeRecord {
    serde_json::from_value(trade_json(id, date, &pnl.to_string(), None, &[])).unwrap()
}

/// A small journal: two active-strategy weeks, one testing-strategy trade,
/// one untagged trade, three checklist items and two psychology entries.
pub fn sample_snapshot() -> JournalSnapshot {
    let trades = vec![
        trade_json("t1", "2024-03-04", "100", Some("live"), &[("plan", true), ("size", true)]),
        trade_json("t2", "2024-03-05", "200", Some("live"), &[("plan", true), ("size", false)]),
        trade_json("t3", "2024-03-08", "-50", Some("live"), &[("plan", false), ("size", true)]),
        trade_json("t4", "2024-03-10", "10", Some("live"), &[("plan", false)]),
        trade_json("t5", "2024-03-11", "oops", Some("live"), &[]),
        trade_json("t6", "2024-03-11", "900", Some("paper"), &[("plan", true)]),
        trade_json("t7", "2024-03-12", "-75", None, &[("plan", true)]),
    ];
    let raw = json!({
        "trades": trades,
        "strategies": [
            { "id": "live", "name": "Opening range", "status": "active" },
            { "id": "paper", "name": "Fade", "status": "testing" }
        ],
        "checklist": [
            { "id": "plan", "name": "Followed plan", "category": "pre-trade" },
            { "id": "size", "name": "Correct size", "category": "pre-trade" },
            { "id": "review", "name": "Reviewed trade", "category": "post-trade" }
        ],
        "psychology": [
            { "date": "2024-03-05", "dailyPnl": "180", "bestTradeId": "t2", "reflections": "patient" },
            { "date": "2024-03-04", "reflections": "nervous open" }
        ]
    });
    serde_json::from_value(raw).unwrap()
}
