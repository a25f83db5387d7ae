pub mod checklist;
pub mod emotion;
pub mod numeric;
pub mod psychology;
pub mod strategy;
pub mod trade;

pub use checklist::{AdherenceMap, ChecklistCategory, ChecklistItemDefinition, TradeNotes};
pub use emotion::Emotion;
pub use numeric::Numeric;
pub use psychology::PsychologyEntry;
pub use strategy::{StrategyRecord, StrategyStatus};
pub use trade::TradeRecord;
