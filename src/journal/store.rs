use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::JournalError;
use crate::models::{ChecklistItemDefinition, PsychologyEntry, StrategyRecord, TradeRecord};

/// Every record stream the journal keeps, as handed over by storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSnapshot {
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    #[serde(default)]
    pub strategies: Vec<StrategyRecord>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItemDefinition>,
    #[serde(default)]
    pub psychology: Vec<PsychologyEntry>,
}

impl JournalSnapshot {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| JournalError::Io {
            path: shown.clone(),
            source,
        })?;
        let snapshot = Self::from_json(&content).map_err(|source| JournalError::Json {
            path: shown.clone(),
            source,
        })?;

        info!(
            "Loaded journal {}: {} trades, {} strategies, {} checklist items, {} psychology entries",
            shown,
            snapshot.trades.len(),
            snapshot.strategies.len(),
            snapshot.checklist.len(),
            snapshot.psychology.len()
        );
        let plain_json = snapshot
            .trades
            .iter()
            .filter(|t| t.checklist().is_none() && t.notes.user_notes().trim_start().starts_with('{'))
            .count();
        if plain_json > 0 {
            warn!(
                "{} trade(s) have JSON-like notes without a checklist envelope; treated as plain notes",
                plain_json
            );
        }
        Ok(snapshot)
    }

    /// Write the snapshot back, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), JournalError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let io_err = |source| JournalError::Io {
            path: shown.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| JournalError::Json {
            path: shown.clone(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)?;
        info!("Saved journal {} ({} trades)", shown, self.trades.len());
        Ok(())
    }
}
