use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Checklist item id -> followed.
pub type AdherenceMap = BTreeMap<String, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    #[serde(rename = "pre-trade")]
    PreTrade,
    #[serde(rename = "post-trade")]
    PostTrade,
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecklistCategory::PreTrade => write!(f, "pre-trade"),
            ChecklistCategory::PostTrade => write!(f, "post-trade"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItemDefinition {
    pub id: String,
    pub name: String,
    pub category: ChecklistCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of a checklist envelope stored inside the notes text.
#[derive(Serialize, Deserialize)]
struct EnvelopeWire {
    checklist: AdherenceMap,
    #[serde(rename = "userNotes", default)]
    user_notes: Option<String>,
}

/// A trade's notes, classified once when the record is read.
///
/// The notes text either carries a serialized `{checklist, userNotes}`
/// envelope or is plain text. Anything that fails to parse as an envelope
/// is kept whole as plain notes with no checklist.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeNotes {
    Envelope {
        checklist: AdherenceMap,
        user_notes: String,
    },
    Plain {
        text: String,
    },
}

impl TradeNotes {
    pub fn parse(raw: &str) -> TradeNotes {
        match serde_json::from_str::<EnvelopeWire>(raw) {
            Ok(env) => TradeNotes::Envelope {
                checklist: env.checklist,
                user_notes: env.user_notes.unwrap_or_default(),
            },
            Err(_) => TradeNotes::Plain {
                text: raw.to_string(),
            },
        }
    }

    pub fn checklist(&self) -> Option<&AdherenceMap> {
        match self {
            TradeNotes::Envelope { checklist, .. } => Some(checklist),
            TradeNotes::Plain { .. } => None,
        }
    }

    pub fn user_notes(&self) -> &str {
        match self {
            TradeNotes::Envelope { user_notes, .. } => user_notes,
            TradeNotes::Plain { text } => text,
        }
    }

    /// Text form handed back to the persistence layer.
    pub fn to_raw(&self) -> serde_json::Result<String> {
        match self {
            TradeNotes::Envelope {
                checklist,
                user_notes,
            } => serde_json::to_string(&EnvelopeWire {
                checklist: checklist.clone(),
                user_notes: Some(user_notes.clone()),
            }),
            TradeNotes::Plain { text } => Ok(text.clone()),
        }
    }
}

impl Default for TradeNotes {
    fn default() -> Self {
        TradeNotes::Plain {
            text: String::new(),
        }
    }
}

impl Serialize for TradeNotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = self.to_raw().map_err(S::Error::custom)?;
        serializer.serialize_str(&raw)
    }
}

impl<'de> Deserialize<'de> for TradeNotes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(TradeNotes::parse(raw.as_deref().unwrap_or("")))
    }
}
