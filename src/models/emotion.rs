use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed vocabulary of emotion labels a trade can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Confident,
    Excited,
    Disciplined,
    Neutral,
    Anxious,
    Fearful,
    Greedy,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Confident,
        Emotion::Excited,
        Emotion::Disciplined,
        Emotion::Neutral,
        Emotion::Anxious,
        Emotion::Fearful,
        Emotion::Greedy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Confident => "Confident",
            Emotion::Excited => "Excited",
            Emotion::Disciplined => "Disciplined",
            Emotion::Neutral => "Neutral",
            Emotion::Anxious => "Anxious",
            Emotion::Fearful => "Fearful",
            Emotion::Greedy => "Greedy",
        }
    }

    /// Case-insensitive label lookup. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Emotion> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_loosely() {
        assert_eq!(Emotion::from_label("confident"), Some(Emotion::Confident));
        assert_eq!(Emotion::from_label(" GREEDY "), Some(Emotion::Greedy));
        assert_eq!(Emotion::from_label("bored"), None);
    }
}
