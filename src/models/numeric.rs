use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field as the journal stores it: either a JSON number or text.
///
/// Parsing never fails loudly. Text that is not a finite number reads as
/// `None` from [`Numeric::parse`] and as `0.0` from [`Numeric::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn parse(&self) -> Option<f64> {
        let v = match self {
            Numeric::Number(v) => *v,
            Numeric::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    pub fn value(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Number(0.0)
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Number(v)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(v) => write!(f, "{}", v),
            Numeric::Text(s) => write!(f, "{}", s),
        }
    }
}
