use serde::Serialize;
use std::fmt;

/// Component scores reported by the analyzer for one piece of text.
/// Each component is in [0.0, 1.0]; `compound` is the aggregate in [-1.0, 1.0]
/// and is the only field that drives the label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// A compound score strictly above zero is positive. Zero itself is
    /// negative: there is no neutral label.
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
