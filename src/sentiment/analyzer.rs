use super::types::{Sentiment, SentimentScores};
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon-based scorer wrapping the VADER analyzer. The lexicon is loaded
/// once at construction and the analyzer is read-only afterwards, so a single
/// instance can be shared across requests.
pub struct SentimentAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    pub fn score(&self, text: &str) -> SentimentScores {
        let raw = self.inner.polarity_scores(text);
        let field = |key: &str| raw.get(key).copied().unwrap_or(0.0);

        let scores = SentimentScores {
            neg: field("neg"),
            neu: field("neu"),
            pos: field("pos"),
            compound: field("compound"),
        };

        debug!(
            "Scored {} chars of text: compound={}",
            text.len(),
            scores.compound
        );

        scores
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(self.score(text).compound)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
