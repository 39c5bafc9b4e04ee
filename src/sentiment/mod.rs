mod analyzer;
mod types;

pub use analyzer::SentimentAnalyzer;
pub use types::{Sentiment, SentimentScores};
