use pretty_assertions::assert_eq;
use rstest::rstest;
use sentilabel::sentiment::{Sentiment, SentimentAnalyzer};

#[rstest]
#[case(1.0, Sentiment::Positive)]
#[case(0.5, Sentiment::Positive)]
#[case(0.0001, Sentiment::Positive)]
#[case(0.0, Sentiment::Negative)]
#[case(-0.0001, Sentiment::Negative)]
#[case(-0.5, Sentiment::Negative)]
#[case(-1.0, Sentiment::Negative)]
fn test_label_from_compound(#[case] compound: f64, #[case] expected: Sentiment) {
    assert_eq!(Sentiment::from_compound(compound), expected);
}

#[test]
fn test_label_strings() {
    assert_eq!(Sentiment::Positive.as_str(), "positive");
    assert_eq!(Sentiment::Negative.as_str(), "negative");
    assert_eq!(Sentiment::Positive.to_string(), "positive");
    assert_eq!(Sentiment::Negative.to_string(), "negative");
}

#[rstest]
#[case("I love this", Sentiment::Positive)]
#[case("I hate this", Sentiment::Negative)]
#[case("", Sentiment::Negative)]
#[case("the cat sat on the mat", Sentiment::Negative)]
#[case("VADER is smart, handsome, and funny", Sentiment::Positive)]
#[case("today was a terrible, horrible, no good day", Sentiment::Negative)]
fn test_classify_text(#[case] text: &str, #[case] expected: Sentiment) {
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(analyzer.classify(text), expected);
}

#[test]
fn test_scores_expose_all_components() {
    let analyzer = SentimentAnalyzer::new();
    let scores = analyzer.score("I love this");

    assert!(scores.compound > 0.0);
    assert!(scores.pos > 0.0);
    assert!(scores.neg >= 0.0 && scores.neg <= 1.0);
    assert!(scores.neu >= 0.0 && scores.neu <= 1.0);
}

#[test]
fn test_scoring_is_deterministic() {
    let analyzer = SentimentAnalyzer::new();
    let first = analyzer.score("I love this").compound;
    let second = analyzer.score("I love this").compound;
    assert_eq!(first, second);
}
