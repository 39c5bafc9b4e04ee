use super::types::{AnalyzeParams, ErrorResponse};
use crate::{
    Error,
    sentiment::{Sentiment, SentimentAnalyzer},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    info!("Received sentiment request");

    let Some(text) = params.text else {
        let err = Error::missing_parameter("text");
        warn!("Rejected request: {}", err);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        ));
    };

    let scores = state.analyzer.score(&text);
    let sentiment = Sentiment::from_compound(scores.compound);

    info!(
        "Scored request: compound={}, sentiment={}",
        scores.compound, sentiment
    );

    Ok(sentiment.to_string())
}
