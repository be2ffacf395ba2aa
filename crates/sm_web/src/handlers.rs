use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use sm_core::{Article, Error, NewsAnalysis, Snapshot, SnapshotStore};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::AppState;

pub const AUDIO_FILE_NAME: &str = "news_summary.mp3";

#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    pub company: String,
}

impl CompanyQuery {
    fn company(&self) -> Result<&str, ApiError> {
        let company = self.company.trim();
        if company.is_empty() {
            return Err(ApiError::bad_request("Query parameter 'company' must not be empty"));
        }
        Ok(company)
    }
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment_analysis: Vec<Article>,
}

pub async fn fetch_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<NewsAnalysis>, ApiError> {
    let company = query.company()?;
    let analysis = state.pipeline.analyze(company).await?;
    state
        .snapshots
        .save_or_warn(&Snapshot::news(company, &analysis.articles, &analysis.report))
        .await;
    Ok(Json(analysis))
}

pub async fn analyze_sentiment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let company = query.company()?;
    let articles = state.pipeline.sentiment(company).await?;
    state.snapshots.save_or_warn(&Snapshot::sentiment(company, &articles)).await;
    Ok(Json(SentimentResponse {
        sentiment_analysis: articles,
    }))
}

pub async fn generate_tts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Response, ApiError> {
    let company = query.company()?;
    let path = state.audio_path();
    let written = state.pipeline.generate_audio(company, &path).await?;

    let audio = tokio::fs::read(&written).await;
    if let Err(e) = tokio::fs::remove_file(&written).await {
        warn!("Could not remove {}: {}", written.display(), e);
    }
    let audio = audio.map_err(|e| Error::SynthesisFailed(format!("could not read {}: {}", written.display(), e)))?;

    info!("🎧 Serving {} bytes of audio for '{}'", audio.len(), company);
    Ok((
        [
            (CONTENT_TYPE, "audio/mpeg".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME)),
        ],
        audio,
    )
        .into_response())
}
