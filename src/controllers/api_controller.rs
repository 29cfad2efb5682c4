use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    controllers::FilterQuery,
    error::AppError,
    models::{Alert, Filter},
    services::{feed::FeedStatus, stats_service::Stats},
    AppState,
};

// GET /api/alerts?filter=dump
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(q): Query<FilterQuery>,
) -> Result<Json<Vec<Alert>>, AppError> {
    let filter = match q.filter.as_deref() {
        Some(raw) => raw.parse::<Filter>()?,
        None => Filter::All,
    };

    Ok(Json(state.feed.filtered(filter).await))
}

// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    let snapshot = state.feed.snapshot().await;
    Json(Stats::from_alerts(&snapshot))
}

// GET /api/feed
pub async fn get_feed_status(State(state): State<AppState>) -> Json<FeedStatus> {
    Json(state.feed.status().await)
}
