use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{
    controllers::{cookie_filter, filter_cookie, is_htmx, query_filter, FilterQuery},
    error::AppError,
    render,
    services::dashboard_service,
    AppState,
};

// GET /  (optionally ?filter=pump)
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Query(q): Query<FilterQuery>,
) -> Result<Response, AppError> {
    let explicit = query_filter(&q);
    let filter = explicit.unwrap_or_else(|| cookie_filter(&state, &jar));

    let live = state.feed.status().await.live;
    let snapshot = state.feed.snapshot().await;

    let ctx = dashboard_service::dashboard_ctx(&snapshot, live, filter, &mut rand::thread_rng());
    let body = render::render_fragment(&state, "pages/dashboard", &ctx)?;

    // remember an explicit choice so later HTMX swaps keep it
    let jar = match explicit {
        Some(f) => jar.add(filter_cookie(&state, f)),
        None => jar,
    };

    if is_htmx(&headers) {
        return Ok((jar, Html(body)).into_response());
    }

    let page = render::render_full(&state, "MEGAPUMP", body, live)?;
    Ok((jar, Html(page)).into_response())
}

pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let body = match render::render_fragment(&state, "pages/not_found", &json!({})) {
        Ok(b) => b,
        Err(e) => return e.into_response(),
    };

    if is_htmx(&headers) {
        return (StatusCode::NOT_FOUND, Html(body)).into_response();
    }

    let live = state.feed.is_live().await;
    match render::render_full(&state, "404", body, live) {
        Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Html("ok".to_string()))
}
